use thiserror::Error;

/// Errors surfaced by fallible, non-"log and continue" operations in the
/// posture subsystem: construction-time misconfiguration and controller
/// transport failures. Evidence-gathering failures are not represented
/// here — they degrade the affected response field and are logged, never
/// propagated as an `Err`.
#[derive(Debug, Error)]
pub enum PostureError {
    #[error("invalid posture config: {0}")]
    InvalidConfig(String),

    #[error("controller transport error: {0}")]
    Transport(#[from] ClientError),
}

/// Errors from the `ControllerClient` seam. `NotImplemented` is the HTTP
/// 404 sentinel that permanently disables bulk mode; everything else is a
/// retryable transport failure.
#[derive(Debug, Error, Clone)]
pub enum ClientError {
    #[error("controller does not implement this endpoint")]
    NotImplemented,

    #[error("controller request failed: {0}")]
    Transport(String),
}
