use crate::error::ClientError;
use crate::model::ServiceTimerUpdate;

/// The SDK's controller HTTP client, consumed as exactly the two
/// operations this subsystem needs. HTTP framing, TLS, and authentication
/// headers are out of scope for this core — the default implementation
/// lives in `posture-client`.
#[async_trait::async_trait]
pub trait ControllerClient: Send + Sync {
    async fn post_posture_response(
        &self,
        body: serde_json::Value,
    ) -> Result<SubmitOutcome, ClientError>;

    async fn post_posture_response_bulk(
        &self,
        bodies: Vec<serde_json::Value>,
    ) -> Result<SubmitOutcome, ClientError>;
}

/// What a successful submission tells this subsystem about the world.
#[derive(Debug, Clone, Default)]
pub struct SubmitOutcome {
    pub service_timers: Vec<ServiceTimerUpdate>,
    /// Present if the controller's response identified its own instance.
    /// The scheduler compares this observed value against the one it has
    /// cached from the last forced re-emission; a mismatch means the
    /// controller restarted, or the request landed on a different instance.
    pub controller_instance_id: Option<String>,
}
