use serde::{Deserialize, Serialize};

use crate::error::PostureError;

/// Configuration for the posture subsystem. Evidence providers, the
/// controller client, and the host collaborators are injected separately
/// into `Reconciler::new` rather than carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureConfig {
    /// Reconciler tick interval. Must be non-zero.
    pub interval_secs: u64,
}

impl PostureConfig {
    pub fn new(interval_secs: u64) -> Result<Self, PostureError> {
        if interval_secs == 0 {
            return Err(PostureError::InvalidConfig(
                "interval_secs must be greater than zero".into(),
            ));
        }
        Ok(Self { interval_secs })
    }
}
