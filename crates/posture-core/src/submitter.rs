use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::ControllerClient;
use crate::model::ServiceRefresh;
use crate::state::PostureState;

/// Posts dirty responses to the controller, preferring the bulk endpoint
/// until it is proven unavailable.
pub struct Submitter {
    client: Arc<dyn ControllerClient>,
    refresh: Arc<dyn ServiceRefresh>,
}

impl Submitter {
    pub fn new(client: Arc<dyn ControllerClient>, refresh: Arc<dyn ServiceRefresh>) -> Self {
        Self { client, refresh }
    }

    pub async fn submit(&self, state: &mut PostureState) {
        let dirty = state.cache.dirty();
        if dirty.is_empty() {
            return;
        }

        if state.bulk_disabled {
            self.submit_individual(state, dirty).await;
        } else {
            self.submit_bulk(state, dirty).await;
        }
    }

    /// Bulk submission to `/posture-response-bulk`. A 404 means the
    /// controller doesn't support the bulk endpoint: fall back to
    /// individual submission permanently, for this process's lifetime.
    async fn submit_bulk(
        &self,
        state: &mut PostureState,
        dirty: Vec<(crate::model::ResponseKey, crate::model::ResponseBody)>,
    ) {
        let keys: Vec<_> = dirty.iter().map(|(k, _)| k.clone()).collect();
        let bodies: Vec<_> = dirty.iter().map(|(_, b)| b.to_json()).collect();

        for key in &keys {
            state.cache.clear_should_send(key);
        }

        match self.client.post_posture_response_bulk(bodies).await {
            Ok(outcome) => {
                debug!(count = keys.len(), "bulk posture response submitted");
                state.must_send = false;
                if let Some(id) = outcome.controller_instance_id {
                    state.observed_controller_instance_id = Some(id);
                }
                for timer in &outcome.service_timers {
                    self.refresh.force_service_update(&timer.id).await;
                }
            }
            Err(crate::error::ClientError::NotImplemented) => {
                warn!("controller does not support bulk posture submission, falling back to individual");
                state.bulk_disabled = true;
                state.must_send = true;
            }
            Err(err) => {
                warn!(error = %err, "bulk posture submission failed, will retry next tick");
                state.must_send = true;
            }
        }
    }

    /// Individual submission to `/posture-response`: one POST per dirty
    /// entry, each entry's own error state tracked independently rather
    /// than retried as one unit.
    async fn submit_individual(
        &self,
        state: &mut PostureState,
        dirty: Vec<(crate::model::ResponseKey, crate::model::ResponseBody)>,
    ) {
        for (key, body) in dirty {
            state.cache.clear_should_send(&key);

            match self.client.post_posture_response(body.to_json()).await {
                Ok(outcome) => {
                    state.set_errored(key.clone(), false);
                    if let Some(id) = outcome.controller_instance_id {
                        state.observed_controller_instance_id = Some(id);
                    }
                    for timer in &outcome.service_timers {
                        self.refresh.force_service_update(&timer.id).await;
                    }
                }
                Err(err) => {
                    warn!(%key, error = %err, "individual posture response submission failed");
                    state.set_errored(key, true);
                }
            }
        }
    }
}
