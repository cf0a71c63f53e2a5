use std::sync::Arc;

use tracing::warn;

use crate::client::ControllerClient;
use crate::model::{ResponseBody, ServiceRefresh};

/// One-shot "endpoint woke up / unlocked" signal. Unlike the tick-driven
/// responses, this is reported on demand by a host SDK hook (screen
/// lock/unlock, sleep/wake) and is a no-op when both flags are false —
/// there is nothing worth telling the controller.
pub async fn report_endpoint_state_change(
    client: &Arc<dyn ControllerClient>,
    refresh: &Arc<dyn ServiceRefresh>,
    woken: bool,
    unlocked: bool,
) {
    if !woken && !unlocked {
        return;
    }

    let body = ResponseBody::EndpointState { woken, unlocked }.to_json();

    match client.post_posture_response(body).await {
        Ok(outcome) => {
            for timer in &outcome.service_timers {
                refresh.force_service_update(&timer.id).await;
            }
        }
        Err(err) => {
            warn!(error = %err, "endpoint state change submission failed");
        }
    }
}
