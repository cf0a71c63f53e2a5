//! `ControllerClient` over HTTP with bearer auth.
//!
//! Error bodies map to `ClientError` based on HTTP status; a 404 on either
//! endpoint is the controller's way of saying the bulk submission route
//! does not exist yet, and is what permanently disables bulk mode.

use async_trait::async_trait;
use posture_core::{ClientError, ControllerClient, ServiceTimerUpdate, SubmitOutcome};
use tracing::debug;

const POSTURE_RESPONSE_PATH: &str = "/posture-response";
const POSTURE_RESPONSE_BULK_PATH: &str = "/posture-response-bulk";
const CONTROLLER_INSTANCE_ID_HEADER: &str = "ziti-instance-id";

pub struct ReqwestControllerClient {
    base_url: String,
    bearer_token: String,
    client: reqwest::Client,
}

impl ReqwestControllerClient {
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn controller_instance_id(resp: &reqwest::Response) -> Option<String> {
        resp.headers()
            .get(CONTROLLER_INSTANCE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    async fn handle_error_response(&self, resp: reqwest::Response) -> ClientError {
        let status = resp.status().as_u16();
        if status == 404 {
            return ClientError::NotImplemented;
        }
        let body = resp.text().await.unwrap_or_default();
        ClientError::Transport(format!("HTTP {status}: {body}"))
    }

    fn service_timers(body: &serde_json::Value) -> Vec<ServiceTimerUpdate> {
        body.get("services")
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| ServiceTimerUpdate {
                        id: entry
                            .get("id")
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string(),
                        name: entry
                            .get("name")
                            .and_then(|v| v.as_str())
                            .map(String::from),
                        timeout: entry.get("timeout").and_then(|v| v.as_i64()),
                        timeout_remaining: entry.get("timeoutRemaining").and_then(|v| v.as_i64()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_timers_parses_known_fields() {
        let body = serde_json::json!({
            "services": [
                {"id": "svc-1", "name": "example", "timeout": 3600, "timeoutRemaining": 120},
                {"id": "svc-2"}
            ]
        });

        let timers = ReqwestControllerClient::service_timers(&body);
        assert_eq!(timers.len(), 2);
        assert_eq!(timers[0].id, "svc-1");
        assert_eq!(timers[0].name.as_deref(), Some("example"));
        assert_eq!(timers[0].timeout, Some(3600));
        assert_eq!(timers[0].timeout_remaining, Some(120));
        assert_eq!(timers[1].id, "svc-2");
        assert_eq!(timers[1].name, None);
    }

    #[test]
    fn service_timers_defaults_to_empty_without_the_key() {
        let body = serde_json::json!({"other": "field"});
        assert!(ReqwestControllerClient::service_timers(&body).is_empty());
    }

    #[test]
    fn url_joins_base_and_path_without_doubling_slashes() {
        let client = ReqwestControllerClient::new("https://ctrl.example/", "token");
        assert_eq!(client.url(POSTURE_RESPONSE_PATH), "https://ctrl.example/posture-response");
    }
}

#[async_trait]
impl ControllerClient for ReqwestControllerClient {
    async fn post_posture_response(
        &self,
        body: serde_json::Value,
    ) -> Result<SubmitOutcome, ClientError> {
        let resp = self
            .client
            .post(self.url(POSTURE_RESPONSE_PATH))
            .bearer_auth(&self.bearer_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(self.handle_error_response(resp).await);
        }

        let controller_instance_id = Self::controller_instance_id(&resp);
        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        debug!("posture response accepted");
        Ok(SubmitOutcome {
            service_timers: Self::service_timers(&json),
            controller_instance_id,
        })
    }

    async fn post_posture_response_bulk(
        &self,
        bodies: Vec<serde_json::Value>,
    ) -> Result<SubmitOutcome, ClientError> {
        let count = bodies.len();
        let resp = self
            .client
            .post(self.url(POSTURE_RESPONSE_BULK_PATH))
            .bearer_auth(&self.bearer_token)
            .json(&bodies)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(self.handle_error_response(resp).await);
        }

        let controller_instance_id = Self::controller_instance_id(&resp);
        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        debug!(count, "bulk posture response accepted");
        Ok(SubmitOutcome {
            service_timers: Self::service_timers(&json),
            controller_instance_id,
        })
    }
}
