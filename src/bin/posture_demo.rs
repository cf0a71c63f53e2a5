//! Minimal host-SDK wiring: a static service catalogue, a fake session
//! that is "authenticated" from the moment it starts, and a service-refresh
//! collaborator that just logs. Demonstrates the Reconciler tick loop
//! running against the real platform providers and HTTP client.

use std::sync::{Arc, Mutex};

use posture::{
    DefaultDomainProvider, DefaultMacProvider, DefaultOsProvider, DefaultProcessProvider,
    PostureConfig, PostureQuery, PostureQuerySet, QueryType, ReqwestControllerClient, Reconciler,
    Service, ServiceCatalog, ServiceRefresh, SessionSnapshot, SessionSource,
};
use tokio::sync::watch;
use tracing::info;

struct StaticCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog for StaticCatalog {
    fn services(&self) -> Vec<Service> {
        self.services.clone()
    }
}

struct FakeSession {
    session_id: Mutex<String>,
}

impl SessionSource for FakeSession {
    fn session(&self) -> Option<SessionSnapshot> {
        Some(SessionSnapshot {
            session_id: self.session_id.lock().unwrap().clone(),
            fully_authenticated: true,
        })
    }
}

struct LoggingRefresh;

#[async_trait::async_trait]
impl ServiceRefresh for LoggingRefresh {
    async fn force_service_update(&self, service_id: &str) {
        info!(service_id, "forcing service update");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let controller_url =
        std::env::var("ZITI_CONTROLLER_URL").unwrap_or_else(|_| "https://localhost:1280".into());
    let bearer_token = std::env::var("ZITI_API_TOKEN").unwrap_or_default();

    let catalog = Arc::new(StaticCatalog {
        services: vec![Service {
            id: "svc-1".into(),
            name: "example-service".into(),
            posture_query_sets: vec![PostureQuerySet {
                policy_id: "policy-1".into(),
                queries: vec![
                    PostureQuery {
                        id: "q-os".into(),
                        query_type: QueryType::Os,
                        timeout: posture::NO_TIMEOUT,
                    },
                    PostureQuery {
                        id: "q-mac".into(),
                        query_type: QueryType::Mac,
                        timeout: posture::NO_TIMEOUT,
                    },
                ],
            }],
        }],
    });

    let session = Arc::new(FakeSession {
        session_id: Mutex::new(uuid::Uuid::new_v4().to_string()),
    });

    let config = PostureConfig::new(60)?;
    let client = Arc::new(ReqwestControllerClient::new(controller_url, bearer_token));

    let mut reconciler = Reconciler::new(
        config,
        catalog,
        session,
        Arc::new(LoggingRefresh),
        client,
        Arc::new(DefaultOsProvider::new()),
        Arc::new(DefaultMacProvider::new()),
        Arc::new(DefaultDomainProvider::new()),
        Arc::new(DefaultProcessProvider::new()),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let run_handle = tokio::spawn(async move {
        reconciler.run(shutdown_rx).await;
    });

    tokio::signal::ctrl_c().await?;
    info!("ctrl-c received, tearing down posture reconciler");
    let _ = shutdown_tx.send(true);
    run_handle.await?;

    Ok(())
}
