use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::client::ControllerClient;
use crate::config::PostureConfig;
use crate::model::{
    PostureQuery, QueryType, ResponseBody, ResponseKey, ServiceCatalog, ServiceRefresh,
    SessionSource,
};
use crate::providers::{DomainProvider, MacProvider, OsProvider, ProcessProvider, QueryPlan};
use crate::state::{PostureState, ProcessJobHandle};
use crate::submitter::Submitter;

/// Completion of an off-loop process-inspection job, fed back to the
/// Reconciler's own task over a channel rather than mutating state from the
/// spawned task directly.
struct ProcessJobResult {
    key: ResponseKey,
    query_id: String,
    path: String,
    body: Option<ResponseBody>,
}

/// Drives the posture-assessment tick loop. Owns the `PostureState` and is
/// the only task permitted to mutate it.
pub struct Reconciler {
    state: PostureState,
    config: PostureConfig,
    catalog: Arc<dyn ServiceCatalog>,
    session: Arc<dyn SessionSource>,
    refresh: Arc<dyn ServiceRefresh>,
    client: Arc<dyn ControllerClient>,
    os_provider: Arc<dyn OsProvider>,
    mac_provider: Arc<dyn MacProvider>,
    domain_provider: Arc<dyn DomainProvider>,
    process_provider: Arc<dyn ProcessProvider>,
}

impl Reconciler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: PostureConfig,
        catalog: Arc<dyn ServiceCatalog>,
        session: Arc<dyn SessionSource>,
        refresh: Arc<dyn ServiceRefresh>,
        client: Arc<dyn ControllerClient>,
        os_provider: Arc<dyn OsProvider>,
        mac_provider: Arc<dyn MacProvider>,
        domain_provider: Arc<dyn DomainProvider>,
        process_provider: Arc<dyn ProcessProvider>,
    ) -> Self {
        Self {
            state: PostureState::new(),
            config,
            catalog,
            session,
            refresh,
            client,
            os_provider,
            mac_provider,
            domain_provider,
            process_provider,
        }
    }

    /// Run until `shutdown` fires, ticking immediately on entry and then on
    /// `config.interval_secs`.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(
            self.config.interval_secs,
        ));
        let (tx, mut rx) = mpsc::channel::<ProcessJobResult>(64);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick(&tx).await;
                }
                Some(result) = rx.recv() => {
                    self.apply_process_result(result);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("posture reconciler shutting down");
                        self.state.teardown();
                        return;
                    }
                }
            }
        }
    }

    async fn tick(&mut self, tx: &mpsc::Sender<ProcessJobResult>) {
        let Some(session) = self.session.session() else {
            debug!("no session, skipping posture tick");
            return;
        };
        if !session.fully_authenticated {
            debug!("session not fully authenticated, skipping posture tick");
            return;
        }

        let must_send_now = self.decide_force_send(&session.session_id);

        self.state.cache.mark_all_obsolete_unless_active();

        let plan = self.build_plan();
        self.dispatch_plan(plan, must_send_now, tx).await;

        self.state.cache.evict_obsolete();

        let submitter = Submitter::new(self.client.clone(), self.refresh.clone());
        submitter.submit(&mut self.state).await;
    }

    /// A new session id, a controller instance id that differs from the one
    /// last cached, or a pending forced resend all force a full re-emission
    /// regardless of change state. The cached session/controller ids are
    /// committed to their current values only when this disjunction holds;
    /// otherwise they are left untouched and `must_send` is simply cleared.
    fn decide_force_send(&mut self, session_id: &str) -> bool {
        let new_session = self.state.previous_session_id.as_deref() != Some(session_id);
        let new_controller = self.state.observed_controller_instance_id.is_some()
            && self.state.observed_controller_instance_id != self.state.controller_instance_id;

        let force = new_session || new_controller || self.state.must_send;
        self.state.must_send = false;
        if force {
            self.state.previous_session_id = Some(session_id.to_string());
            self.state.controller_instance_id = self.state.observed_controller_instance_id.clone();
            debug!(new_session, new_controller, "forcing full posture re-emission");
        }
        force
    }

    fn build_plan(&mut self) -> QueryPlan {
        let mut plan = QueryPlan::new();

        for service in self.catalog.services() {
            for set in &service.posture_query_sets {
                for query in &set.queries {
                    // A query declared non-expiring (no timeout) tells the
                    // client it no longer needs the periodic safety-belt
                    // resend for *any* check — this is a one-way flip, never
                    // reset back to true.
                    if query.timeout == crate::model::NO_TIMEOUT {
                        self.state.must_send_every_time = false;
                    }
                    match &query.query_type {
                        QueryType::Os => Self::claim_singleton(&mut plan.os, query),
                        QueryType::Mac => Self::claim_singleton(&mut plan.mac, query),
                        QueryType::Domain => Self::claim_singleton(&mut plan.domain, query),
                        QueryType::Process { path } => {
                            plan.processes.entry(path.clone()).or_insert_with(|| query.clone());
                        }
                        QueryType::ProcessMulti { paths } => {
                            for path in paths {
                                plan.processes
                                    .entry(path.clone())
                                    .or_insert_with(|| query.clone());
                            }
                        }
                    }
                }
            }
        }

        plan
    }

    /// OS/MAC/DOMAIN are singleton slots: the latest sighting of a query
    /// wins, overwriting any earlier claim this tick.
    fn claim_singleton(slot: &mut Option<PostureQuery>, query: &PostureQuery) {
        *slot = Some(query.clone());
    }

    async fn dispatch_plan(
        &mut self,
        plan: QueryPlan,
        must_send_now: bool,
        tx: &mpsc::Sender<ProcessJobResult>,
    ) {
        let sticky = self.state.must_send_every_time;

        if let Some(query) = plan.os {
            if self.state.cache.touch_relevant(ResponseKey::Os) {
                let facts = self.os_provider.identify().await;
                let body = ResponseBody::Os {
                    id: query.id,
                    os_type: facts.os_type,
                    version: facts.version,
                    build: facts.build,
                };
                let errored = self.state.is_errored(&ResponseKey::Os);
                self.state.cache.collect(&ResponseKey::Os, body, errored, sticky, must_send_now);
            }
        }

        if let Some(query) = plan.mac {
            if self.state.cache.touch_relevant(ResponseKey::Mac) {
                let addrs = self.mac_provider.addresses().await;
                let body = ResponseBody::Mac {
                    id: query.id,
                    mac_addresses: addrs,
                };
                let errored = self.state.is_errored(&ResponseKey::Mac);
                self.state.cache.collect(&ResponseKey::Mac, body, errored, sticky, must_send_now);
            }
        }

        if let Some(query) = plan.domain {
            if self.state.cache.touch_relevant(ResponseKey::Domain) {
                let domain = self.domain_provider.domain().await;
                let body = ResponseBody::Domain {
                    id: query.id,
                    domain,
                };
                let errored = self.state.is_errored(&ResponseKey::Domain);
                self.state.cache.collect(&ResponseKey::Domain, body, errored, sticky, must_send_now);
            }
        }

        self.dispatch_processes(plan.processes, tx).await;
    }

    /// Process checks run off the scheduler task: hashing and signer
    /// enumeration are dispatched via `spawn_blocking` inside the provider,
    /// and results return through `tx` rather than mutating `self.state`
    /// from the spawned task.
    async fn dispatch_processes(
        &mut self,
        processes: HashMap<String, PostureQuery>,
        tx: &mpsc::Sender<ProcessJobResult>,
    ) {
        for (path, query) in processes {
            let key = ResponseKey::Process(path.clone());
            if !self.state.cache.touch_relevant(key.clone()) {
                continue;
            }

            let handle = ProcessJobHandle::new(query.id.clone());
            let canceled = handle.canceled.clone();
            self.state.active_work.insert(key.clone(), handle);

            let provider = self.process_provider.clone();
            let tx = tx.clone();
            let query_id = query.id.clone();
            let job_path = path.clone();

            tokio::spawn(async move {
                let facts = provider.inspect(&job_path).await;
                if canceled.load(std::sync::atomic::Ordering::SeqCst) {
                    return;
                }
                let body = ResponseBody::Process {
                    id: query_id.clone(),
                    path: job_path.clone(),
                    is_running: facts.is_running,
                    hash: facts.sha512_hex,
                    signers: facts.signers,
                };
                let _ = tx
                    .send(ProcessJobResult {
                        key: ResponseKey::Process(job_path.clone()),
                        query_id,
                        path: job_path,
                        body: Some(body),
                    })
                    .await;
            });
        }
    }

    fn apply_process_result(&mut self, result: ProcessJobResult) {
        if self.state.active_work.remove(&result.key).is_none() {
            // Job was already torn down (e.g. teardown ran mid-hash);
            // discard the late result.
            return;
        }

        let must_send_now = self.state.must_send;
        let sticky = self.state.must_send_every_time;

        match result.body {
            Some(body) => {
                let errored = self.state.is_errored(&result.key);
                self.state
                    .cache
                    .collect(&result.key, body, errored, sticky, must_send_now);
            }
            None => {
                warn!(path = %result.path, id = %result.query_id, "process inspection produced no result");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PostureQuerySet, Service, SessionSnapshot};
    use crate::providers::{OsFacts, ProcessFacts};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeCatalog(Vec<Service>);
    impl ServiceCatalog for FakeCatalog {
        fn services(&self) -> Vec<Service> {
            self.0.clone()
        }
    }

    struct FakeSession(Mutex<String>);
    impl SessionSource for FakeSession {
        fn session(&self) -> Option<SessionSnapshot> {
            Some(SessionSnapshot {
                session_id: self.0.lock().unwrap().clone(),
                fully_authenticated: true,
            })
        }
    }

    struct NoopRefresh;
    #[async_trait::async_trait]
    impl ServiceRefresh for NoopRefresh {
        async fn force_service_update(&self, _service_id: &str) {}
    }

    struct FakeOs;
    #[async_trait::async_trait]
    impl OsProvider for FakeOs {
        async fn identify(&self) -> OsFacts {
            OsFacts {
                os_type: "linux".into(),
                version: "1".into(),
                build: "ununsed".into(),
            }
        }
    }

    struct FakeMac;
    #[async_trait::async_trait]
    impl MacProvider for FakeMac {
        async fn addresses(&self) -> Vec<String> {
            vec!["aa:bb:cc:dd:ee:ff".into()]
        }
    }

    struct FakeDomain;
    #[async_trait::async_trait]
    impl DomainProvider for FakeDomain {
        async fn domain(&self) -> String {
            String::new()
        }
    }

    struct FakeProcess;
    #[async_trait::async_trait]
    impl ProcessProvider for FakeProcess {
        async fn inspect(&self, _path: &str) -> ProcessFacts {
            ProcessFacts {
                is_running: true,
                sha512_hex: Some("deadbeef".into()),
                signers: vec![],
            }
        }
    }

    /// Always accepts bulk submissions and counts how many calls it saw.
    struct AcceptingClient {
        bulk_calls: AtomicUsize,
        individual_calls: AtomicUsize,
    }
    impl AcceptingClient {
        fn new() -> Self {
            Self {
                bulk_calls: AtomicUsize::new(0),
                individual_calls: AtomicUsize::new(0),
            }
        }
    }
    #[async_trait::async_trait]
    impl ControllerClient for AcceptingClient {
        async fn post_posture_response(
            &self,
            _body: serde_json::Value,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            self.individual_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Default::default())
        }

        async fn post_posture_response_bulk(
            &self,
            _bodies: Vec<serde_json::Value>,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            self.bulk_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Default::default())
        }
    }

    /// Always 404s the bulk endpoint, accepts individual submissions.
    struct BulkUnsupportedClient {
        individual_calls: AtomicUsize,
    }
    #[async_trait::async_trait]
    impl ControllerClient for BulkUnsupportedClient {
        async fn post_posture_response(
            &self,
            _body: serde_json::Value,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            self.individual_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Default::default())
        }

        async fn post_posture_response_bulk(
            &self,
            _bodies: Vec<serde_json::Value>,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            Err(crate::error::ClientError::NotImplemented)
        }
    }

    fn os_mac_service() -> Service {
        Service {
            id: "svc".into(),
            name: "svc".into(),
            posture_query_sets: vec![PostureQuerySet {
                policy_id: "pol".into(),
                queries: vec![
                    PostureQuery {
                        id: "q-os".into(),
                        query_type: QueryType::Os,
                        timeout: crate::model::NO_TIMEOUT,
                    },
                    PostureQuery {
                        id: "q-mac".into(),
                        query_type: QueryType::Mac,
                        timeout: crate::model::NO_TIMEOUT,
                    },
                ],
            }],
        }
    }

    fn make_reconciler(
        client: Arc<dyn ControllerClient>,
        session: Arc<FakeSession>,
    ) -> Reconciler {
        Reconciler::new(
            PostureConfig::new(60).unwrap(),
            Arc::new(FakeCatalog(vec![os_mac_service()])),
            session,
            Arc::new(NoopRefresh),
            client,
            Arc::new(FakeOs),
            Arc::new(FakeMac),
            Arc::new(FakeDomain),
            Arc::new(FakeProcess),
        )
    }

    #[tokio::test]
    async fn steady_state_prefers_bulk_submission() {
        let client = Arc::new(AcceptingClient::new());
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let mut reconciler = make_reconciler(client.clone(), session);
        let (tx, _rx) = mpsc::channel(8);

        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.individual_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bulk_404_falls_back_to_individual_and_forces_resend() {
        let client = Arc::new(BulkUnsupportedClient {
            individual_calls: AtomicUsize::new(0),
        });
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let mut reconciler = make_reconciler(client.clone(), session);
        let (tx, _rx) = mpsc::channel(8);

        reconciler.tick(&tx).await;
        assert!(reconciler.state.bulk_disabled);
        assert!(reconciler.state.must_send);

        // next tick: bulk is now permanently disabled, individual path used
        reconciler.tick(&tx).await;
        assert!(client.individual_calls.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn no_timeout_query_clears_sticky_resend_after_first_observation() {
        let client = Arc::new(AcceptingClient::new());
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let mut reconciler = make_reconciler(client.clone(), session);
        let (tx, _rx) = mpsc::channel(8);

        // tick 1: forced by new-session regardless of must_send_every_time;
        // both queries declare NO_TIMEOUT, which flips the sticky flag off.
        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 1);
        assert!(!reconciler.state.must_send_every_time);

        // tick 2: same session, evidence unchanged, sticky flag now false
        // -> no request at all.
        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn finite_timeout_query_keeps_sticky_resend_every_tick() {
        let client = Arc::new(AcceptingClient::new());
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let catalog = Arc::new(FakeCatalog(vec![Service {
            id: "svc".into(),
            name: "svc".into(),
            posture_query_sets: vec![PostureQuerySet {
                policy_id: "pol".into(),
                queries: vec![PostureQuery {
                    id: "q-os".into(),
                    query_type: QueryType::Os,
                    timeout: 3600,
                }],
            }],
        }]));
        let mut reconciler = Reconciler::new(
            PostureConfig::new(60).unwrap(),
            catalog,
            session,
            Arc::new(NoopRefresh),
            client.clone(),
            Arc::new(FakeOs),
            Arc::new(FakeMac),
            Arc::new(FakeDomain),
            Arc::new(FakeProcess),
        );
        let (tx, _rx) = mpsc::channel(8);

        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 1);
        assert!(reconciler.state.must_send_every_time);

        // no evidence change, no error, no new session/controller — but the
        // finite-timeout query never cleared the sticky flag, so it resends.
        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 2);
    }

    /// Individual mode, first submission of a key fails, second tick has no
    /// evidence change at all — the key must still be resent.
    struct FlakyIndividualClient {
        calls: AtomicUsize,
    }
    #[async_trait::async_trait]
    impl ControllerClient for FlakyIndividualClient {
        async fn post_posture_response(
            &self,
            _body: serde_json::Value,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Err(crate::error::ClientError::Transport("boom".into()))
            } else {
                Ok(Default::default())
            }
        }

        async fn post_posture_response_bulk(
            &self,
            _bodies: Vec<serde_json::Value>,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            Err(crate::error::ClientError::NotImplemented)
        }
    }

    #[tokio::test]
    async fn retry_on_error_resends_unchanged_evidence() {
        let client = Arc::new(FlakyIndividualClient {
            calls: AtomicUsize::new(0),
        });
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let catalog = Arc::new(FakeCatalog(vec![Service {
            id: "svc".into(),
            name: "svc".into(),
            posture_query_sets: vec![PostureQuerySet {
                policy_id: "pol".into(),
                queries: vec![PostureQuery {
                    id: "q-os".into(),
                    query_type: QueryType::Os,
                    timeout: 3600,
                }],
            }],
        }]));
        let mut reconciler = Reconciler::new(
            PostureConfig::new(60).unwrap(),
            catalog,
            session,
            Arc::new(NoopRefresh),
            client.clone(),
            Arc::new(FakeOs),
            Arc::new(FakeMac),
            Arc::new(FakeDomain),
            Arc::new(FakeProcess),
        );
        let (tx, _rx) = mpsc::channel(8);

        // tick 1: bulk 404s, switches to individual mode permanently; no
        // individual call is attempted in this same tick.
        reconciler.tick(&tx).await;
        assert!(reconciler.state.bulk_disabled);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);

        // tick 2: individual submission of OS fails -> error_states[OS]=true.
        reconciler.tick(&tx).await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert!(reconciler.state.is_errored(&ResponseKey::Os));

        // tick 3: evidence is byte-identical and timeout is finite (sticky
        // stays true anyway here), but the point under test is that even a
        // pure error-driven redirty resubmits.
        reconciler.tick(&tx).await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        assert!(!reconciler.state.is_errored(&ResponseKey::Os));
    }

    #[tokio::test]
    async fn new_session_id_forces_full_resend() {
        let client = Arc::new(AcceptingClient::new());
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        let mut reconciler = make_reconciler(client.clone(), session.clone());
        let (tx, _rx) = mpsc::channel(8);

        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 1);

        *session.0.lock().unwrap() = "sess-2".to_string();
        reconciler.tick(&tx).await;
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 2);
    }

    /// Reports a controller instance id in every response, switchable mid-test.
    struct RestartingClient {
        instance_id: Mutex<String>,
        bulk_calls: AtomicUsize,
    }
    #[async_trait::async_trait]
    impl ControllerClient for RestartingClient {
        async fn post_posture_response(
            &self,
            _body: serde_json::Value,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            unreachable!("this test only drives the bulk path")
        }

        async fn post_posture_response_bulk(
            &self,
            _bodies: Vec<serde_json::Value>,
        ) -> Result<crate::client::SubmitOutcome, crate::error::ClientError> {
            self.bulk_calls.fetch_add(1, Ordering::SeqCst);
            Ok(crate::client::SubmitOutcome {
                service_timers: vec![],
                controller_instance_id: Some(self.instance_id.lock().unwrap().clone()),
            })
        }
    }

    #[tokio::test]
    async fn controller_restart_forces_full_resend_one_tick_after_being_observed() {
        let client = Arc::new(RestartingClient {
            instance_id: Mutex::new("ctrl-1".to_string()),
            bulk_calls: AtomicUsize::new(0),
        });
        let session = Arc::new(FakeSession(Mutex::new("sess-1".to_string())));
        // A finite-timeout query keeps the sticky resend flag on, so every
        // tick submits regardless of the force decision — isolating what we
        // actually want to observe here: when the cached controller id gets
        // committed.
        let catalog = Arc::new(FakeCatalog(vec![Service {
            id: "svc".into(),
            name: "svc".into(),
            posture_query_sets: vec![PostureQuerySet {
                policy_id: "pol".into(),
                queries: vec![PostureQuery {
                    id: "q-os".into(),
                    query_type: QueryType::Os,
                    timeout: 3600,
                }],
            }],
        }]));
        let mut reconciler = Reconciler::new(
            PostureConfig::new(60).unwrap(),
            catalog,
            session,
            Arc::new(NoopRefresh),
            client.clone(),
            Arc::new(FakeOs),
            Arc::new(FakeMac),
            Arc::new(FakeDomain),
            Arc::new(FakeProcess),
        );
        let (tx, _rx) = mpsc::channel(8);

        // tick 1: forced by the new session; the response's "ctrl-1" is
        // observed but has not yet been committed as the cached baseline.
        reconciler.tick(&tx).await;
        assert_eq!(reconciler.state.controller_instance_id, None);

        // tick 2: "ctrl-1" (observed last tick) differs from the still-empty
        // cached baseline -> forced, and the baseline is committed.
        reconciler.tick(&tx).await;
        assert_eq!(
            reconciler.state.controller_instance_id.as_deref(),
            Some("ctrl-1")
        );

        // tick 3: steady state, observed id matches the cached baseline.
        reconciler.tick(&tx).await;
        assert_eq!(
            reconciler.state.controller_instance_id.as_deref(),
            Some("ctrl-1")
        );

        // the controller restarts and starts reporting "ctrl-2".
        *client.instance_id.lock().unwrap() = "ctrl-2".to_string();

        // tick 4: this tick's force decision still sees last tick's observed
        // id ("ctrl-1"), so the baseline is not yet updated even though the
        // response just received during this tick reports "ctrl-2".
        reconciler.tick(&tx).await;
        assert_eq!(
            reconciler.state.controller_instance_id.as_deref(),
            Some("ctrl-1")
        );

        // tick 5: "ctrl-2" (observed last tick) differs from the cached
        // baseline -> forced, and the baseline is committed to "ctrl-2".
        reconciler.tick(&tx).await;
        assert_eq!(
            reconciler.state.controller_instance_id.as_deref(),
            Some("ctrl-2")
        );
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 5);
    }
}
