//! Posture-assessment subsystem of the identity SDK.
//!
//! This crate wires the state machine (`posture_core`), the built-in
//! evidence providers (`posture_providers`), and the HTTP controller client
//! (`posture_client`) into the collaborators a host SDK supplies
//! (`ServiceCatalog`, `SessionSource`, `ServiceRefresh`).

pub use posture_client::ReqwestControllerClient;
pub use posture_core::{
    report_endpoint_state_change, ClientError, ControllerClient, DomainProvider, MacProvider,
    OsFacts, OsProvider, PostureConfig, PostureError, PostureQuery, PostureQuerySet, ProcessFacts,
    ProcessProvider, QueryType, Reconciler, ResponseBody, ResponseCache, ResponseKey, Service,
    ServiceCatalog, ServiceRefresh, ServiceTimerUpdate, SessionSnapshot, SessionSource,
    SubmitOutcome, NO_TIMEOUT,
};
pub use posture_providers::{
    DefaultDomainProvider, DefaultMacProvider, DefaultOsProvider, DefaultProcessProvider,
};
