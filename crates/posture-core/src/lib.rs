//! Posture-assessment state machine: the response cache, scheduler, and
//! submitter that make up the zero-trust identity SDK's posture subsystem.
//! Platform evidence gathering and HTTP transport are deliberately kept out
//! of this crate — see `posture-providers` and `posture-client`.

mod cache;
mod client;
mod config;
mod endpoint_state;
mod error;
mod model;
mod providers;
mod scheduler;
mod state;
mod submitter;

pub use cache::{ResponseCache, ResponseEntry};
pub use client::{ControllerClient, SubmitOutcome};
pub use config::PostureConfig;
pub use endpoint_state::report_endpoint_state_change;
pub use error::{ClientError, PostureError};
pub use model::{
    PostureQuery, PostureQuerySet, QueryType, ResponseBody, ResponseKey, Service, ServiceCatalog,
    ServiceRefresh, ServiceTimerUpdate, SessionSnapshot, SessionSource, NO_TIMEOUT,
};
pub use providers::{DomainProvider, MacProvider, OsFacts, OsProvider, ProcessFacts, ProcessProvider, QueryPlan};
pub use scheduler::Reconciler;
pub use state::{PostureState, ProcessJobHandle};
pub use submitter::Submitter;
