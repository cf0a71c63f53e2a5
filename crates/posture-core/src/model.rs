use serde::Serialize;
use std::fmt;

/// Sentinel used by the controller for "no timeout / always required" —
/// preserved verbatim from the wire protocol.
pub const NO_TIMEOUT: i64 = -1;

/// The stable identifier a collected response is cached under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseKey {
    Os,
    Mac,
    Domain,
    /// Absolute executable path — shared by every policy that references it.
    Process(String),
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Os => write!(f, "OS"),
            ResponseKey::Mac => write!(f, "MAC"),
            ResponseKey::Domain => write!(f, "DOMAIN"),
            ResponseKey::Process(path) => write!(f, "{path}"),
        }
    }
}

/// A posture-check query as the controller describes it, classified by
/// type.
#[derive(Debug, Clone)]
pub struct PostureQuery {
    pub id: String,
    pub query_type: QueryType,
    /// `NO_TIMEOUT` (-1) marks a query the controller declared non-expiring.
    pub timeout: i64,
}

#[derive(Debug, Clone)]
pub enum QueryType {
    Os,
    Mac,
    Domain,
    Process { path: String },
    ProcessMulti { paths: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct PostureQuerySet {
    pub policy_id: String,
    pub queries: Vec<PostureQuery>,
}

/// The subset of the service-policy data model this subsystem depends on.
/// The full service catalogue is an external collaborator.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub posture_query_sets: Vec<PostureQuerySet>,
}

/// External collaborator: lookups into the service catalogue maintained by
/// the service-refresh engine. Not implemented here — a host SDK supplies
/// this.
pub trait ServiceCatalog: Send + Sync {
    fn services(&self) -> Vec<Service>;
}

/// External collaborator: the current session id, plus whether the session
/// is fully authenticated. This is the only place the subsystem reads
/// session state; the controller instance id is tracked separately, learned
/// from submission responses rather than from the session.
pub trait SessionSource: Send + Sync {
    fn session(&self) -> Option<SessionSnapshot>;
}

#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub fully_authenticated: bool,
}

/// External collaborator: "invalidate service X", causing the service
/// catalogue to re-fetch that service and reset its posture-check grace
/// timer.
#[async_trait::async_trait]
pub trait ServiceRefresh: Send + Sync {
    async fn force_service_update(&self, service_id: &str);
}

/// The per-variant response payload, serialized to the controller's wire
/// schema. Field order and presence (e.g. `hash` omitted when the file
/// could not be hashed) follow that schema literally.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Os {
        id: String,
        os_type: String,
        version: String,
        build: String,
    },
    Mac {
        id: String,
        mac_addresses: Vec<String>,
    },
    Domain {
        id: String,
        domain: String,
    },
    Process {
        id: String,
        path: String,
        is_running: bool,
        hash: Option<String>,
        signers: Vec<String>,
    },
    EndpointState {
        woken: bool,
        unlocked: bool,
    },
}

impl ResponseBody {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ResponseBody::Os {
                id,
                os_type,
                version,
                build,
            } => serde_json::json!({
                "id": id,
                "typeId": "OS",
                "type": os_type,
                "version": version,
                "build": build,
            }),
            ResponseBody::Mac { id, mac_addresses } => serde_json::json!({
                "id": id,
                "typeId": "MAC",
                "macAddresses": mac_addresses,
            }),
            ResponseBody::Domain { id, domain } => serde_json::json!({
                "id": id,
                "typeId": "DOMAIN",
                "domain": domain,
            }),
            ResponseBody::Process {
                id,
                path,
                is_running,
                hash,
                signers,
            } => {
                let mut obj = serde_json::json!({
                    "id": id,
                    "typeId": "PROCESS",
                    "path": path,
                    "isRunning": is_running,
                    "signers": signers,
                });
                if let Some(hash) = hash {
                    obj["hash"] = serde_json::Value::String(hash.clone());
                }
                obj
            }
            ResponseBody::EndpointState { woken, unlocked } => serde_json::json!({
                "id": "0",
                "typeId": "ENDPOINT_STATE",
                "woken": woken,
                "unlocked": unlocked,
            }),
        }
    }
}

/// Diagnostic per-service timer update returned by the controller
/// alongside a submission result.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceTimerUpdate {
    pub id: String,
    pub name: Option<String>,
    pub timeout: Option<i64>,
    pub timeout_remaining: Option<i64>,
}
