use std::collections::HashMap;

use crate::model::PostureQuery;

/// Evidence providers. All are injectable: a host SDK may install a hook
/// for any of these; the posture-providers crate supplies the built-in,
/// platform-specific default for each.
#[async_trait::async_trait]
pub trait OsProvider: Send + Sync {
    async fn identify(&self) -> OsFacts;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsFacts {
    pub os_type: String,
    pub version: String,
    pub build: String,
}

#[async_trait::async_trait]
pub trait MacProvider: Send + Sync {
    async fn addresses(&self) -> Vec<String>;
}

#[async_trait::async_trait]
pub trait DomainProvider: Send + Sync {
    async fn domain(&self) -> String;
}

/// Off-loop process inspection worker result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFacts {
    pub is_running: bool,
    pub sha512_hex: Option<String>,
    pub signers: Vec<String>,
}

#[async_trait::async_trait]
pub trait ProcessProvider: Send + Sync {
    async fn inspect(&self, path: &str) -> ProcessFacts;
}

/// Per-tick plan built by walking the service catalogue.
#[derive(Debug, Default)]
pub struct QueryPlan {
    pub os: Option<PostureQuery>,
    pub mac: Option<PostureQuery>,
    pub domain: Option<PostureQuery>,
    /// Keyed by absolute executable path; first query to claim a path wins.
    pub processes: HashMap<String, PostureQuery>,
}

impl QueryPlan {
    pub fn new() -> Self {
        Self::default()
    }
}
