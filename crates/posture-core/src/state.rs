use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::model::ResponseKey;

/// Handle to an in-flight `ProcessJob`. Dropping the handle does not
/// cancel the job — teardown must explicitly flip `canceled`.
pub struct ProcessJobHandle {
    pub query_id: String,
    pub canceled: Arc<AtomicBool>,
}

impl ProcessJobHandle {
    pub fn new(query_id: String) -> Self {
        Self {
            query_id,
            canceled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }
}

/// Process-wide posture-assessment record. Owned by the task running the
/// Reconciler loop; all mutation happens on that task.
pub struct PostureState {
    pub cache: ResponseCache,
    pub error_states: HashMap<ResponseKey, bool>,
    pub active_work: HashMap<ResponseKey, ProcessJobHandle>,
    pub previous_session_id: Option<String>,
    pub controller_instance_id: Option<String>,
    /// Most recent controller instance id learned from a submission
    /// response, not yet committed to `controller_instance_id`. Compared
    /// against the committed value to detect a controller restart.
    pub observed_controller_instance_id: Option<String>,
    pub must_send_every_time: bool,
    pub must_send: bool,
    pub bulk_disabled: bool,
}

impl Default for PostureState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostureState {
    pub fn new() -> Self {
        Self {
            cache: ResponseCache::new(),
            error_states: HashMap::new(),
            active_work: HashMap::new(),
            previous_session_id: None,
            controller_instance_id: None,
            observed_controller_instance_id: None,
            must_send_every_time: true,
            must_send: false,
            bulk_disabled: false,
        }
    }

    pub fn is_errored(&self, key: &ResponseKey) -> bool {
        self.error_states.get(key).copied().unwrap_or(false)
    }

    pub fn set_errored(&mut self, key: ResponseKey, errored: bool) {
        self.error_states.insert(key, errored);
    }

    /// Stop and close the timer (handled by the caller owning the
    /// `JoinHandle`/`watch::Sender`), clear the response and error maps,
    /// cancel every outstanding job, and free the cached session/controller
    /// ids.
    pub fn teardown(&mut self) {
        for handle in self.active_work.values() {
            handle.cancel();
        }
        self.active_work.clear();
        self.cache.clear();
        self.error_states.clear();
        self.previous_session_id = None;
        self.controller_instance_id = None;
        self.observed_controller_instance_id = None;
    }
}
