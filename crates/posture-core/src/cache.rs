use std::collections::HashMap;

use tracing::debug;

use crate::model::{ResponseBody, ResponseKey};

/// A single cached posture response.
#[derive(Debug, Clone)]
pub struct ResponseEntry {
    pub body: ResponseBody,
    pub should_send: bool,
    pub pending: bool,
    pub obsolete: bool,
}

/// Mapping from response key to the last serialized response, with
/// change-detection and dirty/pending/obsolete bookkeeping.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<ResponseKey, ResponseEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &ResponseKey) -> Option<&ResponseEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResponseKey> {
        self.entries.keys()
    }

    /// Start-of-tick obsolescence sweep: mark every entry that is neither
    /// pending nor dirty as obsolete.
    pub fn mark_all_obsolete_unless_active(&mut self) {
        for entry in self.entries.values_mut() {
            if !entry.pending && !entry.should_send {
                entry.obsolete = true;
            }
        }
    }

    /// Obtain (creating if absent) the entry for a key that is still
    /// relevant this tick, clearing its obsolete flag. Returns whether the
    /// caller must dispatch a provider for it (`!pending`).
    pub fn touch_relevant(&mut self, key: ResponseKey) -> bool {
        let entry = self.entries.entry(key).or_insert_with(|| ResponseEntry {
            body: ResponseBody::EndpointState {
                woken: false,
                unlocked: false,
            },
            should_send: false,
            pending: false,
            obsolete: false,
        });
        entry.obsolete = false;
        if entry.pending {
            false
        } else {
            entry.pending = true;
            true
        }
    }

    /// Evict every entry still marked obsolete after the sweep.
    pub fn evict_obsolete(&mut self) {
        self.entries.retain(|key, entry| {
            if entry.obsolete {
                debug!(%key, should_send = entry.should_send, pending = entry.pending, "removing obsolete posture response");
                false
            } else {
                true
            }
        });
    }

    /// A provider's completion callback: change-detect and mark dirty.
    /// `must_send_every_time` is the sticky policy flag; `must_send_now` is
    /// the current tick-level force-send flag (set by a new session, new
    /// controller instance, or a prior bulk-submission failure) — without
    /// it, a forced full resend would only reach responses that happen to
    /// change, instead of every response regardless of change state.
    pub fn collect(
        &mut self,
        key: &ResponseKey,
        body: ResponseBody,
        errored: bool,
        must_send_every_time: bool,
        must_send_now: bool,
    ) {
        let Some(entry) = self.entries.get_mut(key) else {
            debug!(%key, "posture check obsolete, dropping late evidence");
            return;
        };

        entry.pending = false;

        let changed = entry.body != body;
        if changed {
            entry.body = body;
        }

        entry.should_send = must_send_every_time || errored || changed || must_send_now;
    }

    /// Dirty entries ready for submission, paired with their key.
    pub fn dirty(&self) -> Vec<(ResponseKey, ResponseBody)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.should_send)
            .map(|(key, entry)| (key.clone(), entry.body.clone()))
            .collect()
    }

    pub fn clear_should_send(&mut self, key: &ResponseKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.should_send = false;
        }
    }

    /// Teardown: drop every cached body.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
