use std::collections::HashSet;

use posture_core::MacProvider;
use tracing::warn;

/// Enumerates non-internal, physically-addressed network interfaces. A
/// zero physical address (e.g. a loopback or tunnel device) is never
/// reported, and each interface name contributes at most one address.
#[derive(Debug, Default)]
pub struct DefaultMacProvider;

impl DefaultMacProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MacProvider for DefaultMacProvider {
    async fn addresses(&self) -> Vec<String> {
        match mac_address::MacAddressIterator::new() {
            Ok(iter) => {
                let mut seen = HashSet::new();
                iter.filter_map(|mac| {
                    if mac.bytes().iter().all(|b| *b == 0) {
                        return None;
                    }
                    let formatted = mac.to_string().to_lowercase();
                    if seen.insert(formatted.clone()) {
                        Some(formatted)
                    } else {
                        None
                    }
                })
                .collect()
            }
            Err(err) => {
                warn!(error = %err, "failed to enumerate MAC addresses");
                Vec::new()
            }
        }
    }
}
