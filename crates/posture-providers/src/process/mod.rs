mod hashing;

#[cfg(target_os = "linux")]
#[path = "linux.rs"]
mod platform;

#[cfg(target_os = "macos")]
#[path = "macos.rs"]
mod platform;

#[cfg(target_os = "windows")]
#[path = "windows.rs"]
mod platform;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod platform {
    pub fn is_running(path: &str) -> bool {
        tracing::warn!(path, "process inspection is not implemented on this platform");
        false
    }

    pub fn signers(_path: &str) -> Vec<String> {
        Vec::new()
    }
}

use posture_core::{ProcessFacts, ProcessProvider};

/// Inspects a single executable path: is a process running from it, and if
/// so, its content hash and Authenticode signers. This is the off-loop
/// worker a host SDK's posture subsystem dispatches via
/// `spawn_blocking`/`spawn` — it never touches `PostureState` directly.
#[derive(Debug, Default)]
pub struct DefaultProcessProvider;

impl DefaultProcessProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ProcessProvider for DefaultProcessProvider {
    async fn inspect(&self, path: &str) -> ProcessFacts {
        // is_running, the hash, and the signer list are independent facts
        // about the same path, collected unconditionally rather than gated
        // on each other.
        let running_path = path.to_string();
        let is_running = tokio::task::spawn_blocking(move || platform::is_running(&running_path))
            .await
            .unwrap_or(false);

        let sha512_hex = hashing::hash_file(path.to_string()).await;

        let signers_path = path.to_string();
        let signers = tokio::task::spawn_blocking(move || platform::signers(&signers_path))
            .await
            .unwrap_or_default();

        ProcessFacts {
            is_running,
            sha512_hex,
            signers,
        }
    }
}
