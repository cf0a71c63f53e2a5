use sha2::{Digest, Sha512};
use std::io::Read;
use tracing::warn;

const CHUNK_SIZE: usize = 64 * 1024;

/// Streaming SHA-512 of a file, read in 64 KiB chunks. Runs on a blocking
/// thread — file IO and digest computation for a multi-hundred-megabyte
/// binary would otherwise stall the runtime.
pub async fn hash_file(path: String) -> Option<String> {
    tokio::task::spawn_blocking(move || hash_file_blocking(&path))
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "hashing task panicked");
            None
        })
}

fn hash_file_blocking(path: &str) -> Option<String> {
    let mut file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(err) => {
            warn!(path, error = %err, "failed to open process executable for hashing");
            return None;
        }
    };

    let mut hasher = Sha512::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let read = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) => {
                warn!(path, error = %err, "failed reading process executable");
                return None;
            }
        };
        hasher.update(&buf[..read]);
    }

    Some(hex::encode(hasher.finalize()))
}
