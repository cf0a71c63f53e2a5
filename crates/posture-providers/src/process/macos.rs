use libproc::libproc::proc_pid;
use tracing::warn;

/// Whether any running process's image path matches `path`, compared
/// case-insensitively to tolerate HFS+'s case-insensitive filesystem. This
/// is a full equality check, not a prefix match like the Windows variant —
/// `proc_pidpath` returns a complete path, so there is no shorter buffer to
/// bound the comparison against.
pub fn is_running(path: &str) -> bool {
    let Ok(pids) = proc_pid::listpids(proc_pid::ProcType::ProcAllPIDS) else {
        warn!("failed to list processes");
        return false;
    };

    let needle = path.to_lowercase();

    for pid in pids {
        let Ok(image_path) = proc_pid::pidpath(pid as i32) else {
            continue;
        };
        if image_path.to_lowercase() == needle {
            return true;
        }
    }

    false
}

/// Code signing verification is not implemented for macOS in this
/// subsystem: signer enumeration is Windows-only.
pub fn signers(_path: &str) -> Vec<String> {
    Vec::new()
}
