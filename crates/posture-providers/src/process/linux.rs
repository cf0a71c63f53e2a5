use std::fs;

/// Whether any running process's `/proc/<pid>/exe` symlink resolves to
/// exactly `path`. No case-folding: paths on Linux are byte-exact.
pub fn is_running(path: &str) -> bool {
    let Ok(entries) = fs::read_dir("/proc") else {
        return false;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(pid) = file_name.to_str() else {
            continue;
        };
        if !pid.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let exe_link = format!("/proc/{pid}/exe");
        if let Ok(target) = fs::read_link(&exe_link) {
            if target.to_str() == Some(path) {
                return true;
            }
        }
    }

    false
}

/// Signer enumeration is a Windows Authenticode concept; Linux binaries
/// carry no equivalent in this subsystem.
pub fn signers(_path: &str) -> Vec<String> {
    Vec::new()
}
