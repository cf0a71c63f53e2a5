use posture_core::{OsFacts, OsProvider};

/// Identifies the host operating system.
#[derive(Debug, Default)]
pub struct DefaultOsProvider;

impl DefaultOsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl OsProvider for DefaultOsProvider {
    async fn identify(&self) -> OsFacts {
        #[cfg(target_os = "windows")]
        {
            windows_impl::identify()
        }
        #[cfg(not(target_os = "windows"))]
        {
            posix_impl::identify()
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod posix_impl {
    use super::OsFacts;
    use std::ffi::CStr;
    use std::mem::MaybeUninit;

    /// `uname(2)`-derived facts: `sysname`, `release`, `version` map onto
    /// `(type, version, build)` respectively.
    pub fn identify() -> OsFacts {
        let mut uts = MaybeUninit::<libc::utsname>::zeroed();
        unsafe {
            if libc::uname(uts.as_mut_ptr()) == 0 {
                let uts = uts.assume_init();
                let sysname = CStr::from_ptr(uts.sysname.as_ptr())
                    .to_string_lossy()
                    .into_owned();
                let release = CStr::from_ptr(uts.release.as_ptr())
                    .to_string_lossy()
                    .into_owned();
                let version = CStr::from_ptr(uts.version.as_ptr())
                    .to_string_lossy()
                    .into_owned();
                OsFacts {
                    os_type: sysname,
                    version: release,
                    build: version,
                }
            } else {
                OsFacts {
                    os_type: std::env::consts::OS.to_string(),
                    version: "unknown".to_string(),
                    build: "unknown".to_string(),
                }
            }
        }
    }
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use super::OsFacts;
    use windows::Wdk::System::SystemServices::RtlGetVersion;
    use windows::Win32::System::SystemInformation::{OSVERSIONINFOEXW, OSVERSIONINFOW};

    /// `RtlGetVersion` is used instead of the `GetVersionEx` family, which
    /// is shim-lied-to by the application compatibility layer above
    /// Windows 8.1. Passing the extended `OSVERSIONINFOEXW` struct through
    /// the same call (the two share a common prefix) exposes
    /// `wProductType`, which classifies client vs. server editions.
    ///
    /// The `build` field is reported as the literal string `"ununsed"` —
    /// a long-standing typo in the wire value, preserved here deliberately
    /// for controller-side compatibility.
    pub fn identify() -> OsFacts {
        let mut info = OSVERSIONINFOEXW {
            dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOEXW>() as u32,
            ..Default::default()
        };

        let (version, os_type) = unsafe {
            if RtlGetVersion(&mut info as *mut _ as *mut OSVERSIONINFOW).is_ok() {
                let version = format!(
                    "{}.{}.{}",
                    info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber
                );
                // wProductType == 1 -> "windows", 2|3 -> "windowsserver",
                // anything else is an unrecognized value.
                let os_type = match info.wProductType {
                    1 => "windows".to_string(),
                    2 | 3 => "windowsserver".to_string(),
                    _ => "<unknown windows type>".to_string(),
                };
                (version, os_type)
            } else {
                ("unknown".to_string(), "<unknown windows type>".to_string())
            }
        };

        OsFacts {
            os_type,
            version,
            build: "ununsed".to_string(),
        }
    }
}
