use posture_core::DomainProvider;

/// Reports Active Directory domain membership. Domain join is a
/// Windows-only concept; other platforms always report an empty domain.
#[derive(Debug, Default)]
pub struct DefaultDomainProvider;

impl DefaultDomainProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl DomainProvider for DefaultDomainProvider {
    async fn domain(&self) -> String {
        #[cfg(target_os = "windows")]
        {
            windows_impl::domain()
        }
        #[cfg(not(target_os = "windows"))]
        {
            String::new()
        }
    }
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use tracing::warn;
    use windows::core::PWSTR;
    use windows::Win32::Foundation::{ERROR_SUCCESS, NO_ERROR};
    use windows::Win32::NetworkManagement::NetManagement::{
        NetApiBufferFree, NetGetJoinInformation, NetSetupDomainName,
    };

    pub fn domain() -> String {
        unsafe {
            let mut name = PWSTR::null();
            let mut status = NetSetupDomainName;
            let result = NetGetJoinInformation(None, &mut name, &mut status);
            if result != NO_ERROR.0 && result != ERROR_SUCCESS.0 {
                warn!(code = result, "NetGetJoinInformation failed");
                return String::new();
            }
            if status != NetSetupDomainName || name.is_null() {
                if !name.is_null() {
                    let _ = NetApiBufferFree(Some(name.0 as *const _));
                }
                return String::new();
            }
            let domain = name.to_string().unwrap_or_default();
            let _ = NetApiBufferFree(Some(name.0 as *const _));
            domain
        }
    }
}
