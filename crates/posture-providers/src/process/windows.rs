use tracing::warn;
use windows::core::{PCWSTR, PSTR};
use windows::Win32::Foundation::{CloseHandle, HANDLE, MAX_PATH};
use windows::Win32::Security::Cryptography::{
    CertCloseStore, CertEnumCertificatesInStore, CertGetCertificateContextProperty,
    CertQueryObject, CERT_QUERY_CONTENT_FLAG_ALL, CERT_QUERY_FORMAT_FLAG_BINARY,
    CERT_QUERY_OBJECT_FILE, CERT_SHA1_HASH_PROP_ID, CRYPT_QUERY_OBJECT_TYPE,
};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameA, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};

/// Whether any running process's full image path matches `path`, found by
/// walking a `Toolhelp32Snapshot` and resolving each entry's image path via
/// `QueryFullProcessImageNameA`. The comparison is a case-insensitive
/// prefix match bounded to the *returned* image path's length (like
/// `strnicmp(path, fullPath, fullPathSize)`) rather than a plain equality
/// check: only the first `fullPath.len()` bytes of the queried `path` are
/// examined, so trailing bytes in `path` beyond that length are never
/// compared.
pub fn is_running(path: &str) -> bool {
    let snapshot = match unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) } {
        Ok(h) => h,
        Err(err) => {
            warn!(error = %err, "CreateToolhelp32Snapshot failed");
            return false;
        }
    };

    let mut entry = PROCESSENTRY32W {
        dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    let needle_lower = path.to_lowercase();
    let needle_bytes = needle_lower.as_bytes();
    let mut found = false;

    unsafe {
        if Process32FirstW(snapshot, &mut entry).is_ok() {
            loop {
                if let Some(image_path) = full_image_path(entry.th32ProcessID) {
                    let full_lower = image_path.to_lowercase();
                    let full_bytes = full_lower.as_bytes();
                    if needle_bytes.len() >= full_bytes.len()
                        && needle_bytes[..full_bytes.len()] == *full_bytes
                    {
                        found = true;
                        break;
                    }
                }
                if Process32NextW(snapshot, &mut entry).is_err() {
                    break;
                }
            }
        }
        let _ = CloseHandle(snapshot);
    }

    found
}

unsafe fn full_image_path(pid: u32) -> Option<String> {
    let handle: HANDLE = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
    let mut buf = [0u8; MAX_PATH as usize];
    let mut size = buf.len() as u32;
    let ok = QueryFullProcessImageNameA(
        handle,
        PROCESS_NAME_WIN32,
        PSTR(buf.as_mut_ptr()),
        &mut size,
    )
    .is_ok();
    let _ = CloseHandle(handle);
    if !ok {
        return None;
    }
    Some(String::from_utf8_lossy(&buf[..size as usize]).into_owned())
}

/// Authenticode signer enumeration via `CryptQueryObject` +
/// `CertEnumCertificatesInStore`.
///
/// Always advances to the next certificate with
/// `CertEnumCertificatesInStore` exactly once per iteration regardless of
/// whether that iteration produced a thumbprint — gating the advance on
/// thumbprint formatting succeeding would stall the walk forever on a
/// certificate whose display name can't be formatted.
pub fn signers(path: &str) -> Vec<String> {
    let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();

    let mut cert_store = Default::default();
    let mut msg = Default::default();

    unsafe {
        let queried = CertQueryObject(
            CERT_QUERY_OBJECT_FILE,
            PCWSTR(wide.as_ptr()).0 as *const _,
            CERT_QUERY_CONTENT_FLAG_ALL,
            CERT_QUERY_FORMAT_FLAG_BINARY,
            0,
            None,
            None,
            None,
            Some(&mut cert_store),
            Some(&mut msg),
            None,
        );

        if queried.is_err() || cert_store.is_invalid() {
            return Vec::new();
        }

        let mut thumbprints = Vec::new();
        let mut cert = CertEnumCertificatesInStore(cert_store, None);

        while let Some(ctx) = cert {
            // SHA-1 thumbprint is a fixed 20-byte hash; ask for its size
            // first since CertGetCertificateContextProperty insists on it.
            let mut len: u32 = 0;
            let sized = CertGetCertificateContextProperty(
                ctx,
                CERT_SHA1_HASH_PROP_ID,
                None,
                &mut len,
            );

            if sized.is_ok() && len > 0 {
                let mut buf = vec![0u8; len as usize];
                let filled = CertGetCertificateContextProperty(
                    ctx,
                    CERT_SHA1_HASH_PROP_ID,
                    Some(buf.as_mut_ptr() as *mut _),
                    &mut len,
                );
                if filled.is_ok() {
                    thumbprints.push(hex::encode(&buf[..len as usize]));
                }
            }

            cert = CertEnumCertificatesInStore(cert_store, Some(ctx));
        }

        let _ = CertCloseStore(cert_store, 0);
        thumbprints
    }
}
