//! Built-in, platform-specific evidence providers for the posture
//! subsystem: OS identity, MAC addresses, domain membership, and process
//! inspection. A host SDK is free to substitute its own implementation of
//! any `posture_core` provider trait; these are the defaults wired up by
//! `posture-demo`.

mod domain;
mod mac;
mod os;
mod process;

pub use domain::DefaultDomainProvider;
pub use mac::DefaultMacProvider;
pub use os::DefaultOsProvider;
pub use process::DefaultProcessProvider;
