//! GitHub CLI configuration: host credentials and where to find them

pub mod hosts;
pub mod paths;

pub use hosts::{CredentialStore, HostCredential, parse_hosts};
pub use paths::{default_hosts_path, hosts_path_candidates, resolve_hosts_path};
