//! Host credentials read from the GitHub CLI hosts file
//!
//! The hosts file maps each hostname to an object holding at least the
//! authenticated `user`:
//!
//! ```yaml
//! github.com:
//!     user: octocat
//!     git_protocol: ssh
//! ghe.example.com:
//!     user: octo-enterprise
//! ```

use crate::error::{GhUtilsError, Result};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One authenticated GitHub host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCredential {
    pub hostname: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct HostEntry {
    user: Option<String>,
}

/// Parse the contents of a hosts file, keeping entries in file order
pub fn parse_hosts(path: &Path, content: &str) -> Result<Vec<HostCredential>> {
    let invalid = |reason: String| GhUtilsError::InvalidHostsFile {
        path: path.to_path_buf(),
        reason,
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mapping = match serde_yaml::from_str::<serde_yaml::Value>(content)? {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => return Err(invalid("top level is not a mapping of hostnames".to_string())),
    };

    let mut credentials = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let hostname = key
            .as_str()
            .ok_or_else(|| invalid(format!("hostname {key:?} is not a string")))?
            .to_string();
        let entry: HostEntry = serde_yaml::from_value(value)
            .map_err(|e| invalid(format!("entry for {hostname}: {e}")))?;
        let username = entry
            .user
            .ok_or_else(|| invalid(format!("entry for {hostname} has no user")))?;
        credentials.push(HostCredential { hostname, username });
    }

    Ok(credentials)
}

/// Memoized reader for hosts files.
///
/// Construct one per program run and pass it to the lookups; the same path
/// is read and parsed at most once for the store's lifetime.
#[derive(Debug, Default)]
pub struct CredentialStore {
    cache: RefCell<HashMap<PathBuf, Rc<[HostCredential]>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All credentials in `path`, in file order
    pub fn list(&self, path: &Path) -> Result<Rc<[HostCredential]>> {
        if let Some(cached) = self.cache.borrow().get(path) {
            return Ok(Rc::clone(cached));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GhUtilsError::NotFound(format!("Hosts file {} does not exist", path.display()))
            } else {
                GhUtilsError::Io(e)
            }
        })?;
        let credentials: Rc<[HostCredential]> = parse_hosts(path, &content)?.into();

        self.cache
            .borrow_mut()
            .insert(path.to_path_buf(), Rc::clone(&credentials));
        Ok(credentials)
    }

    /// First configured host
    pub fn first(&self, path: &Path) -> Result<HostCredential> {
        self.list(path)?.first().cloned().ok_or_else(|| {
            GhUtilsError::NotFound(format!("No user info found in {}", path.display()))
        })
    }

    /// Username authenticated for `hostname`
    pub fn username_for_host(&self, hostname: &str, path: &Path) -> Result<String> {
        self.list(path)?
            .iter()
            .find(|credential| credential.hostname == hostname)
            .map(|credential| credential.username.clone())
            .ok_or_else(|| {
                GhUtilsError::NotFound(format!(
                    "No user info found for hostname {hostname} in {}",
                    path.display()
                ))
            })
    }

    /// Number of distinct files parsed so far
    pub fn cached_files(&self) -> usize {
        self.cache.borrow().len()
    }
}
