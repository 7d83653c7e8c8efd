//! Git operations using the system `git` binary
//!
//! - [`remote`]: planned invocations for `git init` and `git remote ...`,
//!   plus helpers that run the read-only ones and interpret their output
//!   - `list_remotes()` - names printed by `git remote`
//!   - `get_remote_url()` - URL of one remote
//!   - `remote_identity()` - owner/repo/transport decoded from a remote's URL

pub mod remote;

pub use remote::{get_remote_url, list_remotes, remote_identity, same_remote_url};
