//! GitHub remote URLs
//!
//! - [`url`]: the codec between remote URL strings and [`RemoteIdentity`]
//!   - `parse()` - decode `git@github.com:OWNER/REPO(.git)` or `https://github.com/OWNER/REPO(.git)`
//!   - `unparse()` - encode an owner/repo pair in either transport
//!   - `remote_url()` - build a remote URL for an arbitrary host

pub mod url;

pub use url::{RemoteIdentity, Transport, parse, remote_url, unparse};
