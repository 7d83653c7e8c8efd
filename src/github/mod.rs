//! GitHub operations delegated to the `gh` CLI

pub mod cli;

pub use cli::{Visibility, actions_permissions_path};
