//! Central constants for the gh-utils programs

/// Default values for git remotes
pub mod git {
    /// Remote used when `--remote` is not given
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Name a displaced remote is renamed to
    pub const UPSTREAM_REMOTE: &str = "upstream";

    /// Suffix carried by canonical remote URLs
    pub const GIT_SUFFIX: &str = ".git";
}

/// Default values for GitHub operations
pub mod github {
    /// Host recognized by the remote URL codec
    pub const HOST: &str = "github.com";

    /// Accept header passed to `gh api`
    pub const ACCEPT_HEADER: &str = "Accept: application/vnd.github+json";

    /// Actions permissions endpoint, relative to the API root
    pub const ACTIONS_PERMISSIONS_TEMPLATE: &str = "repos/{owner}/{repo}/actions/permissions";
}

/// Locations of the GitHub CLI configuration
pub mod config {
    /// Environment variable the GitHub CLI honours for its config directory
    pub const GH_CONFIG_DIR_ENV: &str = "GH_CONFIG_DIR";

    /// Hosts file name inside the config directory
    pub const HOSTS_FILE: &str = "hosts.yml";

    /// Config directory relative to the home directory on unix-like systems
    pub const UNIX_CONFIG_SUBDIR: &str = ".config/gh";

    /// Config directory inside the platform application-data directory
    pub const APP_DATA_SUBDIR: &str = "GitHub CLI";
}

/// Program names, used as log labels
pub mod programs {
    pub const CREATE_REMOTE: &str = "ghcrar";
    pub const REPO_ACTIONS: &str = "gh-repo-actions";
    pub const SWITCH_REMOTE: &str = "gh-switch-remote";
}
