//! Location of the GitHub CLI hosts file

use crate::constants::config::{
    APP_DATA_SUBDIR, GH_CONFIG_DIR_ENV, HOSTS_FILE, UNIX_CONFIG_SUBDIR,
};
use crate::error::{GhUtilsError, Result};
use std::path::{Path, PathBuf};

/// Candidate hosts-file paths, most specific first.
///
/// - `$GH_CONFIG_DIR/hosts.yml` when the variable is set
/// - `~/.config/gh/hosts.yml`
/// - `<app data>/GitHub CLI/hosts.yml` (`%AppData%` on Windows)
pub fn hosts_path_candidates(
    gh_config_dir: Option<&Path>,
    home_dir: Option<&Path>,
    app_data_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = gh_config_dir {
        candidates.push(dir.join(HOSTS_FILE));
    }
    if let Some(home) = home_dir {
        candidates.push(home.join(UNIX_CONFIG_SUBDIR).join(HOSTS_FILE));
    }
    if let Some(app_data) = app_data_dir {
        let path = app_data.join(APP_DATA_SUBDIR).join(HOSTS_FILE);
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

/// Pick the first existing candidate, or fail with [`GhUtilsError::NotFound`]
pub fn resolve_hosts_path(candidates: &[PathBuf]) -> Result<PathBuf> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            let tried = candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            GhUtilsError::NotFound(format!(
                "GitHub CLI hosts file not found (tried: {tried}). Run `gh auth login` first."
            ))
        })
}

/// The hosts file the GitHub CLI itself would use on this machine
pub fn default_hosts_path() -> Result<PathBuf> {
    let gh_config_dir = std::env::var_os(GH_CONFIG_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let candidates = hosts_path_candidates(
        gh_config_dir.as_deref(),
        dirs::home_dir().as_deref(),
        dirs::config_dir().as_deref(),
    );
    resolve_hosts_path(&candidates)
}
