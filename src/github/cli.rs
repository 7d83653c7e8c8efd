//! `gh repo` and `gh api` invocations

use crate::constants::github::{ACCEPT_HEADER, ACTIONS_PERMISSIONS_TEMPLATE};
use crate::remote::RemoteIdentity;
use crate::runner::Invocation;
use std::fmt;

const GH: &str = "gh";

/// Visibility of a newly created repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn from_public_flag(public: bool) -> Self {
        if public { Self::Public } else { Self::Private }
    }

    /// Flag understood by `gh repo create`
    pub fn flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

pub fn repo_create(name: &str, visibility: Visibility) -> Invocation {
    Invocation::mutating(GH, ["repo", "create", name, visibility.flag()])
}

/// `gh repo set-default` writes to the local git config, so it is mutating
pub fn repo_set_default(slug: &str) -> Invocation {
    Invocation::mutating(GH, ["repo", "set-default", slug])
}

/// `repos/OWNER/REPO/actions/permissions`
pub fn actions_permissions_path(identity: &RemoteIdentity) -> String {
    ACTIONS_PERMISSIONS_TEMPLATE
        .replace("{owner}", &identity.owner)
        .replace("{repo}", &identity.repo)
}

pub fn get_actions_permissions(identity: &RemoteIdentity) -> Invocation {
    Invocation::inspecting(
        GH,
        [
            "api".to_string(),
            "--method".to_string(),
            "GET".to_string(),
            "-H".to_string(),
            ACCEPT_HEADER.to_string(),
            actions_permissions_path(identity),
        ],
    )
}

pub fn set_actions_enabled(identity: &RemoteIdentity, enabled: bool) -> Invocation {
    Invocation::mutating(
        GH,
        [
            "api".to_string(),
            "--method".to_string(),
            "PUT".to_string(),
            actions_permissions_path(identity),
            "--field".to_string(),
            format!("enabled={enabled}"),
            "-H".to_string(),
            ACCEPT_HEADER.to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::Transport;

    fn identity() -> RemoteIdentity {
        RemoteIdentity::new("octo", "cat", Transport::Ssh)
    }

    #[test]
    fn test_repo_create_visibility() {
        assert_eq!(
            repo_create("cat", Visibility::Private).render(),
            "gh repo create cat --private"
        );
        assert_eq!(
            repo_create("octo/cat", Visibility::from_public_flag(true)).render(),
            "gh repo create octo/cat --public"
        );
    }

    #[test]
    fn test_actions_permissions_path() {
        assert_eq!(
            actions_permissions_path(&identity()),
            "repos/octo/cat/actions/permissions"
        );
    }

    #[test]
    fn test_actions_invocations() {
        let get = get_actions_permissions(&identity());
        assert!(!get.is_mutating());
        assert_eq!(
            get.render(),
            "gh api --method GET -H 'Accept: application/vnd.github+json' repos/octo/cat/actions/permissions"
        );

        let disable = set_actions_enabled(&identity(), false);
        assert!(disable.is_mutating());
        assert_eq!(
            disable.render(),
            "gh api --method PUT repos/octo/cat/actions/permissions --field enabled=false -H 'Accept: application/vnd.github+json'"
        );
        assert!(set_actions_enabled(&identity(), true)
            .args()
            .contains(&"enabled=true".to_string()));
    }
}
