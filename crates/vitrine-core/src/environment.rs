//! Runtime environment, resolved once at startup.
//!
//! Everything that depends on the process environment takes a
//! [`RuntimeEnv`] by reference instead of reading variables itself.

use serde::{Deserialize, Serialize};

/// Development flag variable.
pub const DEV_VAR: &str = "DEV";
/// Repository owner used by remote storage.
pub const GITHUB_OWNER_VAR: &str = "PUBLIC_GITHUB_OWNER";
/// Repository name used by remote storage.
pub const GITHUB_REPO_VAR: &str = "PUBLIC_GITHUB_REPO";

/// Build/runtime mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

/// Snapshot of the environment variables the site cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    /// Development flag.
    pub dev: bool,
    /// Repository owner for remote storage.
    pub github_owner: Option<String>,
    /// Repository name for remote storage.
    pub github_repo: Option<String>,
}

impl RuntimeEnv {
    /// Read the snapshot from the current process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = Self {
            dev: lookup(DEV_VAR).as_deref().is_some_and(parse_flag),
            github_owner: non_empty(GITHUB_OWNER_VAR),
            github_repo: non_empty(GITHUB_REPO_VAR),
        };
        tracing::debug!(
            dev = env.dev,
            owner = ?env.github_owner,
            repo = ?env.github_repo,
            "resolved runtime environment"
        );
        env
    }

    /// Development environment with no remote repository.
    pub fn development() -> Self {
        Self {
            dev: true,
            ..Default::default()
        }
    }

    /// Production environment pointing at a remote repository.
    pub fn production(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            dev: false,
            github_owner: Some(owner.into()),
            github_repo: Some(repo.into()),
        }
    }

    /// Mode implied by the development flag.
    pub fn mode(&self) -> Mode {
        if self.dev {
            Mode::Development
        } else {
            Mode::Production
        }
    }
}

/// Interpret a boolean-like environment value.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_flag() {
        for v in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(v), "{v} should be truthy");
        }
        for v in ["0", "false", "", "no", "dev"] {
            assert!(!parse_flag(v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_from_lookup_dev() {
        let env = RuntimeEnv::from_lookup(lookup_from(&[("DEV", "true")]));
        assert!(env.dev);
        assert_eq!(env.mode(), Mode::Development);
        assert!(env.github_owner.is_none());
    }

    #[test]
    fn test_from_lookup_production() {
        let env = RuntimeEnv::from_lookup(lookup_from(&[
            ("PUBLIC_GITHUB_OWNER", "glass-no"),
            ("PUBLIC_GITHUB_REPO", "site"),
        ]));
        assert_eq!(env, RuntimeEnv::production("glass-no", "site"));
        assert_eq!(env.mode(), Mode::Production);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let env = RuntimeEnv::from_lookup(lookup_from(&[
            ("PUBLIC_GITHUB_OWNER", "  "),
            ("PUBLIC_GITHUB_REPO", ""),
        ]));
        assert!(env.github_owner.is_none());
        assert!(env.github_repo.is_none());
    }
}
