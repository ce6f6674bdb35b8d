//! Storage backend selection for the editor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    environment::{GITHUB_OWNER_VAR, GITHUB_REPO_VAR, RuntimeEnv},
    error::{CoreError, Result},
};

/// Where the editor reads and writes content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local filesystem, used in development.
    Local,
    /// Remote repository, used in production.
    #[serde(rename = "github")]
    GitHub { repo: RepoRef },
}

/// Owner/name pair identifying a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl StorageBackend {
    /// Select the backend for the given environment.
    ///
    /// Development always selects local storage. Production requires both
    /// repository variables; there is no fallback to local storage.
    pub fn select(env: &RuntimeEnv) -> Result<Self> {
        if env.dev {
            return Ok(Self::Local);
        }

        let owner = env.github_owner.clone().ok_or_else(|| {
            CoreError::config(format!(
                "{GITHUB_OWNER_VAR} is required for remote storage"
            ))
        })?;
        let name = env.github_repo.clone().ok_or_else(|| {
            CoreError::config(format!("{GITHUB_REPO_VAR} is required for remote storage"))
        })?;

        Ok(Self::GitHub {
            repo: RepoRef { owner, name },
        })
    }

    /// Whether this backend writes to the local filesystem.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::GitHub { repo } => write!(f, "github:{}/{}", repo.owner, repo.name),
        }
    }
}
