//! TOML descriptor loading and path resolution.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{DocsError, DocsResult};

/// Default descriptor file name at the workspace root.
pub const DEFAULT_CONFIG_FILE: &str = "docs_site.toml";

/// Environment override for the descriptor path.
pub const CONFIG_PATH_ENV: &str = "DOCS_SITE_CONFIG";

/// Generic TOML-backed config loader.
///
/// Handles filesystem access and deserialization only. Semantic checks stay
/// with the consuming type.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for an explicit path.
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            _marker: PhantomData,
        }
    }

    /// Read and deserialize the file.
    ///
    /// Read failures are [`Io`](crate::DocsErrorCategory::Io) errors; TOML
    /// failures are [`Config`](crate::DocsErrorCategory::Config) errors.
    pub fn load(&self) -> DocsResult<T> {
        tracing::debug!(path = %self.path.display(), "loading descriptor");
        let body = fs::read_to_string(&self.path).map_err(|err| {
            DocsError::io(format!("failed to read {}: {err}", self.path.display()))
                .with_operation("load site config")
                .with_path(&self.path)
        })?;
        toml::from_str(&body).map_err(|err| {
            DocsError::config(format!("failed to parse {}: {err}", self.path.display()))
                .with_operation("parse site config")
                .with_path(&self.path)
        })
    }
}

/// Resolve the descriptor path from `DOCS_SITE_CONFIG` or the root default.
pub fn resolve_config_path(root: &Path) -> DocsResult<PathBuf> {
    resolve_config_path_with(root, std::env::var(CONFIG_PATH_ENV).ok())
}

/// Resolve the descriptor path from an explicit override value.
///
/// Relative overrides are joined onto `root`.
pub fn resolve_config_path_with(root: &Path, override_value: Option<String>) -> DocsResult<PathBuf> {
    let Some(raw) = override_value else {
        return Ok(root.join(DEFAULT_CONFIG_FILE));
    };

    if raw.trim().is_empty() {
        return Err(DocsError::usage(format!(
            "{CONFIG_PATH_ENV} is set but empty; expected a filesystem path"
        )));
    }

    let candidate = PathBuf::from(raw);
    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(root.join(candidate))
    }
}
