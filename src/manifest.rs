//! Workspace manifest: where the hand-offs point and who signs them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Repository the artifacts are committed to when no manifest overrides it.
const DEFAULT_SITE_REPO: &str = "https://github.com/Howdrian/my-personal-blog";

/// Optional per-directory configuration, read from [`Manifest::FILE_NAME`].
///
/// The manifest is the only file this tool reads besides the media files
/// themselves; its absence is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    site_repo: Url,
    author: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Manifest {
    /// Manifest file name looked up in the working directory.
    pub const FILE_NAME: &'static str = "Quill.toml";

    /// Load the manifest from `dir`, falling back to defaults when the
    /// file does not exist. A file that exists but does not parse is an
    /// error, not a default.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = dir.as_ref().join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    #[must_use]
    pub const fn site_repo(&self) -> &Url {
        &self.site_repo
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    #[must_use]
    pub fn export(&self) -> String {
        // Serialization of the manifest never fails.
        toml::to_string_pretty(self).unwrap()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            site_repo: Url::parse(DEFAULT_SITE_REPO).expect("default repository URL is valid"),
            author: whoami::realname(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.site_repo().as_str(), DEFAULT_SITE_REPO);
    }

    #[test]
    fn round_trips_through_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = Manifest::default();
        manifest.set_author("A. Writer");
        fs::write(dir.path().join(Manifest::FILE_NAME), manifest.export()).unwrap();

        let loaded = Manifest::load(dir.path()).unwrap();
        assert_eq!(loaded.author(), "A. Writer");
        assert_eq!(loaded.site_repo(), manifest.site_repo());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(Manifest::FILE_NAME), "site_repo = 42").unwrap();
        let err = Manifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
