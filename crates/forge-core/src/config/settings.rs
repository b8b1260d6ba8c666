//! Settings file loading and artifact version lookup

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "F8_FORGE_SETTINGS";

const DEFAULT_ORGANIZATION: &str = "fabric8";
const DEFAULT_FABRIC8_VERSION: &str = "2.2.101";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Docker organization offered as the default image prefix
    pub docker_organization: String,

    /// Version used for io.fabric8 plugins and the fabric8 BOM
    pub fabric8_version: String,

    /// Artifact version overrides keyed by `groupId:artifactId`
    pub versions: IndexMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docker_organization: DEFAULT_ORGANIZATION.to_string(),
            fabric8_version: DEFAULT_FABRIC8_VERSION.to_string(),
            versions: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, else from `$F8_FORGE_SETTINGS`, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                Self::from_yaml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" settings file
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Version for an artifact, honouring overrides
    pub fn version_of(&self, group_id: &str, artifact_id: &str, default: &str) -> String {
        self.versions
            .get(&format!("{}:{}", group_id, artifact_id))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
