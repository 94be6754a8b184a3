//! Scan configuration
//!
//! Defaults describe the Project Zomboid layout: a `mod.info` marker with
//! scripts under `media/lua`, collecting `.lua` and `.script` files.
//! A `luascout.toml` may override any of these.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "luascout.toml";

// Default value functions for serde
fn default_descriptor_name() -> String {
    "mod.info".to_string()
}
fn default_scripts_subdir() -> Vec<String> {
    vec!["media".to_string(), "lua".to_string()]
}
fn default_script_extensions() -> Vec<String> {
    vec!["lua".to_string(), "script".to_string()]
}
fn default_true() -> bool {
    true
}

/// What discovery does when the scan root is missing or unreadable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRootPolicy {
    /// Surface the problem as an [`Error`]
    #[default]
    Error,
    /// Treat the root as containing no mods
    Empty,
}

/// Settings shared by mod discovery and the direct script finder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File name marking a mod unit (matched case-sensitively)
    #[serde(default = "default_descriptor_name")]
    pub descriptor_name: String,
    /// Path segments from a mod unit to its scripts directory
    #[serde(default = "default_scripts_subdir")]
    pub scripts_subdir: Vec<String>,
    /// Script extensions without the leading dot
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
    #[serde(default)]
    pub missing_root: MissingRootPolicy,
    /// Follow symbolic links while walking
    #[serde(default = "default_true")]
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            descriptor_name: default_descriptor_name(),
            scripts_subdir: default_scripts_subdir(),
            script_extensions: default_script_extensions(),
            missing_root: MissingRootPolicy::default(),
            follow_links: true,
        }
    }
}

impl ScanConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded scan config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load `luascout.toml` from `dir` if present, otherwise the defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject configs that could never match anything
    pub fn validate(&self) -> Result<()> {
        if self.descriptor_name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "descriptor_name must not be empty".to_string(),
            ));
        }
        if self.script_extensions.is_empty() {
            return Err(Error::InvalidConfig(
                "script_extensions must list at least one extension".to_string(),
            ));
        }
        if let Some(ext) = self
            .script_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(Error::InvalidConfig(format!(
                "script extension '{ext}' must be non-empty and given without a dot"
            )));
        }
        Ok(())
    }

    /// Builder-style override of the missing root policy
    #[must_use]
    pub fn with_missing_root(mut self, policy: MissingRootPolicy) -> Self {
        self.missing_root = policy;
        self
    }

    /// Scripts directory for a mod unit directory
    pub fn scripts_dir(&self, unit_dir: &Path) -> PathBuf {
        self.scripts_subdir
            .iter()
            .fold(unit_dir.to_path_buf(), |dir, segment| dir.join(segment))
    }

    /// Whether `path` carries one of the configured script extensions
    pub fn is_script(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.script_extensions.iter().any(|e| e == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_zomboid_layout() {
        let config = ScanConfig::default();
        assert_eq!(config.descriptor_name, "mod.info");
        assert_eq!(
            config.scripts_dir(Path::new("Mods/Foo")),
            PathBuf::from("Mods/Foo/media/lua")
        );
        assert_eq!(config.missing_root, MissingRootPolicy::Error);
        assert!(config.follow_links);
    }

    #[test]
    fn test_is_script_is_case_sensitive() {
        let config = ScanConfig::default();
        assert!(config.is_script(Path::new("a/b/init.lua")));
        assert!(config.is_script(Path::new("a/b/items.script")));
        assert!(!config.is_script(Path::new("a/b/INIT.LUA")));
        assert!(!config.is_script(Path::new("a/b/readme.txt")));
        assert!(!config.is_script(Path::new("a/b/.lua")));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScanConfig::from_toml_str("missing_root = \"empty\"\n").unwrap();
        assert_eq!(config.missing_root, MissingRootPolicy::Empty);
        assert_eq!(config.script_extensions, vec!["lua", "script"]);
        assert_eq!(config.scripts_subdir, vec!["media", "lua"]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScanConfig {
            descriptor_name: "mod.info".to_string(),
            scripts_subdir: vec!["gamedata".to_string(), "scripts".to_string()],
            script_extensions: vec!["script".to_string()],
            missing_root: MissingRootPolicy::Empty,
            follow_links: false,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = ScanConfig::from_toml_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_empty_extensions() {
        let err = ScanConfig::from_toml_str("script_extensions = []\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let err = ScanConfig::from_toml_str("script_extensions = [\".lua\"]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = ScanConfig::from_toml_str("missing_root = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
