//! Direct script discovery for paths without a `mod.info` layout

use std::path::Path;

use crate::config::ScanConfig;

use super::ModScripts;
use super::scripts::collect_scripts;

/// Key used for every script found by direct discovery
pub const DIRECT_KEY: &str = "(direct)";

/// Find scripts at `path` using the default [`ScanConfig`]
pub fn discover_direct<P: AsRef<Path>>(path: P) -> ModScripts {
    discover_direct_with_config(path, &ScanConfig::default())
}

/// Find scripts at `path` without requiring a mod descriptor
///
/// - a script file maps to itself
/// - a directory is searched recursively
/// - anything else (missing path, non-script file, special file) gives an
///   empty map
pub fn discover_direct_with_config<P: AsRef<Path>>(path: P, config: &ScanConfig) -> ModScripts {
    let path = path.as_ref();
    let mut mods = ModScripts::new();

    if path.is_file() {
        if config.is_script(path) {
            mods.insert(DIRECT_KEY.to_string(), vec![path.to_path_buf()]);
        }
        return mods;
    }

    if path.is_dir() {
        let scripts = collect_scripts(path, config);
        if !scripts.is_empty() {
            tracing::debug!("Found {} scripts under {}", scripts.len(), path.display());
            mods.insert(DIRECT_KEY.to_string(), scripts);
        }
        return mods;
    }

    tracing::debug!("Nothing to scan at {}", path.display());
    mods
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_lua_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("patch.lua");
        fs::write(&file, "return {}").unwrap();

        let mods = discover_direct(&file);

        assert_eq!(mods.len(), 1);
        assert_eq!(mods.get(DIRECT_KEY), Some(&vec![file]));
    }

    #[test]
    fn test_single_non_script_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();

        assert!(discover_direct(&file).is_empty());
    }

    #[test]
    fn test_directory_is_searched_recursively() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::create_dir_all(base.join("deep/er")).unwrap();
        fs::write(base.join("deep/er/b.script"), "").unwrap();
        fs::write(base.join("a.lua"), "").unwrap();

        let mods = discover_direct(base);

        assert_eq!(
            mods.get(DIRECT_KEY),
            Some(&vec![base.join("a.lua"), base.join("deep/er/b.script")])
        );
    }

    #[test]
    fn test_directory_without_scripts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mod.info"), "name=x").unwrap();

        assert!(discover_direct(temp.path()).is_empty());
    }

    #[test]
    fn test_missing_path_is_not_an_error() {
        let temp = TempDir::new().unwrap();

        assert!(discover_direct(temp.path().join("gone.lua")).is_empty());
    }
}
