//! Script collection under a base directory

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::utils::cmp_path_str;

/// Find all script files at any depth below `base_dir`
///
/// Files are matched by extension (see [`ScanConfig::is_script`]).
/// A file reachable through more than one path, e.g. via a symlink, is kept
/// once, under its lexicographically smallest path. Unreadable entries are
/// skipped.
///
/// # Returns
/// Script paths rooted at `base_dir`, sorted by full path string.
pub fn collect_scripts(base_dir: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut scripts: Vec<PathBuf> = WalkDir::new(base_dir)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", base_dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && config.is_script(e.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    // Sort before deduplicating so the surviving alias never depends on
    // readdir order.
    scripts.sort_by(cmp_path_str);
    let mut seen = HashSet::new();
    scripts.retain(|path| seen.insert(file_identity(path)));
    scripts
}

/// Resolved identity of a file, or the literal path if it cannot be resolved
fn file_identity(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "-- test").unwrap();
    }

    #[test]
    fn test_collects_top_level_and_nested() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        touch(&base.join("client/ui.lua"));
        touch(&base.join("shared/items.script"));
        touch(&base.join("init.lua"));
        touch(&base.join("notes.txt"));

        let scripts = collect_scripts(base, &ScanConfig::default());

        assert_eq!(
            scripts,
            vec![
                base.join("client/ui.lua"),
                base.join("init.lua"),
                base.join("shared/items.script"),
            ]
        );
    }

    #[test]
    fn test_skips_directories_named_like_scripts() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::create_dir_all(base.join("fake.lua")).unwrap();
        touch(&base.join("fake.lua/real.lua"));

        let scripts = collect_scripts(base, &ScanConfig::default());

        assert_eq!(scripts, vec![base.join("fake.lua/real.lua")]);
    }

    #[test]
    fn test_empty_when_no_scripts() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("readme.md"));

        assert!(collect_scripts(temp.path(), &ScanConfig::default()).is_empty());
    }

    #[test]
    fn test_repeated_collection_is_stable() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        for name in ["z.lua", "a.lua", "m/b.script", "m/a.lua"] {
            touch(&base.join(name));
        }

        let config = ScanConfig::default();
        let first = collect_scripts(base, &config);
        let second = collect_scripts(base, &config);

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_script_kept_once_under_smallest_path() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        touch(&base.join("shared/core.lua"));
        std::os::unix::fs::symlink(base.join("shared"), base.join("alias")).unwrap();

        let scripts = collect_scripts(base, &ScanConfig::default());

        assert_eq!(scripts, vec![base.join("alias/core.lua")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_smallest_alias_survives_regardless_of_link_direction() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        touch(&base.join("a_real/core.lua"));
        std::os::unix::fs::symlink(base.join("a_real"), base.join("z_link")).unwrap();

        let scripts = collect_scripts(base, &ScanConfig::default());

        assert_eq!(scripts, vec![base.join("a_real/core.lua")]);
    }
}
