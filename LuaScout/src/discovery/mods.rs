//! Mod unit discovery
//!
//! A mod unit is any directory holding a `mod.info` marker. Its scripts live
//! under `<unit>/media/lua`, at any depth.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{MissingRootPolicy, ScanConfig};
use crate::error::{Error, Result};
use crate::utils::relative_key;

use super::ModScripts;
use super::scripts::collect_scripts;

/// One discovered mod unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModUnit {
    /// Unit directory relative to the scan root, `"."` for the root itself
    pub key: String,
    /// Unit directory as found on disk, rooted at the scan root
    pub dir: PathBuf,
    /// Sorted, deduplicated script paths
    pub scripts: Vec<PathBuf>,
}

/// Discover all mods below `root` using the default [`ScanConfig`]
///
/// # Arguments
/// * `root` - Directory to search (e.g. a `Workshop` or `mods` folder)
///
/// # Returns
/// Mod key (unit directory relative to `root`) -> sorted script paths.
pub fn discover_mods<P: AsRef<Path>>(root: P) -> Result<ModScripts> {
    discover_mods_with_config(root, &ScanConfig::default())
}

/// Discover all mods below `root`
///
/// Units without a scripts directory, or whose scripts directory holds no
/// scripts, are left out. Unreadable entries below the root are skipped.
///
/// # Errors
/// With [`MissingRootPolicy::Error`], returns [`Error::RootNotFound`],
/// [`Error::RootNotDirectory`] or an IO error when `root` cannot be scanned.
/// With [`MissingRootPolicy::Empty`] those cases produce an empty map.
pub fn discover_mods_with_config<P: AsRef<Path>>(
    root: P,
    config: &ScanConfig,
) -> Result<ModScripts> {
    let units = discover_units_with_config(root, config)?;
    Ok(units
        .into_iter()
        .map(|unit| (unit.key, unit.scripts))
        .collect())
}

/// Discover all mod units below `root`, keeping each unit's real directory
///
/// Same rules and errors as [`discover_mods_with_config`]. Use this when the
/// unit directory is needed again, since a key is lossy for paths that are
/// not valid UTF-8.
///
/// # Returns
/// Units sorted by key.
pub fn discover_units_with_config<P: AsRef<Path>>(
    root: P,
    config: &ScanConfig,
) -> Result<Vec<ModUnit>> {
    let root = root.as_ref();
    let mut units = Vec::new();

    if let Err(e) = check_root(root) {
        return match config.missing_root {
            MissingRootPolicy::Error => Err(e),
            MissingRootPolicy::Empty => {
                tracing::warn!("Treating unusable scan root as empty: {}", e);
                Ok(units)
            }
        };
    }

    tracing::debug!("Scanning {} for {}", root.display(), config.descriptor_name);

    for entry in WalkDir::new(root).follow_links(config.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 && config.missing_root == MissingRootPolicy::Error => {
                return Err(e.into());
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != config.descriptor_name.as_str() {
            continue;
        }

        let Some(unit_dir) = entry.path().parent() else {
            continue;
        };

        let scripts_dir = config.scripts_dir(unit_dir);
        if !scripts_dir.is_dir() {
            tracing::debug!("No scripts directory for {}", unit_dir.display());
            continue;
        }

        let scripts = collect_scripts(&scripts_dir, config);
        if scripts.is_empty() {
            tracing::debug!("No scripts found in {}", scripts_dir.display());
            continue;
        }

        let Some(key) = relative_key(unit_dir, root) else {
            continue;
        };

        tracing::debug!("Found mod '{}' with {} scripts", key, scripts.len());
        units.push(ModUnit {
            key,
            dir: unit_dir.to_path_buf(),
            scripts,
        });
    }

    units.sort_by(|a, b| a.key.cmp(&b.key));
    tracing::info!("Discovered {} mods under {}", units.len(), root.display());
    Ok(units)
}

/// Make sure `root` is an existing, listable directory
fn check_root(root: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(Error::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    std::fs::read_dir(root)?;
    Ok(())
}
