//! Per-mod reports combining discovery and metadata
//!
//! Discovery runs first; metadata is then read for each discovered mod
//! directory. Mods are independent, so extraction runs in parallel.

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::discovery::{DIRECT_KEY, discover_direct_with_config, discover_units_with_config};
use crate::error::Result;
use crate::metadata::{ModInfo, extract_mod_info};
use crate::utils::base_name;

/// One discovered mod with its metadata and scripts
#[derive(Debug, Clone, Serialize)]
pub struct ModReport {
    /// Discovery key (path relative to the scan root, or `(direct)`)
    pub key: String,
    /// Mod directory the metadata was read from
    pub path: PathBuf,
    pub info: ModInfo,
    pub scripts: Vec<PathBuf>,
}

impl ModReport {
    /// Number of scripts in this mod
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }
}

/// Discover all mods under `root` and read their metadata
///
/// # Returns
/// Reports sorted by key.
pub fn build_report(root: &Path, config: &ScanConfig) -> Result<Vec<ModReport>> {
    let units = discover_units_with_config(root, config)?;

    let mut reports: Vec<ModReport> = units
        .into_par_iter()
        .map(|unit| ModReport {
            info: extract_mod_info(&unit.dir),
            key: unit.key,
            path: unit.dir,
            scripts: unit.scripts,
        })
        .collect();

    reports.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(reports)
}

/// Collect scripts at `path` directly and describe them as one report
///
/// Metadata is read from `path` when it is a directory; for a single file
/// only the file name is used.
pub fn direct_report(path: &Path, config: &ScanConfig) -> Option<ModReport> {
    let mut mods = discover_direct_with_config(path, config);
    let scripts = mods.remove(DIRECT_KEY)?;

    let info = if path.is_dir() {
        extract_mod_info(path)
    } else {
        ModInfo::new(base_name(path))
    };

    Some(ModReport {
        key: DIRECT_KEY.to_string(),
        path: path.to_path_buf(),
        info,
        scripts,
    })
}

/// Total number of scripts across reports
pub fn total_scripts(reports: &[ModReport]) -> usize {
    reports.iter().map(ModReport::script_count).sum()
}

/// Render reports or metadata as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
