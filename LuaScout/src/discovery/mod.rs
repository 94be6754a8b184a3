//! Script discovery
//!
//! Two entry points share one collection rule:
//! - [`discover_mods`] finds `mod.info` units and the scripts under each
//!   unit's `media/lua` directory
//! - [`discover_direct`] collects scripts from any file or directory

pub mod direct;
pub mod mods;
pub mod scripts;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use direct::{DIRECT_KEY, discover_direct, discover_direct_with_config};
pub use mods::{ModUnit, discover_mods, discover_mods_with_config, discover_units_with_config};
pub use scripts::collect_scripts;

/// Mod key -> sorted, deduplicated script paths
pub type ModScripts = BTreeMap<String, Vec<PathBuf>>;
