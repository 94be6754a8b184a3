//! # `LuaScout`
//!
//! Finds Lua scripts belonging to Project Zomboid style mods and reads their
//! descriptive metadata.
//!
//! ## What it does
//!
//! - **Mod discovery** - every directory holding a `mod.info` marker is a
//!   mod unit; its `media/lua` tree is searched for `.lua` and `.script` files
//! - **Direct discovery** - collect scripts from any file or directory,
//!   without a descriptor
//! - **Metadata** - merge `mod.info`, `meta.ini` and `modinfo.txt` into a
//!   single [`ModInfo`](metadata::ModInfo)
//!
//! ## Quick Start
//!
//! ```no_run
//! use luascout::config::ScanConfig;
//! use luascout::discovery::discover_units_with_config;
//! use luascout::metadata::extract_mod_info;
//!
//! let units = discover_units_with_config("Zomboid/Workshop", &ScanConfig::default())?;
//! for unit in &units {
//!     let info = extract_mod_info(&unit.dir);
//!     println!("{} [{}] ({} scripts)", info.name, unit.key, unit.scripts.len());
//! }
//! # Ok::<(), luascout::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use luascout::prelude::*;
//!
//! let config = ScanConfig::default().with_missing_root(MissingRootPolicy::Empty);
//! let mods = discover_mods_with_config("does/not/exist", &config)?;
//! assert!(mods.is_empty());
//! # Ok::<(), luascout::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `luascout` command-line binary

pub mod config;
pub mod discovery;
pub mod error;
pub mod metadata;
pub mod report;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{MissingRootPolicy, ScanConfig};
    pub use crate::discovery::{
        DIRECT_KEY, ModScripts, ModUnit, collect_scripts, discover_direct,
        discover_direct_with_config, discover_mods, discover_mods_with_config,
        discover_units_with_config,
    };
    pub use crate::error::{Error, Result};
    pub use crate::metadata::{ModInfo, extract_mod_info};
    pub use crate::report::{ModReport, build_report, direct_report, to_json};
}

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
