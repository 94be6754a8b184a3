//! Mod metadata extraction
//!
//! Three descriptor files are read from a mod directory, in order:
//! 1. `mod.info` (Project Zomboid)
//! 2. `meta.ini` (Mod Organizer 2)
//! 3. `modinfo.txt` (first line is the display name)
//!
//! Later files overwrite fields set by earlier ones. A missing or unreadable
//! file simply contributes nothing.

pub mod parsers;

use serde::Serialize;
use std::path::Path;

use crate::utils::base_name;

pub use parsers::{parse_meta_ini, parse_mod_info, parse_modinfo_txt, strip_matching_quotes};

/// Project Zomboid descriptor
pub const MOD_INFO_FILE: &str = "mod.info";
/// Mod Organizer 2 descriptor
pub const META_INI_FILE: &str = "meta.ini";
/// Plain text descriptor
pub const MODINFO_TXT_FILE: &str = "modinfo.txt";

/// Metadata gathered for one mod directory
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModInfo {
    /// Display name, defaulting to the directory name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Dependencies as written in `mod.info` (not resolved)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModInfo {
    /// Create a record holding only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Read name, id, version, author, etc. from the descriptors in `mod_dir`
///
/// Never fails: the result always has a name, at worst the directory name.
pub fn extract_mod_info(mod_dir: &Path) -> ModInfo {
    let mut info = ModInfo::new(base_name(mod_dir));

    let steps: [(&str, fn(&str, &mut ModInfo)); 3] = [
        (MOD_INFO_FILE, parse_mod_info),
        (META_INI_FILE, parse_meta_ini),
        (MODINFO_TXT_FILE, parse_modinfo_txt),
    ];

    for (file_name, parse) in steps {
        if let Some(content) = read_descriptor(&mod_dir.join(file_name)) {
            parse(&content, &mut info);
        }
    }

    info
}

/// Read a descriptor as UTF-8, dropping invalid bytes
///
/// Returns `None` when the file is absent or cannot be read.
fn read_descriptor(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(decode_ignoring_invalid(&bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!("Ignoring unreadable descriptor {}: {}", path.display(), e);
            None
        }
    }
}

/// Decode UTF-8, skipping invalid byte sequences instead of replacing them
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
