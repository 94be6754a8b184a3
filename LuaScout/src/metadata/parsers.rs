//! Line parsers for the three descriptor formats
//!
//! All parsers work on already-decoded text and never fail; lines they do not
//! understand are ignored.

use std::collections::HashMap;

use super::ModInfo;

/// Split a trimmed `key=value` line at the first `=`
///
/// Keys are compared exactly, so `name =foo` does not define `name`.
/// Returns `None` for lines without `=` or with an empty value.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once('=')?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

/// Remove one layer of matching `'` or `"` quotes
pub fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Apply `mod.info` content to `info`
///
/// Keys are collected first (last occurrence wins) and mapped afterwards,
/// so line order never changes the result. `modVersion` is stored as
/// `version`; `name` and `description` have surrounding quotes removed.
pub fn parse_mod_info(content: &str, info: &mut ModInfo) {
    let raw: HashMap<&str, &str> = content.lines().filter_map(split_key_value).collect();

    if let Some(name) = raw.get("name").map(|v| strip_matching_quotes(v))
        && !name.is_empty()
    {
        info.name = name.to_string();
    }
    if let Some(id) = raw.get("id") {
        info.id = Some((*id).to_string());
    }
    if let Some(require) = raw.get("require") {
        info.require = Some((*require).to_string());
    }
    if let Some(version) = raw.get("modVersion") {
        info.version = Some((*version).to_string());
    }
    if let Some(author) = raw.get("author") {
        info.author = Some((*author).to_string());
    }
    if let Some(description) = raw.get("description").map(|v| strip_matching_quotes(v))
        && !description.is_empty()
    {
        info.description = Some(description.to_string());
    }
}

/// Apply MO2 `meta.ini` content to `info`
///
/// Only `name`, `version` and `author` are read; values are used as-is.
/// Section headers and comments never match a key and fall through.
pub fn parse_meta_ini(content: &str, info: &mut ModInfo) {
    for (key, value) in content.lines().filter_map(split_key_value) {
        match key {
            "name" => info.name = value.to_string(),
            "version" => info.version = Some(value.to_string()),
            "author" => info.author = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Apply `modinfo.txt` content to `info`: the first non-blank line is the name
pub fn parse_modinfo_txt(content: &str, info: &mut ModInfo) {
    if let Some(name) = content.lines().map(str::trim).find(|line| !line.is_empty()) {
        info.name = name.to_string();
    }
}
