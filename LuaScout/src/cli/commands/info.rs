//! CLI command for reading mod metadata

use std::path::Path;

use crate::metadata::extract_mod_info;
use crate::report::to_json;

pub fn execute(mod_dir: &Path, json: bool) -> anyhow::Result<()> {
    if !mod_dir.is_dir() {
        anyhow::bail!("not a directory: {}", mod_dir.display());
    }

    let info = extract_mod_info(mod_dir);

    if json {
        println!("{}", to_json(&info)?);
        return Ok(());
    }

    println!("Name:        {}", info.name);
    let fields = [
        ("ID:", &info.id),
        ("Version:", &info.version),
        ("Author:", &info.author),
        ("Requires:", &info.require),
        ("Description:", &info.description),
    ];
    for (label, value) in fields {
        println!("{label:<12} {}", value.as_deref().unwrap_or("-"));
    }

    Ok(())
}
