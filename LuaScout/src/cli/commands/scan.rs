//! CLI command for scanning a directory tree for mods

use std::path::Path;

use crate::config::{MissingRootPolicy, ScanConfig};
use crate::report::{ModReport, build_report, to_json, total_scripts};

pub fn execute(
    root: &Path,
    config_path: Option<&Path>,
    allow_missing_root: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => ScanConfig::load(path)?,
        None if root.is_dir() => ScanConfig::load_or_default(root)?,
        None => ScanConfig::default(),
    };
    if allow_missing_root {
        config.missing_root = MissingRootPolicy::Empty;
    }

    let reports = build_report(root, &config)?;

    if json {
        println!("{}", to_json(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No mods with scripts found under {}", root.display());
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    println!(
        "\n{} mods, {} scripts",
        reports.len(),
        total_scripts(&reports)
    );

    Ok(())
}

/// Print one report as an indented block
pub(super) fn print_report(report: &ModReport) {
    let info = &report.info;
    println!("{} [{}]", info.name, report.key);

    let details = [
        ("id", &info.id),
        ("version", &info.version),
        ("author", &info.author),
        ("require", &info.require),
        ("description", &info.description),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }

    println!("  scripts ({}):", report.script_count());
    for script in &report.scripts {
        println!("    {}", script.display());
    }
}
