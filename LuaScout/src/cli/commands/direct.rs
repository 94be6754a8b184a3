//! CLI command for direct script discovery

use std::path::Path;

use crate::config::ScanConfig;
use crate::report::{direct_report, to_json};

use super::scan::print_report;

pub fn execute(path: &Path, json: bool) -> anyhow::Result<()> {
    let report = direct_report(path, &ScanConfig::default());

    if json {
        let reports: Vec<_> = report.into_iter().collect();
        println!("{}", to_json(&reports)?);
        return Ok(());
    }

    match report {
        Some(report) => print_report(&report),
        None => println!("No scripts found at {}", path.display()),
    }

    Ok(())
}
