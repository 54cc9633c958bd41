mod config;
mod error;
mod model;
mod report;
mod scan;
mod utils;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use config::ReportConfig;
use report::create_report;
use scan::scan_path;
use utils::format_tag;

fn main() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();
    log::info!("Started");

    let config = ReportConfig::from_env();
    log::info!(
        "Reporting tag ({}) from DICOM files under {}",
        format_tag(config.attribute_tag),
        config.scan_root.display()
    );

    // A failed scan leaves the hierarchy absent; the report step tolerates
    // that and the process still exits 0.
    let hierarchy = match scan_path(&config.scan_root, config.recursive) {
        Ok(root) => Some(root),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    };

    let report = create_report(hierarchy.as_ref(), config.attribute_tag);
    if let Err(err) = emit_report(&report, config.output.as_deref()) {
        log::error!("Failed to write report: {err}");
    }
    log::info!("Finished");
}

fn emit_report(report: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, report),
        None => io::stdout().write_all(report.as_bytes()),
    }
}
