use dicom::core::Tag;
use dicom::dictionary_std::tags;
use std::env;
use std::path::PathBuf;

use crate::utils::parse_tag;

pub const ROOT_ENV: &str = "DICOM_REPORT_ROOT";
pub const RECURSIVE_ENV: &str = "DICOM_REPORT_RECURSIVE";
pub const TAG_ENV: &str = "DICOM_REPORT_TAG";
pub const OUTPUT_ENV: &str = "DICOM_REPORT_OUTPUT";

const DEFAULT_SCAN_ROOT: &str = ".";

/// Run settings, defaulted in code and overridable through the
/// environment. The process takes no command-line arguments.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub scan_root: PathBuf,
    pub recursive: bool,
    /// Attribute reported from the first instance of each series.
    pub attribute_tag: Tag,
    /// Report sink: a file path, or stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scan_root: PathBuf::from(DEFAULT_SCAN_ROOT),
            recursive: true,
            attribute_tag: tags::ECHO_TIME,
            output: None,
        }
    }
}

impl ReportConfig {
    /// Builds the configuration from defaults plus any overrides present
    /// in the environment. Unparseable overrides are logged and ignored
    /// rather than aborting the run.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(root) = env::var(ROOT_ENV) {
            if !root.is_empty() {
                config.scan_root = PathBuf::from(root);
            }
        }
        if let Ok(flag) = env::var(RECURSIVE_ENV) {
            match parse_flag(&flag) {
                Some(recursive) => config.recursive = recursive,
                None => log::warn!("Ignoring unparseable {RECURSIVE_ENV} value: {flag}"),
            }
        }
        if let Ok(text) = env::var(TAG_ENV) {
            match parse_tag(&text) {
                Some(tag) => config.attribute_tag = tag,
                None => log::warn!("Ignoring unparseable {TAG_ENV} value: {text}"),
            }
        }
        if let Ok(path) = env::var(OUTPUT_ENV) {
            if !path.is_empty() {
                config.output = Some(PathBuf::from(path));
            }
        }
        config
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
