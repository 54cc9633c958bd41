use dicom::core::Tag;
use std::fmt::Write;

use crate::model::PatientRoot;
use crate::utils::format_attribute_value;

/// Builds the text report from the accumulated hierarchy: one line per
/// non-empty series, taken from the FIRST instance in discovery order.
///
/// `None` means the scan failed and no hierarchy exists; that produces an
/// empty report rather than a fault.
pub fn create_report(root: Option<&PatientRoot>, tag: Tag) -> String {
    let Some(root) = root else {
        return String::new();
    };

    let mut report = String::new();
    for patient in &root.patients {
        log::info!("Processing patient {}", patient.name);
        for study in &patient.studies {
            log::info!("Processing DICOM study {}", study.id);
            for series in &study.series {
                log::info!(
                    "Processing DICOM series {} ({})",
                    series.description,
                    series.study_uid
                );
                if let Some(sop) = series.instances.first() {
                    let value = format_attribute_value(sop.float_value(tag));
                    let _ = writeln!(report, "MR sequence echo time = {value}");
                }
            }
        }
    }
    report
}
