use super::DicomEntry;
use dicom::object::{open_file, DefaultDicomObject};
use std::path::Path;

/// Attempts to parse one file as DICOM and extract the hierarchy
/// identifiers. Files that are not DICOM (or are corrupt) yield `None`;
/// that is the normal outcome for most files in a mixed directory tree,
/// not an error.
pub fn load_dicom(path: &Path) -> Option<DicomEntry> {
    let object = match open_file(path) {
        Ok(object) => object,
        Err(err) => {
            log::debug!("{}: skipped, not a readable DICOM file ({err})", path.display());
            return None;
        }
    };

    let patient_id = attribute_text(&object, "PatientID");
    let patient_name = attribute_text(&object, "PatientName");
    let study_id = attribute_text(&object, "StudyID");
    let study_uid = attribute_text(&object, "StudyInstanceUID");
    let series_description = attribute_text(&object, "SeriesDescription");
    let series_uid = attribute_text(&object, "SeriesInstanceUID");
    let sop_uid = attribute_text(&object, "SOPInstanceUID");

    Some(DicomEntry {
        patient_id: patient_id.unwrap_or_else(unknown),
        patient_name: patient_name.unwrap_or_else(unknown),
        study_id: study_id.unwrap_or_else(unknown),
        study_instance_uid: study_uid.unwrap_or_else(unknown),
        series_description: series_description.unwrap_or_else(unknown),
        series_instance_uid: series_uid.unwrap_or_else(unknown),
        sop_instance_uid: sop_uid.unwrap_or_else(unknown),
        file_path: path.to_path_buf(),
        object: object.into_inner(),
    })
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn attribute_text(object: &DefaultDicomObject, name: &str) -> Option<String> {
    object
        .element_by_name(name)
        .ok()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
