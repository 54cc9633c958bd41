use dicom::object::InMemDicomObject;
use std::path::PathBuf;

/// Identifiers and parsed dataset pulled out of a single DICOM file,
/// ready for insertion into the patient hierarchy.
#[derive(Debug, Clone)]
pub struct DicomEntry {
    pub patient_id: String,
    pub patient_name: String,
    pub study_id: String,
    pub study_instance_uid: String,
    pub series_description: String,
    pub series_instance_uid: String,
    pub sop_instance_uid: String,
    pub file_path: PathBuf,
    pub object: InMemDicomObject,
}
