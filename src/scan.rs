use std::path::Path;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::model::{loader, PatientRoot};

/// Walks the directory tree under `root` and accumulates every parseable
/// DICOM file into a patient hierarchy. Non-DICOM files are skipped;
/// filesystem faults abort the scan with [`ScanError`].
///
/// Entries are visited in file-name order so discovery order, and with it
/// the "first instance of each series", is deterministic across platforms.
pub fn scan_path(root: &Path, recursive: bool) -> Result<PatientRoot, ScanError> {
    log::info!("DICOM search: {}", root.display());

    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root).max_depth(max_depth).sort_by_file_name();

    let mut hierarchy = PatientRoot::default();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(parsed) = loader::load_dicom(entry.path()) {
            hierarchy.insert(parsed);
        }
    }
    Ok(hierarchy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{DataElement, VR};
    use dicom::dictionary_std::{tags, uids};
    use dicom::object::{FileMetaTableBuilder, InMemDicomObject};
    use std::fs;
    use std::path::PathBuf;

    fn write_dicom_file(dir: &Path, name: &str, series_uid: &str, sop_uid: &str, echo_time: &str) -> PathBuf {
        let dataset = InMemDicomObject::from_element_iter([
            DataElement::new(tags::SOP_CLASS_UID, VR::UI, uids::MR_IMAGE_STORAGE),
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, sop_uid),
            DataElement::new(tags::PATIENT_ID, VR::LO, "PAT001"),
            DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^Jane"),
            DataElement::new(tags::STUDY_ID, VR::SH, "STUDY1"),
            DataElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3.4"),
            DataElement::new(tags::SERIES_DESCRIPTION, VR::LO, "T2 axial"),
            DataElement::new(tags::SERIES_INSTANCE_UID, VR::UI, series_uid),
            DataElement::new(tags::ECHO_TIME, VR::DS, echo_time),
        ]);
        let object = dataset
            .with_meta(
                FileMetaTableBuilder::new()
                    .media_storage_sop_class_uid(uids::MR_IMAGE_STORAGE)
                    .media_storage_sop_instance_uid(sop_uid)
                    .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            )
            .expect("valid file meta table");
        let path = dir.join(name);
        object.write_to_file(&path).expect("write DICOM fixture");
        path
    }

    #[test]
    fn empty_directory_yields_empty_hierarchy() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = scan_path(dir.path(), true).expect("scan");
        assert!(root.is_empty());
    }

    #[test]
    fn non_dicom_files_are_silently_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("notes.txt"), "not an image").expect("fixture");
        fs::write(dir.path().join("broken.dcm"), [0u8; 16]).expect("fixture");

        let root = scan_path(dir.path(), true).expect("scan");
        assert!(root.is_empty());
    }

    #[test]
    fn dicom_files_are_grouped_by_series() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_dicom_file(dir.path(), "a.dcm", "1.2.3.4.1", "1.1", "34.5");
        write_dicom_file(dir.path(), "b.dcm", "1.2.3.4.1", "1.2", "34.5");
        write_dicom_file(dir.path(), "c.dcm", "1.2.3.4.2", "2.1", "80");
        fs::write(dir.path().join("readme.txt"), "mixed content").expect("fixture");

        let root = scan_path(dir.path(), true).expect("scan");
        assert_eq!(root.patients.len(), 1);
        let patient = &root.patients[0];
        assert_eq!(patient.id, "PAT001");
        assert_eq!(patient.studies.len(), 1);
        let study = &patient.studies[0];
        assert_eq!(study.series.len(), 2);
        assert_eq!(study.series[0].instances.len(), 2);
        assert_eq!(study.series[1].instances.len(), 1);
    }

    #[test]
    fn file_name_order_fixes_the_first_instance() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Written out of order; the scan sorts by file name.
        write_dicom_file(dir.path(), "z_second.dcm", "1.2.3.4.1", "1.2", "99");
        write_dicom_file(dir.path(), "a_first.dcm", "1.2.3.4.1", "1.1", "34.5");

        let root = scan_path(dir.path(), true).expect("scan");
        let series = &root.patients[0].studies[0].series[0];
        assert_eq!(series.instances[0].uid, "1.1");
        assert_eq!(series.instances[1].uid, "1.2");
    }

    #[test]
    fn non_recursive_scan_ignores_subdirectories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("fixture");
        write_dicom_file(&nested, "deep.dcm", "1.2.3.4.1", "1.1", "34.5");

        let root = scan_path(dir.path(), false).expect("scan");
        assert!(root.is_empty());

        let root = scan_path(dir.path(), true).expect("scan");
        assert_eq!(root.patients.len(), 1);
    }

    #[test]
    fn missing_root_is_a_scan_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        let err = scan_path(&missing, true).expect_err("scan should fail");
        assert_eq!(err.path, missing);
    }
}
