use dicom::core::Tag;
use dicom::object::InMemDicomObject;
use std::path::PathBuf;

use super::DicomEntry;

/// Root of the accumulated patient/study/series/instance hierarchy.
///
/// The tree is built once by the path scanner and read afterwards; every
/// `Vec` preserves discovery order.
#[derive(Debug, Default)]
pub struct PatientRoot {
    pub patients: Vec<Patient>,
}

#[derive(Debug)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub studies: Vec<Study>,
}

#[derive(Debug)]
pub struct Study {
    pub id: String,
    pub uid: String,
    pub series: Vec<Series>,
}

#[derive(Debug)]
pub struct Series {
    pub uid: String,
    pub description: String,
    pub study_uid: String,
    pub instances: Vec<SopInstance>,
}

#[derive(Debug)]
pub struct SopInstance {
    pub uid: String,
    pub file_path: PathBuf,
    pub object: InMemDicomObject,
}

impl PatientRoot {
    /// Merges one parsed file into the hierarchy, keyed by identity at each
    /// level: nodes are created on first reference and appended to on later
    /// ones. Instances are always appended, even when a SOP instance UID
    /// repeats across files.
    pub fn insert(&mut self, entry: DicomEntry) {
        let patient = self.patient_entry(&entry.patient_id, &entry.patient_name);
        let study = patient.study_entry(&entry.study_id, &entry.study_instance_uid);
        let series = study.series_entry(
            &entry.series_instance_uid,
            &entry.series_description,
            &entry.study_instance_uid,
        );
        series.instances.push(SopInstance {
            uid: entry.sop_instance_uid,
            file_path: entry.file_path,
            object: entry.object,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    fn patient_entry(&mut self, id: &str, name: &str) -> &mut Patient {
        if let Some(index) = self.patients.iter().position(|p| p.id == id) {
            return &mut self.patients[index];
        }
        self.patients.push(Patient {
            id: id.to_string(),
            name: name.to_string(),
            studies: Vec::new(),
        });
        let last = self.patients.len() - 1;
        &mut self.patients[last]
    }
}

impl Patient {
    fn study_entry(&mut self, id: &str, uid: &str) -> &mut Study {
        if let Some(index) = self.studies.iter().position(|s| s.uid == uid) {
            return &mut self.studies[index];
        }
        self.studies.push(Study {
            id: id.to_string(),
            uid: uid.to_string(),
            series: Vec::new(),
        });
        let last = self.studies.len() - 1;
        &mut self.studies[last]
    }
}

impl Study {
    fn series_entry(&mut self, uid: &str, description: &str, study_uid: &str) -> &mut Series {
        if let Some(index) = self.series.iter().position(|s| s.uid == uid) {
            return &mut self.series[index];
        }
        self.series.push(Series {
            uid: uid.to_string(),
            description: description.to_string(),
            study_uid: study_uid.to_string(),
            instances: Vec::new(),
        });
        let last = self.series.len() - 1;
        &mut self.series[last]
    }
}

impl SopInstance {
    /// Reads an attribute from the parsed dataset as a float. A missing or
    /// non-numeric element yields `None`; the caller decides how to render
    /// that.
    pub fn float_value(&self, tag: Tag) -> Option<f64> {
        self.object
            .element(tag)
            .ok()
            .and_then(|element| element.to_float64().ok())
    }
}
