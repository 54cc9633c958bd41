pub mod dicom_entry;
pub mod hierarchy;
pub mod loader;

pub use dicom_entry::DicomEntry;
pub use hierarchy::{Patient, PatientRoot, Series, SopInstance, Study};
