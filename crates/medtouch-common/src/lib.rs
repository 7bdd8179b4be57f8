//! medtouch-common — Shared patient-intake types, vocabularies, and errors used across all MedTouch crates.

pub mod error;
pub mod vitals;
pub mod vocabulary;

// Re-export commonly used types
pub use error::{MedtouchError, Result};
pub use vitals::{ClinicalContext, VitalsInput};
