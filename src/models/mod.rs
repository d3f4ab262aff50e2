//! Data models for patient payloads and analysis results.

pub mod patient;
pub mod result;
pub mod timestamp;

pub use patient::{ExamReading, PatientRecord};
pub use result::{AnalysisResult, PriorityLevel};
