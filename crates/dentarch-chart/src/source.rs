//! Data-source boundaries.
//!
//! The chart and AI-diagnosis backends are external collaborators; the
//! controller only sees these two traits. Implementations live with the
//! embedding application (HTTP clients, file fixtures, test fakes).

use dentarch_ir::{ChartRecord, Diagnosis};
use thiserror::Error;

/// Errors a data source can surface.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backend could not be reached.
    #[error("source unavailable: {0}")]
    Unavailable(String),
    /// The payload could not be decoded.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies the clinical chart records for a patient.
pub trait ChartSource {
    /// Fetch all recorded tooth entries for `patient_id`. Teeth without an
    /// entry are synthesized as present by the assembly step.
    fn fetch_chart(
        &self,
        patient_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChartRecord>, SourceError>> + Send;
}

/// Supplies the AI diagnosis for a patient.
pub trait DiagnosisSource {
    /// Fetch the findings for `patient_id`.
    fn fetch_diagnosis(
        &self,
        patient_id: &str,
    ) -> impl std::future::Future<Output = Result<Diagnosis, SourceError>> + Send;
}
