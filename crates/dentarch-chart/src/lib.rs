#![warn(missing_docs)]

//! Top-level chart control for the dentarch 3D dental chart.
//!
//! The [`ChartController`] orchestrates the two independent async data
//! sources (clinical chart and AI diagnosis), recomputes the 32-entry
//! `ToothData` array atomically when either snapshot changes, owns the
//! zero-or-one active-tooth selection, and exposes presentational zoom and
//! rotation state for the embedding page.

pub mod controller;
pub mod source;

pub use controller::{
    ChartController, ChartError, ChartOptions, LoadState, LoadTicket, ToothDetail, ViewTransform,
};
pub use source::{ChartSource, DiagnosisSource, SourceError};
