//! The chart controller.

use dentarch_ir::{
    assemble_chart, AiFinding, ChartRecord, Diagnosis, LayoutTable, RestorationType, Surface,
    ToothData, ToothNumber, ToothStatus,
};
use dentarch_scene::{ArchScene, RenderList, SceneError, SceneEvent};
use thiserror::Error;

use crate::source::{ChartSource, DiagnosisSource, SourceError};

/// Smallest presentational zoom factor.
pub const ZOOM_MIN: f64 = 0.5;
/// Largest presentational zoom factor.
pub const ZOOM_MAX: f64 = 2.5;
/// Zoom change per step.
pub const ZOOM_STEP: f64 = 0.2;
/// Zoom factor on a fresh chart.
pub const ZOOM_DEFAULT: f64 = 1.5;
/// Rotation change per step, in degrees.
pub const ROTATION_STEP_DEG: i32 = 90;

/// Errors from the chart controller.
#[derive(Error, Debug)]
pub enum ChartError {
    /// No patient has been loaded yet.
    #[error("no patient loaded")]
    NoPatient,
    /// The chart source failed; the scene cannot render without chart data.
    #[error("chart load failed: {0}")]
    ChartLoad(#[from] SourceError),
    /// The merged data could not be composed into a scene.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Lifecycle of the current patient's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No patient requested yet.
    #[default]
    Idle,
    /// A load is in flight; the scene is not rendered.
    Loading,
    /// Both sources resolved; the scene is visible.
    Ready,
    /// The chart source failed.
    Failed(String),
}

/// Proof that a load was begun; completions carrying a superseded ticket
/// are discarded, never merged.
#[derive(Debug)]
#[must_use = "completions without a ticket cannot be applied"]
pub struct LoadTicket {
    generation: u64,
}

/// Presentational view state, applied around the render surface rather
/// than by moving the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom factor in `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom: f64,
    /// Rotation in whole 90° increments, degrees in `[0, 360)`.
    pub rotation_deg: i32,
}

/// Side-panel summary of the active tooth.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothDetail {
    /// Tooth number.
    pub number: ToothNumber,
    /// Clinical status.
    pub status: ToothStatus,
    /// Current restoration, if any.
    pub restoration: Option<RestorationType>,
    /// Surfaces the restoration is localized to.
    pub surfaces: Vec<Surface>,
    /// AI findings for this tooth.
    pub findings: Vec<AiFinding>,
}

/// Construction options for [`ChartController`].
#[derive(Debug, Default)]
pub struct ChartOptions {
    /// Disables click-to-select while still rendering state and findings.
    pub read_only: bool,
    /// Position table; defaults to the built-in Universal arrangement.
    pub layout: LayoutTable,
}

type SelectCallback = Box<dyn FnMut(ToothNumber) + Send>;

/// Top-level component: loads chart and AI-diagnosis data, owns the
/// selected-tooth state and the presentational view state, and rebuilds the
/// scene whenever either source snapshot changes.
///
/// The 32-entry `ToothData` array is always a pure function of the two
/// latest source snapshots and is replaced wholesale, never mutated
/// field-by-field, so the scene always observes a consistent snapshot.
pub struct ChartController<C, D> {
    chart_source: C,
    diagnosis_source: D,
    layout: LayoutTable,
    read_only: bool,
    generation: u64,
    state: LoadState,
    patient_id: Option<String>,
    records: Vec<ChartRecord>,
    findings: Vec<AiFinding>,
    teeth: Vec<ToothData>,
    scene: Option<ArchScene>,
    active_tooth: Option<ToothNumber>,
    zoom: f64,
    rotation_deg: i32,
    on_tooth_select: Option<SelectCallback>,
}

impl<C: ChartSource, D: DiagnosisSource> ChartController<C, D> {
    /// Create a controller over the two data sources.
    pub fn new(chart_source: C, diagnosis_source: D, options: ChartOptions) -> Self {
        Self {
            chart_source,
            diagnosis_source,
            layout: options.layout,
            read_only: options.read_only,
            generation: 0,
            state: LoadState::Idle,
            patient_id: None,
            records: Vec::new(),
            findings: Vec::new(),
            teeth: Vec::new(),
            scene: None,
            active_tooth: None,
            zoom: ZOOM_DEFAULT,
            rotation_deg: 0,
            on_tooth_select: None,
        }
    }

    /// Register the external selection callback.
    pub fn set_on_tooth_select(&mut self, callback: impl FnMut(ToothNumber) + Send + 'static) {
        self.on_tooth_select = Some(Box::new(callback));
    }

    /// Current load lifecycle state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The merged 32-entry array, empty until the first load completes.
    pub fn teeth(&self) -> &[ToothData] {
        &self.teeth
    }

    /// The composed scene, present only in the `Ready` state.
    pub fn scene(&self) -> Option<&ArchScene> {
        self.scene.as_ref()
    }

    /// The active selection, if any.
    pub fn active_tooth(&self) -> Option<ToothNumber> {
        self.active_tooth
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Begin a load for a patient, superseding any load still in flight.
    /// Returns the ticket the matching completion must present.
    pub fn begin_load(&mut self, patient_id: &str) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.patient_id = Some(patient_id.to_string());
        self.active_tooth = None;
        tracing::debug!(patient_id, generation = self.generation, "chart load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply the results of both fetches.
    ///
    /// Stale tickets are discarded outright. A chart failure surfaces as
    /// [`LoadState::Failed`]; a diagnosis failure degrades to an empty
    /// findings list so the chart still renders.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        chart: Result<Vec<ChartRecord>, SourceError>,
        diagnosis: Result<Diagnosis, SourceError>,
    ) -> Result<(), ChartError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded chart load"
            );
            return Ok(());
        }
        let records = match chart {
            Ok(records) => records,
            Err(err) => {
                self.state = LoadState::Failed(err.to_string());
                self.scene = None;
                self.teeth = Vec::new();
                return Err(ChartError::ChartLoad(err));
            }
        };
        let findings = match diagnosis {
            Ok(diagnosis) => diagnosis.findings,
            Err(err) => {
                tracing::warn!("AI diagnosis unavailable, rendering without findings: {err}");
                Vec::new()
            }
        };
        self.records = records;
        self.findings = findings;
        self.rebuild()?;
        self.state = LoadState::Ready;
        Ok(())
    }

    /// Load both sources for a patient and apply the results atomically.
    pub async fn load_patient(&mut self, patient_id: &str) -> Result<(), ChartError> {
        let ticket = self.begin_load(patient_id);
        let (chart, diagnosis) = tokio::join!(
            self.chart_source.fetch_chart(patient_id),
            self.diagnosis_source.fetch_diagnosis(patient_id),
        );
        self.complete_load(ticket, chart, diagnosis)
    }

    /// Re-run the AI diagnosis against the already-loaded chart snapshot.
    pub async fn reanalyze(&mut self) -> Result<(), ChartError> {
        let patient_id = self.patient_id.clone().ok_or(ChartError::NoPatient)?;
        let ticket = LoadTicket {
            generation: self.generation,
        };
        let diagnosis = self.diagnosis_source.fetch_diagnosis(&patient_id).await;
        self.apply_diagnosis(ticket, diagnosis)
    }

    /// Apply a diagnosis-only refresh. Stale tickets are discarded; a
    /// failure clears the findings rather than blocking the chart.
    pub fn apply_diagnosis(
        &mut self,
        ticket: LoadTicket,
        diagnosis: Result<Diagnosis, SourceError>,
    ) -> Result<(), ChartError> {
        if ticket.generation != self.generation {
            tracing::debug!("discarding superseded diagnosis refresh");
            return Ok(());
        }
        self.findings = match diagnosis {
            Ok(diagnosis) => diagnosis.findings,
            Err(err) => {
                tracing::warn!("AI re-analysis failed, clearing findings: {err}");
                Vec::new()
            }
        };
        if self.state == LoadState::Ready {
            self.rebuild()?;
        }
        Ok(())
    }

    /// Recompute the 32-entry array from the latest snapshots and rebuild
    /// the scene around it.
    fn rebuild(&mut self) -> Result<(), SceneError> {
        self.teeth = assemble_chart(&self.layout, &self.records, &self.findings);
        let mut scene = ArchScene::new(&self.teeth, self.read_only)?;
        scene.set_active(self.active_tooth);
        self.scene = Some(scene);
        Ok(())
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Dispatch a click on a tooth. Returns true when the click selected
    /// the tooth (always false while read-only or before the scene exists).
    pub fn click(&mut self, n: ToothNumber) -> bool {
        let Some(scene) = self.scene.as_ref() else {
            return false;
        };
        match scene.click(n) {
            Some(SceneEvent::ToothClicked(n)) => {
                self.select_tooth(n);
                true
            }
            None => false,
        }
    }

    /// Set the active tooth and notify the embedding application.
    pub fn select_tooth(&mut self, n: ToothNumber) {
        self.active_tooth = Some(n);
        if let Some(scene) = self.scene.as_mut() {
            scene.set_active(Some(n));
        }
        if let Some(callback) = self.on_tooth_select.as_mut() {
            callback(n);
        }
    }

    /// Clear the active selection.
    pub fn clear_selection(&mut self) {
        self.active_tooth = None;
        if let Some(scene) = self.scene.as_mut() {
            scene.set_active(None);
        }
    }

    /// Pointer entered a tooth.
    pub fn pointer_enter(&mut self, n: ToothNumber) {
        if let Some(scene) = self.scene.as_mut() {
            scene.pointer_enter(n);
        }
    }

    /// Pointer left a tooth.
    pub fn pointer_leave(&mut self, n: ToothNumber) {
        if let Some(scene) = self.scene.as_mut() {
            scene.pointer_leave(n);
        }
    }

    /// Side-panel summary for the active tooth.
    pub fn active_tooth_detail(&self) -> Option<ToothDetail> {
        let n = self.active_tooth?;
        let tooth = self.teeth.iter().find(|t| t.number == n)?;
        Some(ToothDetail {
            number: tooth.number,
            status: tooth.status,
            restoration: tooth.restoration,
            surfaces: tooth.surfaces.clone(),
            findings: tooth.ai_findings.clone(),
        })
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance the scene's animation by one frame.
    pub fn step(&mut self, dt: f64) {
        if let Some(scene) = self.scene.as_mut() {
            scene.step(dt);
        }
    }

    /// Emit this frame's render list, once the scene is visible.
    pub fn render_list(&self) -> Option<RenderList> {
        self.scene.as_ref().map(ArchScene::render_list)
    }

    // =========================================================================
    // View state
    // =========================================================================

    /// Zoom in one step, clamped to [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        self.zoom
    }

    /// Zoom out one step, clamped to [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
        self.zoom
    }

    /// Rotate the view by one 90° increment.
    pub fn rotate(&mut self) -> i32 {
        self.rotation_deg = (self.rotation_deg + ROTATION_STEP_DEG) % 360;
        self.rotation_deg
    }

    /// The current presentational transform.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            zoom: self.zoom,
            rotation_deg: self.rotation_deg,
        }
    }
}
