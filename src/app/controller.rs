//! Headless page-controller state: selected file, status, result, worker.
//!
//! Everything the UI needs in order to decide what to draw lives here, free
//! of egui, so the gating and transition rules can be tested without a
//! window.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::config::GeneratorConfig;
use crate::data::error::DigitizeError;
use crate::data::generator;
use crate::data::samples::ProcessingResult;
use crate::data::status::ProcessingStatus;

/// State machine over [`ProcessingStatus`]:
///
/// * `Idle` → `Loading` when a file is present and processing is invoked.
/// * `Loading` → `Success` when the worker delivers a result.
/// * `Loading` → `Error` when the worker reports an error or disappears.
///
/// There is no transition back to `Idle`; reprocessing overwrites the prior
/// result.
pub struct ProcessController {
    cfg: GeneratorConfig,
    selected_image: Option<PathBuf>,
    status: ProcessingStatus,
    result: Option<ProcessingResult>,
    pending: Option<Receiver<Result<ProcessingResult, DigitizeError>>>,
}

impl ProcessController {
    pub fn new(cfg: GeneratorConfig) -> Self {
        Self {
            cfg,
            selected_image: None,
            status: ProcessingStatus::Idle,
            result: None,
            pending: None,
        }
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        self.result.as_ref()
    }

    pub fn selected_image(&self) -> Option<&PathBuf> {
        self.selected_image.as_ref()
    }

    /// Accept a validated image path from the upload widget.
    pub fn select_image(&mut self, path: PathBuf) {
        log::info!("selected ECG image: {}", path.display());
        self.selected_image = Some(path);
    }

    /// The process trigger is enabled only when a file is selected and no
    /// run is in flight.
    pub fn can_process(&self) -> bool {
        self.selected_image.is_some() && !self.status.is_loading()
    }

    /// Flip to `Loading` and spawn the digitizer worker. Ignored while the
    /// trigger is disabled.
    pub fn start_processing(&mut self) {
        if !self.can_process() {
            return;
        }
        let Some(image) = self.selected_image.clone() else {
            return;
        };
        self.status = ProcessingStatus::Loading;
        self.pending = Some(generator::spawn_digitizer(self.cfg.clone(), image));
    }

    /// Poll the worker channel once. Called every frame; cheap when idle.
    ///
    /// All worker failures funnel into the plain `Error` status here; the
    /// detail goes to the log, not to the UI.
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(result)) => {
                self.result = Some(result);
                self.status = ProcessingStatus::Success;
                self.pending = None;
            }
            Ok(Err(err)) => {
                log::error!("processing error: {err}");
                self.status = ProcessingStatus::Error;
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("processing error: {}", DigitizeError::WorkerGone);
                self.status = ProcessingStatus::Error;
                self.pending = None;
            }
        }
    }

    /// A run is in flight and the UI should keep repainting to pick it up.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}
