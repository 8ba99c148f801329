/// UI-level lifecycle of one processing run.
///
/// The page controller owns every transition; this type only knows how each
/// state presents itself. There is no way back to `Idle` once a run has
/// started, only reprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

impl ProcessingStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, ProcessingStatus::Loading)
    }

    /// Status line shown under the process button. `None` renders nothing.
    pub fn message(self) -> Option<&'static str> {
        match self {
            ProcessingStatus::Loading => Some("Processing ECG..."),
            ProcessingStatus::Error => Some("Processing failed. Try again."),
            ProcessingStatus::Idle | ProcessingStatus::Success => None,
        }
    }
}
