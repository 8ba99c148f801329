//! ECGScope crate root: re-exports and module wiring.
//!
//! A desktop demonstration interface for an ECG-image-to-waveform
//! digitization tool, built on egui/eframe. The processing step is a stub:
//! it fabricates an ECG-like waveform and never reads the selected image.
//!
//! Module map:
//! - `data`: sample types, the mock digitizer, acceptance rules, CSV export
//! - `panels`: the individual page widgets (upload, chart, table, status, export)
//! - `app`: page controller and the eframe application shell
//! - `config`: shared configuration

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_app, EcgApp, ProcessController};
pub use config::{EcgScopeConfig, GeneratorConfig};
pub use data::error::{DigitizeError, UploadError};
pub use data::samples::{ProcessingResult, WaveformSample};
pub use data::status::ProcessingStatus;
