//! Data layer: sample types, the mock digitizer, acceptance rules, and
//! CSV export. Everything here is free of egui and unit-testable.

pub mod error;
pub mod export;
pub mod generator;
pub mod samples;
pub mod status;
pub mod upload;
