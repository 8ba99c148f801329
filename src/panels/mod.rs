//! The individual page widgets. Each panel is a thin rendering layer over
//! state owned by the page controller or carried in the processing result.

pub mod chart_ui;
pub mod export_ui;
pub mod status_ui;
pub mod table_ui;
pub mod upload_ui;
