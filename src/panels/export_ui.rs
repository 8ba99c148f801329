use egui::Ui;

use crate::data::export;
use crate::data::samples::WaveformSample;

/// "Download CSV" button: choose a destination (pre-filled with the default
/// file name) and write the rows. Write failures go to the log only.
pub fn render_export(ui: &mut Ui, rows: &[WaveformSample], default_file_name: &str) {
    let label = format!("{} Download CSV", egui_phosphor::regular::DOWNLOAD_SIMPLE);
    if ui.button(label).clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(default_file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            if let Err(e) = export::save_csv_path(&path, rows) {
                log::error!("failed to export CSV: {e}");
            } else {
                log::info!("saved ECG data to {}", path.display());
            }
        }
    }
}
