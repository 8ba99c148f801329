//! Drop target / file picker for the ECG image.

use std::path::PathBuf;

use egui::{RichText, Ui};

use crate::data::upload::{self, ACCEPTED_EXTENSIONS};

/// Render the drop target. Returns the picked path when the user chose a
/// file through the native dialog this frame.
///
/// Drag-and-drop arrives through the egui input queue and is consumed by the
/// app each frame; this widget covers the click-to-select path and the
/// visual affordance.
pub fn render_upload(ui: &mut Ui, selected: Option<&PathBuf>) -> Option<PathBuf> {
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(egui_phosphor::regular::UPLOAD_SIMPLE).size(28.0));
                ui.label("Drag & drop an ECG image here, or click to select");
                if let Some(name) = selected
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str())
                {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).strong());
                }
            });
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        pick_image_dialog()
    } else {
        None
    }
}

/// Open the native single-file picker, filtered to the accepted image types.
///
/// The filter already restricts the listing; the extension check still runs
/// on the chosen path so a typed-in name cannot bypass it.
fn pick_image_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("ECG image", &ACCEPTED_EXTENSIONS)
        .pick_file()
        .filter(|path| {
            if upload::is_supported_image(path) {
                true
            } else {
                log::warn!("rejected unsupported file: {}", path.display());
                false
            }
        })
}
