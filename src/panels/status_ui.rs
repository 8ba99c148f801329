use egui::{Color32, Ui};

use crate::data::status::ProcessingStatus;

/// Visual state for the current status. Pure markup; all transitions are
/// owned by the page controller.
pub fn render_status(ui: &mut Ui, status: ProcessingStatus) {
    let Some(message) = status.message() else {
        return;
    };
    ui.vertical_centered(|ui| {
        ui.add_space(4.0);
        match status {
            ProcessingStatus::Loading => {
                ui.add(egui::Spinner::new());
                ui.label(message);
            }
            ProcessingStatus::Error => {
                ui.colored_label(Color32::from_rgb(0xe7, 0x4c, 0x3c), message);
            }
            ProcessingStatus::Idle | ProcessingStatus::Success => {}
        }
    });
}
