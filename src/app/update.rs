//! Per-frame update: input intake, worker polling, page layout.

use std::time::Duration;

use eframe::egui;

use crate::data::upload;
use crate::panels::{chart_ui, export_ui, status_ui, table_ui, upload_ui};

use super::EcgApp;

impl eframe::App for EcgApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Files dropped anywhere on the window select the ECG image.
        let dropped: Vec<std::path::PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            match upload::first_accepted(&dropped) {
                Ok(path) => self.controller.select_image(path),
                Err(err) => log::warn!("ignored drop: {err}"),
            }
        }

        // Pick up a finished (or failed) run.
        self.controller.poll();
        if self.controller.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_page(ui));
        });
    }
}

impl EcgApp {
    /// Compose the page: heading, upload target, process trigger, status,
    /// then the result section (heart rate, chart, table, export).
    fn render_page(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(&self.cfg.heading);
            ui.add_space(12.0);
        });

        if let Some(path) = upload_ui::render_upload(ui, self.controller.selected_image()) {
            self.controller.select_image(path);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let label = if self.controller.status().is_loading() {
                "Processing..."
            } else {
                "Process ECG"
            };
            let button = egui::Button::new(label).min_size(egui::vec2(160.0, 32.0));
            if ui.add_enabled(self.controller.can_process(), button).clicked() {
                self.controller.start_processing();
            }
        });

        status_ui::render_status(ui, self.controller.status());

        // Chart, table, and export all render from the same stored result.
        let Some(result) = self.controller.result() else {
            return;
        };

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("Heart Rate: {} BPM", result.heart_rate))
                    .size(18.0)
                    .strong()
                    .color(egui::Color32::from_rgb(0xe7, 0x4c, 0x3c)),
            );
        });
        ui.add_space(8.0);
        chart_ui::render_chart(ui, result);
        ui.add_space(16.0);
        table_ui::render_table(ui, &result.dataframe);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            export_ui::render_export(ui, &result.dataframe, &self.cfg.export_file_name);
        });
        ui.add_space(12.0);
    }
}
