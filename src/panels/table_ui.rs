//! Scrollable time/voltage table over the digitized samples.

use egui::Ui;
use egui_table::{Column, HeaderRow, Table, TableDelegate};

use crate::data::samples::WaveformSample;

const HEADER_H: f32 = 24.0;
const ROW_H: f32 = 20.0;
const MAX_TABLE_H: f32 = 400.0;

struct SamplesDelegate<'a> {
    rows: &'a [WaveformSample],
    col_w: [f32; 2],
}

impl<'a> TableDelegate for SamplesDelegate<'a> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let col = cell.col_range.start;
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(self.col_w[col], HEADER_H), egui::Sense::hover());
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
            |inner| {
                inner.add_space(4.0);
                inner.strong(match col {
                    0 => "Time (s)",
                    _ => "Voltage (mV)",
                });
            },
        );
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let row = cell.row_nr as usize;
        let col = cell.col_nr;
        let Some(sample) = self.rows.get(row) else {
            return;
        };
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(self.col_w[col], ROW_H), egui::Sense::hover());
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
            |inner| {
                inner.add_space(4.0);
                let value = match col {
                    0 => sample.time,
                    _ => sample.voltage,
                };
                inner.monospace(format!("{value:.4}"));
            },
        );
    }
}

/// Render one row per sample, both fields at four-decimal precision, inside
/// a vertically scrolling table with a fixed header row.
pub fn render_table(ui: &mut Ui, rows: &[WaveformSample]) {
    let avail_w = ui.available_width();
    let half = (avail_w * 0.5).max(80.0);
    let col_w = [half, half];
    let table_h = (HEADER_H + ROW_H * rows.len() as f32 + 8.0).min(MAX_TABLE_H);

    let (rect, _resp) = ui.allocate_exact_size(egui::vec2(avail_w, table_h), egui::Sense::hover());
    let mut table_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min)),
    );
    let mut delegate = SamplesDelegate { rows, col_w };
    Table::new()
        .id_salt("ecg_samples_table")
        .num_rows(rows.len() as u64)
        .columns(vec![Column::new(col_w[0]), Column::new(col_w[1])])
        .headers(vec![HeaderRow::new(HEADER_H)])
        .show(&mut table_ui, &mut delegate);
}
