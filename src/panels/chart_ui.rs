use egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::samples::ProcessingResult;

/// Label attached to the single chart series.
pub const TRACE_LABEL: &str = "ECG Waveform (mV)";

/// Render the waveform as a single-series line chart.
///
/// Timestamps and voltages are zipped positionally; the shorter array wins.
pub fn render_chart(ui: &mut Ui, result: &ProcessingResult) {
    let points: PlotPoints = result
        .time_stamps
        .iter()
        .zip(result.waveform.iter())
        .map(|(&t, &v)| [t, v])
        .collect();
    Plot::new("ecg_plot")
        .height(300.0)
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_label("Time (s)")
        .y_axis_label("Voltage (mV)")
        .x_axis_formatter(|x, _range| format!("{:.2}", x.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(TRACE_LABEL, points));
        });
}
