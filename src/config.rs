//! Configuration types shared across the ECG demo UI.

use std::time::Duration;

/// Shape and timing of the synthetic waveform produced by the mock digitizer.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of samples per run.
    pub samples: usize,
    /// Spacing between consecutive timestamps, in seconds.
    pub sample_interval_secs: f64,
    /// Resting voltage between peaks, in millivolts.
    pub baseline_mv: f64,
    /// Height of the large periodic peak above the baseline (QRS-like).
    pub peak_mv: f64,
    /// Height of the small bump between peaks (P-wave-like).
    pub bump_mv: f64,
    /// Uniform noise is drawn from `-noise_amplitude_mv..noise_amplitude_mv`.
    /// Zero disables noise entirely.
    pub noise_amplitude_mv: f64,
    /// A large peak occurs every `peak_period` samples.
    pub peak_period: usize,
    /// The small bump sits this many samples after each large peak.
    pub bump_offset: usize,
    /// Heart rate is drawn uniformly from `hr_min..=hr_max` (BPM).
    pub hr_min: u32,
    pub hr_max: u32,
    /// Simulated processing time before the worker reports its result.
    pub processing_delay: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 300,
            sample_interval_secs: 0.01,
            baseline_mv: 0.5,
            peak_mv: 1.2,
            bump_mv: 0.3,
            noise_amplitude_mv: 0.1,
            peak_period: 50,
            bump_offset: 25,
            hr_min: 60,
            hr_max: 89,
            processing_delay: Duration::from_millis(1500),
        }
    }
}

/// Top-level configuration for the demo application.
pub struct EcgScopeConfig {
    /// Native window title.
    pub title: String,
    /// Headline rendered at the top of the page.
    pub heading: String,
    /// Default file name offered by the CSV save dialog.
    pub export_file_name: String,
    /// Mock digitizer parameters.
    pub generator: GeneratorConfig,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for EcgScopeConfig {
    fn default() -> Self {
        Self {
            title: "ECG Digitization Tool".to_string(),
            heading: "ECG Digitization Tool".to_string(),
            export_file_name: "ecg_data.csv".to_string(),
            generator: GeneratorConfig::default(),
            native_options: None,
        }
    }
}
