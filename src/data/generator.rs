//! Mock digitizer: synthesizes an ECG-like waveform for any input image.
//!
//! There is no image analysis here. The selected file's bytes are never
//! read; every run fabricates a fresh waveform from the closed-form pattern
//! below plus unseeded noise, so two runs over the same image differ.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::data::error::DigitizeError;
use crate::data::samples::{ProcessingResult, WaveformSample};

/// Synthesize one run worth of data.
///
/// Every `peak_period`-th sample carries the large peak, the sample
/// `bump_offset` positions later carries the small bump, everything else
/// sits at the baseline. All samples get uniform noise on top.
pub fn generate(cfg: &GeneratorConfig) -> ProcessingResult {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(cfg.samples);
    for i in 0..cfg.samples {
        let shape = if i % cfg.peak_period == 0 {
            cfg.peak_mv
        } else if i % cfg.peak_period == cfg.bump_offset {
            cfg.bump_mv
        } else {
            0.0
        };
        let noise = if cfg.noise_amplitude_mv > 0.0 {
            rng.gen_range(-cfg.noise_amplitude_mv..cfg.noise_amplitude_mv)
        } else {
            0.0
        };
        rows.push(WaveformSample {
            time: i as f64 * cfg.sample_interval_secs,
            voltage: cfg.baseline_mv + shape + noise,
        });
    }
    let heart_rate = rng.gen_range(cfg.hr_min..=cfg.hr_max);
    ProcessingResult::from_rows(rows, heart_rate)
}

/// Run the mock digitizer on a worker thread.
///
/// Sleeps for the configured delay to imitate real processing, then delivers
/// the result over the returned channel. The receiver is polled by the page
/// controller each frame; dropping it simply detaches the worker.
pub fn spawn_digitizer(
    cfg: GeneratorConfig,
    image: PathBuf,
) -> Receiver<Result<ProcessingResult, DigitizeError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        log::info!("mock processing of ECG image: {}", image.display());
        thread::sleep(cfg.processing_delay);
        let _ = tx.send(Ok(generate(&cfg)));
    });
    rx
}
