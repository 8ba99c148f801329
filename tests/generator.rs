use ecgscope::config::GeneratorConfig;
use ecgscope::data::generator::generate;
use ecgscope::data::samples::{ProcessingResult, WaveformSample};

fn small_cfg() -> GeneratorConfig {
    GeneratorConfig {
        samples: 120,
        ..GeneratorConfig::default()
    }
}

#[test]
fn representations_have_equal_length() {
    let r = generate(&small_cfg());
    assert_eq!(r.waveform.len(), r.time_stamps.len());
    assert_eq!(r.time_stamps.len(), r.dataframe.len());
    assert_eq!(r.len(), 120);
}

#[test]
fn dataframe_mirrors_parallel_arrays() {
    let r = generate(&small_cfg());
    for (i, s) in r.dataframe.iter().enumerate() {
        assert_eq!(s.time, r.time_stamps[i]);
        assert_eq!(s.voltage, r.waveform[i]);
    }
    assert!(r.is_consistent());
}

#[test]
fn timestamps_evenly_spaced() {
    let cfg = small_cfg();
    let r = generate(&cfg);
    for (i, &t) in r.time_stamps.iter().enumerate() {
        assert!(
            (t - i as f64 * cfg.sample_interval_secs).abs() < 1e-12,
            "timestamp {i} is {t}, expected {}",
            i as f64 * cfg.sample_interval_secs
        );
    }
}

#[test]
fn heart_rate_in_configured_range() {
    let cfg = small_cfg();
    for _ in 0..50 {
        let r = generate(&cfg);
        assert!(
            r.heart_rate >= cfg.hr_min && r.heart_rate <= cfg.hr_max,
            "heart rate {} outside {}..={}",
            r.heart_rate,
            cfg.hr_min,
            cfg.hr_max
        );
    }
}

#[test]
fn waveform_shape_without_noise() {
    let cfg = GeneratorConfig {
        samples: 100,
        noise_amplitude_mv: 0.0,
        ..GeneratorConfig::default()
    };
    let r = generate(&cfg);
    assert_eq!(r.waveform[0], cfg.baseline_mv + cfg.peak_mv);
    assert_eq!(r.waveform[50], cfg.baseline_mv + cfg.peak_mv);
    assert_eq!(r.waveform[25], cfg.baseline_mv + cfg.bump_mv);
    assert_eq!(r.waveform[75], cfg.baseline_mv + cfg.bump_mv);
    assert_eq!(r.waveform[1], cfg.baseline_mv);
    assert_eq!(r.waveform[49], cfg.baseline_mv);
}

#[test]
fn noise_stays_within_amplitude() {
    let cfg = small_cfg();
    let r = generate(&cfg);
    for (i, &v) in r.waveform.iter().enumerate() {
        let shape = if i % cfg.peak_period == 0 {
            cfg.peak_mv
        } else if i % cfg.peak_period == cfg.bump_offset {
            cfg.bump_mv
        } else {
            0.0
        };
        let centre = cfg.baseline_mv + shape;
        assert!(
            (v - centre).abs() <= cfg.noise_amplitude_mv,
            "sample {i} strayed to {v}, centre {centre}"
        );
    }
}

#[test]
fn from_rows_derives_consistent_views() {
    let rows = vec![
        WaveformSample {
            time: 0.0,
            voltage: 0.5,
        },
        WaveformSample {
            time: 0.01,
            voltage: 1.7,
        },
    ];
    let r = ProcessingResult::from_rows(rows, 72);
    assert_eq!(r.waveform, vec![0.5, 1.7]);
    assert_eq!(r.time_stamps, vec![0.0, 0.01]);
    assert_eq!(r.heart_rate, 72);
    assert!(r.is_consistent());
    assert!(!r.is_empty());
}
