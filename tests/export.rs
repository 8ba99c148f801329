use ecgscope::data::export::{save_csv_path, write_csv, CSV_HEADER};
use ecgscope::data::samples::WaveformSample;

fn rows() -> Vec<WaveformSample> {
    vec![
        WaveformSample {
            time: 0.0,
            voltage: 0.5,
        },
        WaveformSample {
            time: 0.01,
            voltage: 1.7,
        },
        WaveformSample {
            time: 0.02,
            voltage: 0.512345,
        },
    ]
}

#[test]
fn writes_expected_header() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &rows()).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert_eq!(s.lines().next().unwrap(), "Time (s),Voltage (mV)");
    assert_eq!(CSV_HEADER, "Time (s),Voltage (mV)");
}

#[test]
fn one_line_per_sample_at_two_decimals() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &rows()).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 4, "header plus one line per sample");
    assert_eq!(lines[1], "0.00,0.50");
    assert_eq!(lines[2], "0.01,1.70");
    assert_eq!(lines[3], "0.02,0.51");
}

#[test]
fn round_trip_within_rounding_tolerance() {
    let rows = rows();
    let mut buf = Vec::new();
    write_csv(&mut buf, &rows).unwrap();
    let s = String::from_utf8(buf).unwrap();

    let parsed: Vec<(f64, f64)> = s
        .lines()
        .skip(1)
        .map(|line| {
            let mut it = line.split(',');
            let t: f64 = it.next().unwrap().parse().unwrap();
            let v: f64 = it.next().unwrap().parse().unwrap();
            assert!(it.next().is_none(), "exactly two fields per line");
            (t, v)
        })
        .collect();

    assert_eq!(parsed.len(), rows.len());
    for (row, (t, v)) in rows.iter().zip(parsed) {
        assert!((row.time - t).abs() <= 0.005 + 1e-12);
        assert!((row.voltage - v).abs() <= 0.005 + 1e-12);
    }
}

#[test]
fn empty_rows_still_write_header() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &[]).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().trim_end(), CSV_HEADER);
}

#[test]
fn save_csv_path_creates_file() {
    let path = std::env::temp_dir().join("ecgscope_export_test.csv");
    save_csv_path(&path, &rows()).unwrap();
    let s = std::fs::read_to_string(&path).unwrap();
    assert!(s.starts_with(CSV_HEADER));
    assert_eq!(s.lines().count(), 4);
    let _ = std::fs::remove_file(&path);
}
