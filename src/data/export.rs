use std::io::Write;
use std::path::Path;

use crate::data::samples::WaveformSample;

/// CSV header written before the sample rows.
pub const CSV_HEADER: &str = "Time (s),Voltage (mV)";

/// Write the sample rows as CSV: header plus one line per sample, both
/// fields at two-decimal precision. Fields are purely numeric, so no quoting
/// or escaping is required.
pub fn write_csv<W: Write>(mut w: W, rows: &[WaveformSample]) -> std::io::Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(w, "{:.2},{:.2}", row.time, row.voltage)?;
    }
    Ok(())
}

/// Create `path` and write the rows into it.
pub fn save_csv_path<P: AsRef<Path>>(path: P, rows: &[WaveformSample]) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    write_csv(f, rows)
}
