/// One digitized point: time in seconds, voltage in millivolts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSample {
    pub time: f64,
    pub voltage: f64,
}

/// Result of one (mock) digitization run.
///
/// `waveform`/`time_stamps` are parallel arrays duplicating the values held
/// in `dataframe`: the chart consumes parallel arrays, the table and the CSV
/// export consume rows. Both views are derived from the same rows in
/// [`ProcessingResult::from_rows`], so `dataframe[i].time == time_stamps[i]`
/// and `dataframe[i].voltage == waveform[i]` for every index.
#[derive(Debug, Clone, Default)]
pub struct ProcessingResult {
    pub waveform: Vec<f64>,
    pub time_stamps: Vec<f64>,
    pub heart_rate: u32,
    pub dataframe: Vec<WaveformSample>,
}

impl ProcessingResult {
    /// Build both representations from a single set of rows.
    pub fn from_rows(dataframe: Vec<WaveformSample>, heart_rate: u32) -> Self {
        let waveform = dataframe.iter().map(|s| s.voltage).collect();
        let time_stamps = dataframe.iter().map(|s| s.time).collect();
        let result = Self {
            waveform,
            time_stamps,
            heart_rate,
            dataframe,
        };
        debug_assert!(result.is_consistent());
        result
    }

    pub fn len(&self) -> usize {
        self.dataframe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataframe.is_empty()
    }

    /// All three representations agree in length and content.
    pub fn is_consistent(&self) -> bool {
        self.waveform.len() == self.time_stamps.len()
            && self.time_stamps.len() == self.dataframe.len()
            && self
                .dataframe
                .iter()
                .enumerate()
                .all(|(i, s)| s.time == self.time_stamps[i] && s.voltage == self.waveform[i])
    }
}
