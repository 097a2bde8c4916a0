//! Measure timing reconstruction
//!
//! The binary format only stores, per measure, how many frames the measure
//! lasts and how many frames ahead of the judge mark its line spawns. TJA
//! wants a BPM, a song offset and delays between measures instead.

use super::chart::ChartCommand;
use crate::error::{Error, Result};
use crate::konga::{RawMeasure, FRAME, SPAWN_TO_OFFSET};

/// Largest power of ten an `f64` can hold
const MAX_DIGITS: u32 = 308;

/// Every `f64` at or above 2^52 is already an integer
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `digits` decimal places, ties to even
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.min(MAX_DIGITS) as i32);
    let scaled = value * scale;
    // Adding zero turns -0.0 into 0.0
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_LIMIT {
        return value + 0.0;
    }
    scaled.round_ties_even() / scale + 0.0
}

/// Length of one 4/4 measure in seconds at `bpm`
fn measure_seconds(bpm: f64) -> f64 {
    240.0 / bpm
}

/// Timing settings shared by every measure of a chart
#[derive(Debug, Clone, Copy)]
pub struct TimingOptions {
    pub add_bpm_commands: bool,
    pub add_delay_commands: bool,
    /// Decimal digits used for every displayed or compared value
    pub rounding: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            add_bpm_commands: true,
            add_delay_commands: true,
            rounding: 5,
        }
    }
}

/// Derived timing of one measure
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureTiming {
    pub bpm: f64,
    /// Spawn lead converted to seconds
    pub spawn_offset: f64,
    /// Song offset for the first measure, distance from the previous
    /// measure afterwards
    pub offset: f64,
    /// Gap between the end of the previous measure and this one
    pub delay: Option<f64>,
    pub barline_visible: bool,
    pub commands: Vec<ChartCommand>,
}

/// Carries timing state from one measure to the next
#[derive(Debug, Clone)]
pub struct TimingReconstructor {
    options: TimingOptions,
    measure: usize,
    prev_bpm: Option<f64>,
    prev_spawn_offset: f64,
    barline: bool,
}

impl TimingReconstructor {
    pub fn new(options: TimingOptions) -> Self {
        Self {
            options,
            measure: 0,
            prev_bpm: None,
            prev_spawn_offset: 0.0,
            barline: true,
        }
    }

    /// Seed the tempo the first measure is compared against
    ///
    /// Courses after the first one of a song start from the document BPM,
    /// so a differing tempo gets a `#BPMCHANGE` on their first measure.
    pub fn with_reference_bpm(mut self, bpm: Option<f64>) -> Self {
        self.prev_bpm = bpm;
        self
    }

    /// Whether the first measure's BPM becomes the document BPM
    pub fn reports_bpm(&self) -> bool {
        self.measure == 0 && self.prev_bpm.is_none()
    }

    /// Number of measures processed so far
    pub fn measure_count(&self) -> usize {
        self.measure
    }

    /// Compute the timing of the next measure
    pub fn next(&mut self, raw: &RawMeasure) -> Result<MeasureTiming> {
        if raw.frames_per_measure == 0 {
            return Err(Error::ZeroLengthMeasure {
                measure: self.measure + 1,
            });
        }
        let digits = self.options.rounding;
        let first = self.measure == 0;

        let bpm = 240.0 / (raw.frames_per_measure as f64 * FRAME);
        let spawn_frames = (raw.spawn_frames as f64 * SPAWN_TO_OFFSET).floor();
        let spawn_offset = spawn_frames.max(2.0) * FRAME;

        let mut commands = Vec::new();

        if let Some(prev_bpm) = self.prev_bpm {
            if self.options.add_bpm_commands && round_to(prev_bpm, digits) != round_to(bpm, digits)
            {
                commands.push(ChartCommand::BpmChange(round_to(bpm, digits)));
            }
        }

        let (offset, delay) = match self.prev_bpm.filter(|_| !first) {
            None => (spawn_offset + measure_seconds(bpm), None),
            Some(prev_bpm) => {
                let offset = spawn_offset + measure_seconds(bpm)
                    - self.prev_spawn_offset
                    - measure_seconds(prev_bpm);
                (offset, Some(offset - measure_seconds(prev_bpm)))
            }
        };

        if let Some(delay) = delay {
            let rounded = round_to(delay, digits);
            if self.options.add_delay_commands && rounded != 0.0 {
                commands.push(ChartCommand::Delay(rounded));
            }
        }

        if self.barline != raw.show_line {
            self.barline = raw.show_line;
            commands.push(if raw.show_line {
                ChartCommand::BarlineOn
            } else {
                ChartCommand::BarlineOff
            });
        }

        self.measure += 1;
        self.prev_bpm = Some(bpm);
        self.prev_spawn_offset = spawn_offset;

        Ok(MeasureTiming {
            bpm,
            spawn_offset,
            offset,
            delay,
            barline_visible: self.barline,
            commands,
        })
    }
}
