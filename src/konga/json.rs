//! JSON serialization types for decoded charts

use super::notes::{note_symbol, NoteSymbol};
use super::reader::{KongaReader, RawMeasure};
use crate::error::Result;
use crate::tja::{MeasureTiming, TimingOptions, TimingReconstructor};
use serde::Serialize;

/// Top-level JSON structure for a chart file
#[derive(Debug, Clone, Serialize)]
pub struct ChartJson {
    /// Magic number as hex (e.g., "20030730")
    pub magic: String,
    pub measures: Vec<MeasureJson>,
}

/// JSON representation of one measure
#[derive(Debug, Clone, Serialize)]
pub struct MeasureJson {
    /// Byte offset of the record
    pub offset: usize,
    pub spawn_frames: u16,
    pub show_line: bool,
    pub frames_per_measure: u8,
    /// One TJA character per slot, before drumroll stitching
    pub notes: String,
    /// Raw bytes of slots that have no mapping
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<u8>,
    pub bpm: f64,
    /// Song offset for the first measure, distance from the previous one after
    pub offset_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

impl MeasureJson {
    pub fn new(raw: &RawMeasure, timing: &MeasureTiming) -> Self {
        Self {
            offset: raw.offset,
            spawn_frames: raw.spawn_frames,
            show_line: raw.show_line,
            frames_per_measure: raw.frames_per_measure,
            notes: raw
                .notes
                .iter()
                .map(|&code| note_symbol(code).tja_char() as char)
                .collect(),
            unknown: raw
                .notes
                .iter()
                .copied()
                .filter(|&code| matches!(note_symbol(code), NoteSymbol::Unknown(_)))
                .collect(),
            bpm: timing.bpm,
            offset_seconds: timing.offset,
            delay: timing.delay,
        }
    }
}

impl ChartJson {
    pub fn new(magic: u32, measures: Vec<MeasureJson>) -> Self {
        Self {
            magic: format!("{:08x}", magic),
            measures,
        }
    }

    /// Decode a whole chart file
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = KongaReader::new(data);
        let magic = reader.read_magic()?;
        let mut timing = TimingReconstructor::new(TimingOptions::default());
        let mut measures = Vec::new();
        for raw in reader.measures() {
            let raw = raw?;
            let measure = timing.next(&raw)?;
            measures.push(MeasureJson::new(&raw, &measure));
        }
        Ok(Self::new(magic, measures))
    }
}
