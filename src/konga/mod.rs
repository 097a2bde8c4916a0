//! Donkey Konga binary chart format

pub mod json;
pub mod notes;
pub mod reader;

pub use json::ChartJson;
pub use notes::{note_symbol, Face, NoteSymbol};
pub use reader::{KongaReader, RawMeasure};

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// File identifier at offset 0 (big-endian)
pub const MAGIC: u32 = 0x2003_0730;

/// Note slots in every measure record
pub const NOTES_PER_MEASURE: usize = 48;

/// Header size of a measure record (spawn u16, show line u8, frames u8)
pub const MEASURE_HEADER_SIZE: usize = 4;

/// Full size of a measure record
pub const MEASURE_RECORD_SIZE: usize = MEASURE_HEADER_SIZE + NOTES_PER_MEASURE;

/// Spawn frame value that terminates the measure list
pub const SENTINEL_SPAWN: u16 = 0xFFFF;

/// Duration of one frame in seconds
pub const FRAME: f64 = 1.0 / 60.0;

/// Converts spawn lead frames into frames of audio offset
pub const SPAWN_TO_OFFSET: f64 = 0.6095;

/// Read a chart file, decompressing it if it is gzipped
pub fn read_chart_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open '{}': {}", path.display(), e))
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    if data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b {
        let mut decoder = GzDecoder::new(Cursor::new(data));
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    } else {
        Ok(data)
    }
}
