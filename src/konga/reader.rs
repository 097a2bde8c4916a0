//! Donkey Konga chart reader

use super::{MAGIC, MEASURE_HEADER_SIZE, NOTES_PER_MEASURE, SENTINEL_SPAWN};
use crate::error::{Error, Result};

/// One measure record as stored in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMeasure {
    /// Byte offset of the record in the file
    pub offset: usize,
    /// Frames between the measure line spawning and reaching the judge mark
    pub spawn_frames: u16,
    pub show_line: bool,
    pub frames_per_measure: u8,
    pub notes: [u8; NOTES_PER_MEASURE],
}

impl RawMeasure {
    /// File offset of a note slot
    pub fn note_offset(&self, slot: usize) -> usize {
        self.offset + MEASURE_HEADER_SIZE + slot
    }
}

/// Chart reader over a loaded file
pub struct KongaReader<'a> {
    data: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> KongaReader<'a> {
    /// Create a new reader from raw chart data
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            finished: false,
        }
    }

    /// Check if we've reached the end of data
    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the current position
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn truncated(&self) -> Error {
        Error::Truncated { offset: self.pos }
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = *self.data.get(self.pos).ok_or_else(|| self.truncated())?;
        self.pos += 1;
        Ok(b)
    }

    /// Read a 16-bit big-endian value
    pub fn read_u16_be(&mut self) -> Result<u16> {
        let hi = self.read_u8()? as u16;
        let lo = self.read_u8()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Read a 32-bit big-endian value
    pub fn read_u32_be(&mut self) -> Result<u32> {
        let hi = self.read_u16_be()? as u32;
        let lo = self.read_u16_be()? as u32;
        Ok((hi << 16) | lo)
    }

    /// Read a fixed number of bytes
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| self.truncated())?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos += N;
        Ok(out)
    }

    /// Read the magic number and check it against `MAGIC`
    pub fn read_magic(&mut self) -> Result<u32> {
        let magic = self.read_u32_be()?;
        if magic != MAGIC {
            return Err(Error::BadMagic { found: magic });
        }
        Ok(magic)
    }

    /// Read the next measure record
    ///
    /// Returns `None` at the sentinel record or when the data ends on a
    /// record boundary.
    pub fn next_measure(&mut self) -> Result<Option<RawMeasure>> {
        if self.finished || self.is_eof() {
            return Ok(None);
        }

        // Truncation is reported at the start of the record
        let offset = self.pos;
        if self.remaining() < MEASURE_HEADER_SIZE {
            return Err(Error::Truncated { offset });
        }
        let spawn_frames = self.read_u16_be()?;
        let show_line = self.read_u8()?;
        let frames_per_measure = self.read_u8()?;
        if spawn_frames == SENTINEL_SPAWN {
            self.finished = true;
            return Ok(None);
        }
        if self.remaining() < NOTES_PER_MEASURE {
            return Err(Error::Truncated { offset });
        }
        let notes = self.read_array::<NOTES_PER_MEASURE>()?;

        Ok(Some(RawMeasure {
            offset,
            spawn_frames,
            show_line: show_line != 0,
            frames_per_measure,
            notes,
        }))
    }

    /// Iterate over the remaining measure records
    pub fn measures(&mut self) -> Measures<'_, 'a> {
        Measures { reader: self }
    }
}

/// Iterator returned by [`KongaReader::measures`]
pub struct Measures<'r, 'a> {
    reader: &'r mut KongaReader<'a>,
}

impl Iterator for Measures<'_, '_> {
    type Item = Result<RawMeasure>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.next_measure() {
            Ok(Some(measure)) => Some(Ok(measure)),
            Ok(None) => None,
            Err(e) => {
                self.reader.finished = true;
                Some(Err(e))
            }
        }
    }
}
