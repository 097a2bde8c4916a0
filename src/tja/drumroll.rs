//! Drumroll stitching
//!
//! The binary format repeats the drumroll note in every slot the roll
//! covers. TJA writes the head once, fills with `0` and closes with `8`.

use crate::konga::notes::marker;
use crate::konga::{Face, NoteSymbol};

/// Builds the TJA note stream of a whole chart
#[derive(Debug, Default)]
pub struct DrumrollStitcher {
    output: Vec<u8>,
    open: Option<Face>,
}

impl DrumrollStitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Face of the drumroll currently running, if any
    pub fn open_drumroll(&self) -> Option<Face> {
        self.open
    }

    /// Number of slots written so far
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Append the next note slot
    pub fn push(&mut self, symbol: NoteSymbol) {
        match symbol {
            NoteSymbol::Drumroll(face) if self.open == Some(face) => {
                self.output.push(marker::EMPTY);
            }
            NoteSymbol::Drumroll(face) => {
                self.close();
                self.output.push(face.drumroll_char());
                self.open = Some(face);
            }
            other => {
                self.close();
                self.output.push(other.tja_char());
            }
        }
    }

    /// End the running drumroll on the last hold slot
    fn close(&mut self) {
        if self.open.take().is_some() {
            if let Some(last) = self.output.last_mut() {
                if *last == marker::EMPTY {
                    *last = marker::DRUMROLL_END;
                }
            }
        }
    }

    /// Close any running drumroll and return the note stream
    pub fn finish(mut self) -> Vec<u8> {
        self.close();
        self.output
    }
}
