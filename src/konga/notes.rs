//! Note byte to TJA symbol mapping

/// Drum face a note is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Right drum (ポン)
    Pon,
    /// Left drum (パ)
    Pa,
    /// Clap (チャ)
    Clap,
    /// Both drums
    Pink,
}

impl Face {
    /// TJA character for a single hit
    pub fn hit_char(self) -> u8 {
        match self {
            Face::Pon => b'1',
            Face::Pa => b'2',
            Face::Pink => b'3',
            Face::Clap => b'4',
        }
    }

    /// TJA character for the head of a drumroll
    pub fn drumroll_char(self) -> u8 {
        match self {
            Face::Pon => b'5',
            Face::Pink => b'6',
            Face::Clap => b'H',
            Face::Pa => b'I',
        }
    }
}

/// A decoded note slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSymbol {
    Empty,
    Hit(Face),
    Drumroll(Face),
    Unknown(u8),
}

/// TJA characters with special meaning
pub mod marker {
    /// Empty slot, also the drumroll hold
    pub const EMPTY: u8 = b'0';
    /// End of a drumroll
    pub const DRUMROLL_END: u8 = b'8';
    /// Stand-in for a note byte that has no mapping
    pub const UNKNOWN: u8 = b'?';
}

impl NoteSymbol {
    /// TJA character written for this symbol
    pub fn tja_char(self) -> u8 {
        match self {
            NoteSymbol::Empty => marker::EMPTY,
            NoteSymbol::Hit(face) => face.hit_char(),
            NoteSymbol::Drumroll(face) => face.drumroll_char(),
            NoteSymbol::Unknown(_) => marker::UNKNOWN,
        }
    }
}

/// Map a raw note byte to its symbol
pub fn note_symbol(code: u8) -> NoteSymbol {
    use Face::*;
    use NoteSymbol::*;

    match code {
        0x00 => Empty,
        0x01..=0x03 => Hit(Pa),
        0x04..=0x06 => Hit(Pon),
        0x0D..=0x0F => Hit(Clap),
        0x10 => Hit(Pink),
        0x12 => Drumroll(Pa),
        0x13 => Drumroll(Pon),
        0x16 => Drumroll(Clap),
        // 0x1D also brings up the hit counter
        0x17 | 0x1D => Drumroll(Pink),
        // Pow block
        0x19 => Hit(Pon),
        // Stop notes
        0x1A => Hit(Pa),
        0x1B => Hit(Clap),
        0x1C => Hit(Pon),
        _ => Unknown(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_table() {
        let chars: Vec<u8> = [0x00, 0x01, 0x04, 0x0D, 0x10, 0x19, 0x1A, 0x1B, 0x1C]
            .iter()
            .map(|&code| note_symbol(code).tja_char())
            .collect();
        assert_eq!(chars, b"021431241");
    }

    #[test]
    fn test_drumroll_table() {
        let chars: Vec<u8> = [0x12, 0x13, 0x16, 0x17, 0x1D]
            .iter()
            .map(|&code| note_symbol(code).tja_char())
            .collect();
        assert_eq!(chars, b"I5H66");
    }

    #[test]
    fn test_unmapped_bytes() {
        for code in [0x07, 0x0C, 0x11, 0x14, 0x15, 0x18, 0x1E, 0xFF] {
            assert_eq!(note_symbol(code), NoteSymbol::Unknown(code));
        }
        assert_eq!(NoteSymbol::Unknown(0xFF).tja_char(), b'?');
    }
}
