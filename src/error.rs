use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Magic does not match: {found:x}")]
    BadMagic { found: u32 },

    #[error("Measure #{measure} has zero frames per measure")]
    ZeroLengthMeasure { measure: usize },

    #[error("Unknown note {code:x} at offset {offset:x}")]
    UnknownNoteCode { code: u8, offset: usize },

    #[error("Truncated measure record at offset {offset:x}")]
    Truncated { offset: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
