pub mod converter;
pub mod error;
pub mod konga;
pub mod tja;

pub use converter::{Converter, Options};
pub use error::Error;
