pub mod chart;
pub mod compress;
pub mod drumroll;
pub mod timing;
pub mod writer;

pub use chart::{Chart, ChartBody, ChartCommand, ChartLine};
pub use compress::compress;
pub use drumroll::DrumrollStitcher;
pub use timing::{MeasureTiming, TimingOptions, TimingReconstructor};
pub use writer::{Course, Difficulty, SongDocument, TjaWriter};
