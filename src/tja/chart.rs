//! TJA chart body

use std::fmt;

/// Separator written after every measure's notes
pub const MEASURE_END: char = ',';

/// A line placed before a measure's notes
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCommand {
    BpmChange(f64),
    Delay(f64),
    BarlineOff,
    BarlineOn,
    /// Free text written after `//`
    Comment(String),
}

impl fmt::Display for ChartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartCommand::BpmChange(bpm) => write!(f, "#BPMCHANGE {}", bpm),
            ChartCommand::Delay(seconds) => write!(f, "#DELAY {}", seconds),
            ChartCommand::BarlineOff => f.write_str("#BARLINEOFF"),
            ChartCommand::BarlineOn => f.write_str("#BARLINEON"),
            ChartCommand::Comment(text) => write!(f, "//{}", text),
        }
    }
}

/// Commands and notes of one measure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLine {
    pub commands: Vec<ChartCommand>,
    /// Compressed notes, empty for a silent measure
    pub notes: String,
}

impl fmt::Display for ChartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        write!(f, "{}{}", self.notes, MEASURE_END)
    }
}

/// Everything between `#START` and `#END`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartBody {
    /// Diagnostics about the file as a whole
    pub comments: Vec<ChartCommand>,
    pub lines: Vec<ChartLine>,
}

impl ChartBody {
    /// Lines in measure order
    pub fn measures(&self) -> &[ChartLine] {
        &self.lines
    }
}

impl fmt::Display for ChartBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comments = self.comments.iter().map(ToString::to_string);
        let lines = self.lines.iter().map(ToString::to_string);
        for (i, text) in comments.chain(lines).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&text)?;
        }
        Ok(())
    }
}

/// A converted chart file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    /// Tempo of the first measure, unless it was measured against a
    /// reference tempo
    pub bpm: Option<f64>,
    /// Song offset (negative seconds) from the first measure
    pub offset: Option<f64>,
    pub body: ChartBody,
}

/// Format a timing value the way TJA headers expect it
pub fn format_number(value: f64) -> String {
    // -0.0 prints as "-0"
    format!("{}", value + 0.0)
}
