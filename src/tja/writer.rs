//! TJA document writer

use super::chart::{format_number, Chart};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Course difficulty, taken from the `_h`/`_n`/`_e` file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Hard,
    Normal,
    Easy,
    Unspecified,
}

impl Difficulty {
    /// Value of the `COURSE:` field
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Hard => "Hard",
            Difficulty::Normal => "Normal",
            Difficulty::Easy => "Easy",
            Difficulty::Unspecified => "",
        }
    }
}

/// One converted input file
#[derive(Debug, Clone)]
pub struct Course {
    pub difficulty: Difficulty,
    /// Input file the course came from
    pub source: PathBuf,
    pub chart: Chart,
}

/// A song with every course converted for it
#[derive(Debug, Clone)]
pub struct SongDocument {
    /// Where the document is written
    pub path: PathBuf,
    pub title: String,
    pub subtitle: String,
    pub wave: String,
    pub bpm: Option<f64>,
    pub offset: Option<f64>,
    pub courses: Vec<Course>,
}

impl SongDocument {
    pub fn new(path: PathBuf, title: &str) -> Self {
        Self {
            path,
            title: title.to_string(),
            subtitle: "--".to_string(),
            wave: format!("{}.ogg", title),
            bpm: None,
            offset: None,
            courses: Vec::new(),
        }
    }

    /// Append a course
    ///
    /// The first course that knows its BPM or offset sets them for the whole
    /// document.
    pub fn add_course(&mut self, course: Course) {
        if self.bpm.is_none() {
            self.bpm = course.chart.bpm;
        }
        if self.offset.is_none() {
            self.offset = course.chart.offset;
        }
        self.courses.push(course);
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Render the whole document
    pub fn render(&self, verbose: bool) -> String {
        let mut writer = TjaWriter::new(Vec::new(), verbose);
        // Writing into a Vec cannot fail
        let _ = writer.write_document(self);
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }

    /// Write the document to its path
    pub fn save(&self, verbose: bool) -> Result<()> {
        let mut writer = TjaWriter::create(&self.path, verbose)?;
        writer.write_document(self)?;
        writer.finish()
    }
}

/// Streams TJA text to any writer
pub struct TjaWriter<W: Write> {
    out: W,
    /// Add a comment naming each course's source file
    verbose: bool,
}

impl TjaWriter<BufWriter<File>> {
    /// Create a writer for a new file
    pub fn create(path: &Path, verbose: bool) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), verbose))
    }
}

impl<W: Write> TjaWriter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Write the song header
    pub fn write_header(&mut self, doc: &SongDocument) -> Result<()> {
        let bpm = doc.bpm.map(format_number).unwrap_or_default();
        let offset = doc
            .offset
            .map(format_number)
            .unwrap_or_else(|| "-0".to_string());

        writeln!(self.out, "TITLE:{}", doc.title)?;
        writeln!(self.out, "SUBTITLE:{}", doc.subtitle)?;
        writeln!(self.out, "BPM:{}", bpm)?;
        writeln!(self.out, "WAVE:{}", doc.wave)?;
        writeln!(self.out, "OFFSET:{}", offset)?;
        writeln!(self.out, "DEMOSTART:0")?;
        writeln!(self.out, "GAME:Bongo")?;
        Ok(())
    }

    /// Write one course block, preceded by a blank line
    pub fn write_course(&mut self, course: &Course) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "COURSE:{}", course.difficulty.label())?;
        writeln!(self.out, "LEVEL:")?;
        writeln!(self.out, "BALLOON:")?;
        writeln!(self.out, "SCOREINIT:")?;
        writeln!(self.out, "SCOREDIFF:")?;
        writeln!(self.out)?;
        if self.verbose {
            writeln!(self.out, "//{}", course.source.display())?;
        }
        writeln!(self.out, "#START")?;
        writeln!(self.out, "#GAMETYPE Konga")?;
        writeln!(self.out, "{}", course.chart.body)?;
        writeln!(self.out, "#END")?;
        Ok(())
    }

    /// Write the header followed by every course
    pub fn write_document(&mut self, doc: &SongDocument) -> Result<()> {
        self.write_header(doc)?;
        for course in &doc.courses {
            self.write_course(course)?;
        }
        Ok(())
    }

    /// Flush buffered output
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
