//! Donkey Konga to TJA conversion
//!
//! Each input file becomes one course. Files are sorted so that the courses
//! of a song are converted back to back and collected into one document.

pub mod files;

use crate::error::{Error, Result};
use crate::konga::{
    note_symbol, read_chart_file, KongaReader, NoteSymbol, RawMeasure, FRAME, NOTES_PER_MEASURE,
    SPAWN_TO_OFFSET,
};
use crate::tja::timing::round_to;
use crate::tja::{
    compress, Chart, ChartBody, ChartCommand, ChartLine, Course, DrumrollStitcher, MeasureTiming,
    SongDocument, TimingOptions, TimingReconstructor,
};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

/// Conversion settings
#[derive(Debug, Clone)]
pub struct Options {
    /// Keep going past unknown notes and bad magic numbers
    pub force: bool,
    /// Convert without writing any file
    pub dry_run: bool,
    /// Add per-measure timing comments and source file names
    pub verbose: bool,
    pub add_bpm_commands: bool,
    pub add_delay_commands: bool,
    /// Decimal digits used when rounding timing values
    pub rounding: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            force: false,
            dry_run: false,
            verbose: false,
            add_bpm_commands: true,
            add_delay_commands: true,
            rounding: 5,
        }
    }
}

impl Options {
    fn timing(&self) -> TimingOptions {
        TimingOptions {
            add_bpm_commands: self.add_bpm_commands,
            add_delay_commands: self.add_delay_commands,
            rounding: self.rounding,
        }
    }
}

/// Main converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub options: Options,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Comment describing a measure's raw timing
    fn timing_comment(number: usize, raw: &RawMeasure, timing: &MeasureTiming) -> ChartCommand {
        let spawn = (raw.spawn_frames as f64 * SPAWN_TO_OFFSET).floor() * FRAME;
        ChartCommand::Comment(format!(
            " #{}, spawn: {}s, offset: {}s, measure: {} frames",
            number,
            round_to(spawn, 3),
            round_to(timing.offset, 3),
            raw.frames_per_measure
        ))
    }

    /// Convert a loaded chart file
    ///
    /// `reference_bpm` is the tempo already set by an earlier course of the
    /// same song.
    pub fn convert_chart(&self, data: &[u8], reference_bpm: Option<f64>) -> Result<Chart> {
        let options = &self.options;
        let mut reader = KongaReader::new(data);
        let mut chart = Chart::default();

        match reader.read_magic() {
            Ok(_) => {}
            Err(Error::BadMagic { found }) if options.force => {
                warn!("Magic does not match: {:x}", found);
                chart
                    .body
                    .comments
                    .push(ChartCommand::Comment(format!("magic {:x}", found)));
                return Ok(chart);
            }
            Err(e) => return Err(e),
        }

        let mut timing = TimingReconstructor::new(options.timing()).with_reference_bpm(reference_bpm);
        let reports_bpm = timing.reports_bpm();
        let mut stitcher = DrumrollStitcher::new();
        // Commands of each measure, waiting for its stitched notes
        let mut pending: Vec<Vec<ChartCommand>> = Vec::new();

        for raw in reader.measures() {
            let raw = raw?;
            let number = timing.measure_count() + 1;
            let measure = timing.next(&raw)?;
            debug!(
                "Measure #{} at {:x}: bpm {}, offset {}s",
                number, raw.offset, measure.bpm, measure.offset
            );

            if number == 1 {
                if reports_bpm {
                    chart.bpm = Some(round_to(measure.bpm, options.rounding));
                }
                chart.offset = Some(round_to(-measure.offset, options.rounding));
            }

            let mut commands = measure.commands.clone();
            if options.verbose {
                commands.push(Self::timing_comment(number, &raw, &measure));
            }

            for (slot, &code) in raw.notes.iter().enumerate() {
                let symbol = note_symbol(code);
                if let NoteSymbol::Unknown(code) = symbol {
                    let offset = raw.note_offset(slot);
                    warn!("Unknown note {:x} at offset {:x}", code, offset);
                    commands.push(ChartCommand::Comment(format!(
                        "unknown note {:x} at offset {:x}",
                        code, offset
                    )));
                    if !options.force {
                        return Err(Error::UnknownNoteCode { code, offset });
                    }
                }
                stitcher.push(symbol);
            }

            pending.push(commands);
        }

        // A drumroll may end on the last slot of an earlier measure, so the
        // note stream is only split once every measure is stitched.
        let notes = stitcher.finish();
        chart.body = ChartBody {
            comments: Vec::new(),
            lines: pending
                .into_iter()
                .zip(notes.chunks(NOTES_PER_MEASURE))
                .map(|(commands, notes)| ChartLine {
                    commands,
                    notes: compress(notes),
                })
                .collect(),
        };

        Ok(chart)
    }

    /// Convert one input file into a course
    pub fn convert_file(&self, path: &Path, reference_bpm: Option<f64>) -> Result<Course> {
        let data = read_chart_file(path)?;
        let chart = self.convert_chart(&data, reference_bpm)?;
        Ok(Course {
            difficulty: files::difficulty(path),
            source: path.to_path_buf(),
            chart,
        })
    }

    /// Write a finished document unless it is empty or this is a dry run
    fn flush(&self, doc: SongDocument, done: &mut Vec<SongDocument>) -> Result<()> {
        if doc.is_empty() {
            warn!("No course of {} could be converted", doc.path.display());
            return Ok(());
        }
        if !self.options.dry_run {
            doc.save(self.options.verbose)?;
            info!("Wrote {}", doc.path.display());
        }
        done.push(doc);
        Ok(())
    }

    /// Convert every input file, merging courses of the same song
    ///
    /// Returns the finished documents in output order. Files that fail to
    /// convert are logged and skipped.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<Vec<SongDocument>> {
        let mut inputs = inputs.to_vec();
        files::sort_files(&mut inputs);

        let mut done = Vec::new();
        let mut current: Option<SongDocument> = None;

        for path in &inputs {
            info!("{}", path.display());
            let output = files::output_path(path);

            let doc = match current.take() {
                Some(doc) if doc.path == output => current.insert(doc),
                previous => {
                    if let Some(doc) = previous {
                        self.flush(doc, &mut done)?;
                    }
                    let title = files::title(&output);
                    current.insert(SongDocument::new(output, &title))
                }
            };
            match self.convert_file(path, doc.bpm) {
                Ok(course) => doc.add_course(course),
                Err(e) => error!("{}: {}", path.display(), e),
            }
        }

        if let Some(doc) = current {
            self.flush(doc, &mut done)?;
        }

        Ok(done)
    }
}
