//! Donkey Konga chart to JSON dumper

use clap::Parser;
use konga2tja::konga::{read_chart_file, ChartJson};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "konga2json")]
#[command(version = "0.1.0")]
#[command(about = "Dump Donkey Konga bin files as JSON", long_about = None)]
struct Args {
    /// Input bin file (may be gzipped)
    input: PathBuf,

    /// Output JSON file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let data = read_chart_file(&args.input)?;
    let chart = ChartJson::decode(&data)?;

    let json_string = if args.compact {
        serde_json::to_string(&chart)?
    } else {
        serde_json::to_string_pretty(&chart)?
    };

    match args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json_string.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => {
            println!("{}", json_string);
        }
    }

    Ok(())
}
