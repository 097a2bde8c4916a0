use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "konga2tja")]
#[command(version = "1.1.0")]
#[command(about = "Donkey Konga chart to TJA converter", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Paths to Donkey Konga bin files
    #[arg(value_name = "file.bin", required = true)]
    files: Vec<PathBuf>,

    /// Ignore errors
    #[arg(short, long)]
    force: bool,

    /// Test the parser without writing
    #[arg(long = "dryrun")]
    dry_run: bool,

    /// Print additional information
    #[arg(short, long)]
    verbose: bool,

    /// Add BPM information (default)
    #[arg(long, overrides_with = "no_bpm")]
    bpm: bool,

    /// Remove BPM information
    #[arg(long, overrides_with = "bpm")]
    no_bpm: bool,

    /// Add delay information (default)
    #[arg(long, overrides_with = "no_delay")]
    delay: bool,

    /// Remove delay information
    #[arg(long, overrides_with = "delay")]
    no_delay: bool,

    /// Round numbers to a given precision
    #[arg(long, value_name = "5", default_value_t = 5)]
    rounding: u32,
}

fn main() -> Result<(), konga2tja::Error> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp(None)
        .init();

    let converter = konga2tja::Converter::new(konga2tja::Options {
        force: args.force,
        dry_run: args.dry_run,
        verbose: args.verbose,
        add_bpm_commands: args.bpm || !args.no_bpm,
        add_delay_commands: args.delay || !args.no_delay,
        rounding: args.rounding,
    });

    converter.run(&args.files)?;

    Ok(())
}
