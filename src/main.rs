use anyhow::Context;
use clap::Parser;

use c8vm::Interpreter;

mod app;
mod keymap;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// ROM file to load
    #[clap(value_parser)]
    filename: String,

    /// Emulated cycles per second
    #[clap(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    speed: u32,

    /// Window pixels per chip-8 pixel
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Fixed seed for the random number generator
    #[clap(long, value_parser)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<(), anyhow::Error> {
    // parse command-line arguments
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // read the rom and build the interpreter
    let rom = std::fs::read(&cli.filename)
        .with_context(|| format!("error opening rom file: {}", &cli.filename))?;

    let mut emu = match cli.seed {
        Some(seed) => Interpreter::with_seed(seed),
        None => Interpreter::new(),
    };
    emu.load(&rom).context("error loading rom")?;

    // run
    app::run(
        emu,
        app::Settings {
            speed: cli.speed,
            scale: cli.scale,
        },
    )?;
    Ok(())
}
