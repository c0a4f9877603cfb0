//! vip8, a CHIP-8 interpreter
//!
//! ```text
//! vip8 [ROM] [--seed <SEED>] [--cycles-per-frame <N>]
//! ```
//!
//! The keypad lives on the left of the keyboard, 1234/QWER/ASDF/ZXCV, and
//! Escape quits. Set `RUST_LOG=debug` (or `trace` to see every instruction) for
//! more output.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use vip8_gui::{Application, CYCLES_PER_FRAME, Options, read_rom};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run, one can also be picked from the File menu
    rom: Option<PathBuf>,

    /// Seed for the random number generator, makes runs reproducible
    #[arg(short, long)]
    seed: Option<u64>,

    /// Instructions executed per frame, at roughly 60 frames per second
    #[arg(short, long, default_value_t = CYCLES_PER_FRAME, value_parser = clap::value_parser!(u16).range(1..))]
    cycles_per_frame: u16,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{args:?}");

    let rom = args
        .rom
        .as_deref()
        .map(|path| read_rom(path).with_context(|| format!("cannot run {}", path.display())))
        .transpose()?;

    Application::run(Options {
        rom,
        seed: args.seed,
        cycles_per_frame: args.cycles_per_frame,
    })?;

    Ok(())
}
