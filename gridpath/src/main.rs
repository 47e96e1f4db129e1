//! Command-line entry point.
//!
//! Run: cargo run -- --width 10 --height 6 --seed 7

use clap::Parser;
use gridpath::{Args, Config};

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = Config::try_from(args).and_then(|config| {
        let stdout = std::io::stdout();
        gridpath::run(&config, &mut stdout.lock())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
