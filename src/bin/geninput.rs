//! Generate a random key file for treebench.
//!
//! Usage:
//!   geninput <path> <amount> <range>
//!
//! Writes `amount` distinct integers drawn from `1..range`, space-separated
//! on a single line.

use std::process;

use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rbmap::input;

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("no logger installed yet");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args.as_slice() {
        [path, amount, range] => amount
            .parse::<usize>()
            .ok()
            .zip(range.parse::<i64>().ok())
            .map(|(amount, range)| (path.clone(), amount, range)),
        _ => None,
    };

    let Some((path, amount, range)) = parsed else {
        eprintln!("usage: geninput <path> <amount> <range>");
        process::exit(2);
    };

    if let Err(err) = input::generate_file(&path, amount, range) {
        error!("{err}");
        process::exit(1);
    }
    println!("wrote {amount} keys from 1..{range} to {path}");
}
