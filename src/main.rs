pub mod model;
pub mod runner;

use std::io;

use crate::runner::RunOptions;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = RunOptions::from_env();
    let stdout = io::stdout();
    if let Err(e) = runner::run(&mut stdout.lock(), options) {
        log::error!("Failed to write output: {}", e);
        std::process::exit(1);
    }
}
