use std::io::Write;

use crate::model::collector::{Collector, OutputError};

pub const BANNER: &str = "Running Test Class";
pub const CLOSING_BANNER: &str = "Done printing messages.";
pub const CLOSING_BANNER_VAR: &str = "FIXTURE_CLOSING_BANNER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub closing_banner: bool,
}

impl RunOptions {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CLOSING_BANNER_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let closing_banner = match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) => !matches!(v.as_str(), "0" | "false" | "no" | "off"),
            None => true,
        };
        Self { closing_banner }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            closing_banner: true,
        }
    }
}

pub fn print_end(out: &mut impl Write) -> Result<(), OutputError> {
    writeln!(out, "{}", CLOSING_BANNER)?;
    Ok(())
}

/// Prints the banner, the registered fixture messages and optionally the closing line.
pub fn run(out: &mut impl Write, options: RunOptions) -> Result<(), OutputError> {
    log::info!("Running fixture ({:?})", options);
    writeln!(out, "{}", BANNER)?;

    let collector = Collector::new();
    collector.register_messages();
    collector.print_all(out)?;

    if options.closing_banner {
        print_end(out)?;
    }
    out.flush()?;
    log::info!("Printed {} messages", collector.len());
    Ok(())
}
