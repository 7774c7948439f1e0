use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;
    info!("solution written to {}", path.display());
    Ok(())
}

pub fn write_text(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).with_context(|| format!("could not write file: {}", path.display()))?;
    info!("cut list written to {}", path.display());
    Ok(())
}

/// Logs to stderr, every line prefixed with its level and the time elapsed since [`EPOCH`].
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed().as_secs();
            let (hours, min, sec) = (elapsed / 3600, (elapsed / 60) % 60, elapsed % 60);
            let prefix = format!("[{}] [{hours:0>2}:{min:0>2}:{sec:0>2}]", record.level());
            out.finish(format_args!("{prefix:<18}[{}] {message}", record.target()))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("[BAF] started at {}", jiff::Timestamp::now());
    Ok(())
}
