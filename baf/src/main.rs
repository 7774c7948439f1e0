use anyhow::{Context, Result};
use baf::config::BafConfig;
use baf::io;
use baf::io::cli::Cli;
use clap::Parser as ClapParser;
use cutpack::io::ext_repr::ExtInstance;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: BafConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BafConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };
    info!("Successfully parsed BafConfig: {config:?}");

    let ext_instance: ExtInstance = io::read_json(&args.input_file)?;
    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    let cut_list = baf::run(ext_instance, config, input_stem, &args.solution_folder)?;
    println!("{cut_list}");

    Ok(())
}
