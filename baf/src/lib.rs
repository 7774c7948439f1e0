use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use cutpack::io::ext_repr::ExtInstance;
use cutpack::io::svg::save_boards;
use log::info;
use thousands::Separable;

use crate::config::BafConfig;
use crate::io::output::BafOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Packs an instance and writes the solution, the cut list and one SVG per board into `output_folder`.
///
/// Returns the cut list.
pub fn run(ext_instance: ExtInstance, config: BafConfig, input_stem: &str, output_folder: &Path) -> Result<String> {
    fs::create_dir_all(output_folder)
        .with_context(|| format!("could not create solution folder {}", output_folder.display()))?;

    let mut packer = cutpack::io::import(&ext_instance, config.packer)
        .with_context(|| format!("invalid instance {:?}", ext_instance.name))?;
    info!(
        "[BAF] packing {} pieces into at most {} bins",
        packer.pieces().len().separate_with_commas(),
        packer.bins().len().separate_with_commas()
    );
    let result = packer
        .pack()
        .with_context(|| format!("could not pack instance {:?}", ext_instance.name))?;

    let cut_list = result.cut_list();
    let solution = cutpack::io::export(result);
    info!(
        "[BAF] {} bin(s) used, density {:.3}%",
        solution.bins_used,
        solution.density * 100.0
    );

    io::write_json(
        &BafOutput {
            instance: ext_instance,
            solution,
            config,
        },
        &output_folder.join(format!("sol_{input_stem}.json")),
    )?;
    io::write_text(&cut_list, &output_folder.join(format!("cut_list_{input_stem}.txt")))?;
    save_boards(
        result,
        &output_folder.join(format!("boards_{input_stem}")),
        config.svg_draw_options,
    )?;

    Ok(cut_list)
}
