use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::fsize;
use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util::{self, SvgDrawOptions};
use crate::packing::PackResult;

/// Draws a single bin and the pieces placed in it. Returns `None` if the bin was never opened.
pub fn bin_to_svg(result: &PackResult, bin_index: usize, options: SvgDrawOptions) -> Option<Document> {
    let bin = result.bin(bin_index)?;
    let bin_rect = bin.rect();
    let (width, height) = (bin.width(), bin.height());
    let theme = &options.theme;

    let min_dim = fsize::min(width, height);
    let margin = 0.05 * fsize::max(width, height);
    let stroke_width = min_dim * 0.002 * theme.stroke_width_multiplier;
    let font_size = min_dim * 0.04;

    let bin_group = Group::new()
        .set("id", format!("bin_{}", bin_index + 1))
        .add(
            svg_util::rect_to_svg(
                &bin_rect,
                height,
                &[
                    ("fill", &*format!("{}", theme.bin_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!("bin {}, {width} x {height}", bin_index + 1))),
        );

    let mut pieces_group = Group::new().set("id", "pieces");
    for (id, p) in result.bin_placements(bin_index) {
        let rect = p.rect();
        let mut piece_group = Group::new().set("id", format!("piece_{id}")).add(
            svg_util::rect_to_svg(
                &rect,
                height,
                &[
                    ("fill", &*format!("{}", theme.piece_fill)),
                    ("fill-opacity", &*format!("{}", theme.piece_fill_opacity)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "{id}, x: {}, y: {}, {} x {}{}",
                p.x,
                p.y,
                p.width,
                p.height,
                if p.rotated { ", rotated" } else { "" }
            ))),
        );
        if options.labels {
            let label_size = fsize::min(font_size, 0.4 * fsize::min(p.width, p.height));
            piece_group = piece_group.add(
                Text::new(id)
                    .set("x", rect.x_min + 0.5 * p.width)
                    .set("y", height - (rect.y_min + 0.5 * p.height))
                    .set("font-size", label_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        pieces_group = pieces_group.add(piece_group);
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            (-margin, -2.0 * margin, width + 2.0 * margin, height + 3.0 * margin),
        )
        .add(bin_group)
        .add(pieces_group);

    if options.header {
        let header = format!(
            "board {} | width: {width} | height: {height} | density: {:.3}%",
            bin_index + 1,
            result.bin_density(bin_index).unwrap_or(0.0) * 100.0
        );
        document = document.add(
            Text::new(header)
                .set("x", 0.0)
                .set("y", -0.5 * margin)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("font-weight", "500"),
        );
    }

    Some(document)
}

/// Writes `board_<n>.svg` into `folder` for every opened bin, starting at n = 1 and stopping at the first
/// bin number that does not exist. Returns the paths of the written files.
pub fn save_boards(result: &PackResult, folder: &Path, options: SvgDrawOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(folder)
        .with_context(|| format!("could not create board folder {}", folder.display()))?;

    let mut paths = vec![];
    for bin_index in 0.. {
        let Some(document) = bin_to_svg(result, bin_index, options) else {
            break;
        };
        let path = folder.join(format!("board_{}.svg", bin_index + 1));
        svg::save(&path, &document)
            .with_context(|| format!("could not write board {}", path.display()))?;
        info!("[SVG] board {} written to {}", bin_index + 1, path.display());
        paths.push(path);
    }
    Ok(paths)
}
