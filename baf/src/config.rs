use cutpack::io::svg::SvgDrawOptions;
use cutpack::util::PackerConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the best area fit cut list generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct BafConfig {
    /// Configuration of the packer
    #[serde(default)]
    pub packer: PackerConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
