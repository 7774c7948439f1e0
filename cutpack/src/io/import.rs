use log::debug;

use crate::Result;
use crate::io::ext_repr::ExtInstance;
use crate::packing::Packer;
use crate::util::PackerConfig;

/// Imports an instance into an idle [`Packer`], validating every piece and bin on the way.
///
/// Each bin is expanded into `stock` consecutive bin templates.
pub fn import(ext_instance: &ExtInstance, config: PackerConfig) -> Result<Packer> {
    let mut packer = Packer::new(config);
    for ext_piece in &ext_instance.pieces {
        packer.add_rect(ext_piece.id.clone(), ext_piece.width, ext_piece.height)?;
    }
    for ext_bin in &ext_instance.bins {
        for _ in 0..ext_bin.stock {
            packer.add_bin(ext_bin.width, ext_bin.height)?;
        }
    }
    debug!(
        "[IMPORT] instance {:?}: {} pieces, {} bin templates",
        ext_instance.name,
        packer.pieces().len(),
        packer.bins().len()
    );
    Ok(packer)
}
