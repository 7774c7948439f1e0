use crate::io::ext_repr::{ExtPlacement, ExtSolution};
use crate::packing::PackResult;

/// Exports a result out of the library
pub fn export(result: &PackResult) -> ExtSolution {
    ExtSolution {
        placements: result
            .placements()
            .map(|(id, p)| ExtPlacement {
                id: id.to_owned(),
                bin: p.bin_number(),
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                rotated: p.rotated,
            })
            .collect(),
        bins_used: result.bins_used(),
        density: result.density(),
        run_time_ms: result.run_time().as_millis() as u64,
    }
}
