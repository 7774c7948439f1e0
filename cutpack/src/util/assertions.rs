//! Checks of the guarantees a [`PackResult`] has to uphold.
//! Used in debug assertions and tests.

use itertools::Itertools;

use crate::entities::Piece;
use crate::geometry::geo_traits::{Encloses, Intersects, Shape};
use crate::packing::PackResult;

/// Every placement lies fully within the boundary of its bin.
pub fn placements_within_bins(result: &PackResult) -> bool {
    result.placements().all(|(_, p)| match result.bin(p.bin_index) {
        Some(bin) => p.x >= 0.0 && p.y >= 0.0 && bin.rect().encloses(&p.rect()),
        None => false,
    })
}

/// No two placements in the same bin overlap with a positive area.
pub fn no_overlaps(result: &PackResult) -> bool {
    (0..result.bins_used()).all(|bin_index| {
        result
            .bin_placements(bin_index)
            .tuple_combinations()
            .all(|((_, a), (_, b))| !a.rect().intersects(&b.rect()))
    })
}

/// Every piece appears exactly once and nothing else was placed.
pub fn all_pieces_placed(result: &PackResult, pieces: &[Piece]) -> bool {
    result.n_placements() == pieces.len() && pieces.iter().all(|p| result.get_rect(p.id()).is_ok())
}

/// Placed dimensions equal the piece dimensions, possibly swapped if rotation is allowed.
pub fn rotations_legal(result: &PackResult, pieces: &[Piece], allow_rotation: bool) -> bool {
    pieces.iter().all(|piece| {
        let Ok(p) = result.get_rect(piece.id()) else {
            return false;
        };
        let original = (p.width, p.height) == (piece.width(), piece.height()) && !p.rotated;
        let swapped = (p.width, p.height) == (piece.height(), piece.width()) && p.rotated;
        original || (allow_rotation && swapped)
    })
}

/// All of the above.
pub fn result_is_valid(result: &PackResult, pieces: &[Piece], allow_rotation: bool) -> bool {
    placements_within_bins(result)
        && no_overlaps(result)
        && all_pieces_placed(result, pieces)
        && rotations_legal(result, pieces, allow_rotation)
}
