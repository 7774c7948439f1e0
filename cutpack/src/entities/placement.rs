use serde::Serialize;

use crate::fsize;
use crate::geometry::primitives::Rect;

/// Final position of a piece.
///
/// `width` and `height` are the dimensions after rotation was applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    /// Zero-based index of the bin the piece was assigned to
    pub bin_index: usize,
    pub x: fsize,
    pub y: fsize,
    pub width: fsize,
    pub height: fsize,
    pub rotated: bool,
}

impl Placement {
    /// One-based bin number, as reported to users.
    pub fn bin_number(&self) -> usize {
        self.bin_index + 1
    }

    /// Area occupied by the piece within its bin.
    pub fn rect(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }
}
