use serde::{Deserialize, Serialize};

use crate::fsize;
use crate::geometry::geo_traits::{Encloses, Intersects, Shape};

/// Axis-aligned rectangle, stored by its minimum and maximum corners.
///
/// Positions are expressed with a bottom-left origin.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: fsize,
    pub y_min: fsize,
    pub x_max: fsize,
    pub y_max: fsize,
}

impl Rect {
    pub fn new(x_min: fsize, y_min: fsize, x_max: fsize, y_max: fsize) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a rectangle from its bottom-left corner and its dimensions.
    pub fn from_origin(x: fsize, y: fsize, width: fsize, height: fsize) -> Self {
        Rect::new(x, y, x + width, y + height)
    }

    /// Returns true if the rectangle has no interior.
    pub fn is_degenerate(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    /// Parts of `self` that remain free once `other` is taken out of it.
    ///
    /// Returns up to four maximal slivers (left, right, bottom, top), which may overlap each other.
    /// If `other` does not overlap `self`, `self` is returned unchanged.
    pub fn subtract(&self, other: &Rect) -> Vec<Rect> {
        if !self.intersects(other) {
            return vec![*self];
        }
        [
            Rect::new(self.x_min, self.y_min, other.x_min.max(self.x_min), self.y_max),
            Rect::new(other.x_max.min(self.x_max), self.y_min, self.x_max, self.y_max),
            Rect::new(self.x_min, self.y_min, self.x_max, other.y_min.max(self.y_min)),
            Rect::new(self.x_min, other.y_max.min(self.y_max), self.x_max, self.y_max),
        ]
        .into_iter()
        .filter(|r| !r.is_degenerate())
        .collect()
    }
}

impl Shape for Rect {
    fn width(&self) -> fsize {
        self.x_max - self.x_min
    }

    fn height(&self) -> fsize {
        self.y_max - self.y_min
    }
}

impl Intersects<Rect> for Rect {
    #[inline(always)]
    fn intersects(&self, other: &Rect) -> bool {
        fsize::max(self.x_min, other.x_min) < fsize::min(self.x_max, other.x_max)
            && fsize::max(self.y_min, other.y_min) < fsize::min(self.y_max, other.y_max)
    }
}

impl Encloses<Rect> for Rect {
    #[inline(always)]
    fn encloses(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }
}
