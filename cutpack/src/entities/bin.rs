use crate::entities::validate_dimensions;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use crate::{Result, fsize};

/// A stock sheet template in which pieces are packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    /// Position of the template in the submitted bin list, which is also its opening order
    pub index: usize,
    width: fsize,
    height: fsize,
}

impl Bin {
    /// Fails with [`Error::InvalidDimension`](crate::Error::InvalidDimension) when either dimension is not positive.
    pub fn try_new(index: usize, width: fsize, height: fsize) -> Result<Self> {
        validate_dimensions(|| format!("bin {}", index + 1), width, height)?;
        Ok(Bin {
            index,
            width,
            height,
        })
    }

    /// The full area of the bin, with its origin at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }
}

impl Shape for Bin {
    fn width(&self) -> fsize {
        self.width
    }

    fn height(&self) -> fsize {
        self.height
    }
}
