use crate::entities::validate_dimensions;
use crate::geometry::geo_traits::Shape;
use crate::{Result, fsize};

/// A rectangular piece which has to be cut out of one of the bins.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    id: String,
    width: fsize,
    height: fsize,
}

impl Piece {
    /// Fails with [`Error::InvalidDimension`](crate::Error::InvalidDimension) when either dimension is not positive.
    pub fn try_new(id: impl Into<String>, width: fsize, height: fsize) -> Result<Self> {
        let id = id.into();
        validate_dimensions(|| format!("rectangle {id:?}"), width, height)?;
        Ok(Piece { id, width, height })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Shape for Piece {
    fn width(&self) -> fsize {
        self.width
    }

    fn height(&self) -> fsize {
        self.height
    }
}
