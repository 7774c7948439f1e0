mod bin;
mod piece;
mod placement;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use placement::Placement;

use crate::{Error, Result, fsize};

/// Ensures both dimensions are finite and strictly positive.
pub(crate) fn validate_dimensions(subject: impl Fn() -> String, width: fsize, height: fsize) -> Result<()> {
    let valid = |d: fsize| d.is_finite() && d > 0.0;
    match valid(width) && valid(height) {
        true => Ok(()),
        false => Err(Error::InvalidDimension {
            subject: subject(),
            width,
            height,
        }),
    }
}
