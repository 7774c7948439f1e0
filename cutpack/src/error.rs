use thiserror::Error;

use crate::fsize;

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the packer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A piece or bin was submitted with a non-positive (or non-finite) width or height.
    #[error("invalid dimensions for {subject}: {width} x {height}, both must be positive")]
    InvalidDimension {
        subject: String,
        width: fsize,
        height: fsize,
    },

    /// A piece identifier was submitted more than once.
    #[error("rectangle {0:?} was already submitted")]
    DuplicateRectangle(String),

    /// No remaining bin template can host the piece.
    #[error("rectangle {id:?} ({width} x {height}) does not fit in any remaining bin")]
    OutOfBins {
        id: String,
        width: fsize,
        height: fsize,
    },

    /// The result was queried before a successful pack run.
    #[error("packer has not been packed, run pack() first")]
    NotPacked,

    /// The queried identifier was never submitted.
    #[error("unknown rectangle {0:?}")]
    UnknownRectangle(String),

    /// The packer already ran; a fresh packer is required for another run.
    #[error("packer already ran, create a new packer to pack again")]
    AlreadyPacked,
}
