//! Rectangle bin packing for generating sheet cut lists.
//!
//! Pieces are assigned to stock sheets (bins) with a best-area-fit heuristic on top of a
//! per-bin free-space tracker. The result can be queried per piece, rendered as a text cut list
//! or drawn as one SVG diagram per used sheet.

#![allow(non_camel_case_types)]

/// Geometric primitives and base algorithms
pub mod geometry;

/// Entities to model the packing problem
pub mod entities;

/// Free-space tracking, placement strategy and the multi-bin packer
pub mod packing;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use error::Result;

/// The floating point type used throughout the library.
pub type fsize = f64;
