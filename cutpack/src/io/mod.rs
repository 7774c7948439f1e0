/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

mod export;
mod import;

/// All logic for drawing the bins of a [`PackResult`](crate::packing::PackResult) as SVG
pub mod svg;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
