/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::FreeSpaceModel;
#[doc(inline)]
pub use config::PackerConfig;
#[doc(inline)]
pub use fpa::FPA;
