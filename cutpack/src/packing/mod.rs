mod free_space;
mod packer;
mod result;
mod strategy;

#[doc(inline)]
pub use free_space::Fit;
#[doc(inline)]
pub use free_space::FreeSpaceTracker;
#[doc(inline)]
pub use packer::Packer;
#[doc(inline)]
pub use packer::PackerState;
#[doc(inline)]
pub use result::PackResult;
#[doc(inline)]
pub use strategy::PlacementOption;
#[doc(inline)]
pub use strategy::best_area_fit;
