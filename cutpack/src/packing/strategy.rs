use std::cmp::Ordering;

use log::debug;

use crate::fsize;
use crate::packing::free_space::{Fit, FreeSpaceTracker};
use crate::util::FPA;

/// A placement decision: the open bin and the position within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOption {
    pub bin_index: usize,
    pub fit: Fit,
}

/// Best-area-fit search over all open bins.
///
/// `trackers` holds one tracker per open bin, indexed by bin index. Each bin proposes its own best fit,
/// the one with the globally smallest leftover area wins. Ties go to the lowest bin index.
/// Trackers are only read, committing the decision is up to the caller.
pub fn best_area_fit(
    trackers: &[FreeSpaceTracker],
    width: fsize,
    height: fsize,
) -> Option<PlacementOption> {
    let mut best: Option<PlacementOption> = None;
    for (bin_index, tracker) in trackers.iter().enumerate() {
        let Some(fit) = tracker.find_best_fit(width, height) else {
            debug!("[BAF] {width} x {height} does not fit in bin {}", bin_index + 1);
            continue;
        };
        let improves = match &best {
            None => true,
            Some(b) => FPA(fit.leftover).partial_cmp(&FPA(b.fit.leftover)) == Some(Ordering::Less),
        };
        if improves {
            best = Some(PlacementOption { bin_index, fit });
        }
    }
    best
}
