use std::cmp::Ordering;

use log::trace;

use crate::entities::Bin;
use crate::fsize;
use crate::geometry::geo_traits::{Encloses, Intersects, Shape};
use crate::geometry::primitives::Rect;
use crate::util::{FPA, FreeSpaceModel, PackerConfig};

/// A feasible position for a rectangle inside one of the free regions of a bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub x: fsize,
    pub y: fsize,
    /// Width after rotation
    pub width: fsize,
    /// Height after rotation
    pub height: fsize,
    pub rotated: bool,
    /// Area of the hosting free region minus the area of the rectangle
    pub leftover: fsize,
    /// Index of the hosting free region
    pub region_idx: usize,
}

impl Fit {
    /// Best-area-fit ordering: least leftover area, then unrotated, then lowest region index.
    /// Leftover areas within floating point tolerance of each other are considered equal.
    pub fn cmp_quality(&self, other: &Fit) -> Ordering {
        match FPA(self.leftover).partial_cmp(&FPA(other.leftover)) {
            Some(Ordering::Equal) | None => {
                (self.rotated, self.region_idx).cmp(&(other.rotated, other.region_idx))
            }
            Some(ord) => ord,
        }
    }
}

/// Keeps track of the regions of a single bin in which rectangles can still be placed.
///
/// Free regions never cover occupied space, but (with [`FreeSpaceModel::MaximalRectangles`]) may overlap each other.
#[derive(Debug, Clone)]
pub struct FreeSpaceTracker {
    bounds: Rect,
    model: FreeSpaceModel,
    allow_rotation: bool,
    regions: Vec<Rect>,
    placed: Vec<Rect>,
}

impl FreeSpaceTracker {
    pub fn new(bin: &Bin, config: &PackerConfig) -> Self {
        let bounds = bin.rect();
        Self {
            bounds,
            model: config.free_space,
            allow_rotation: config.allow_rotation,
            regions: vec![bounds],
            placed: vec![],
        }
    }

    /// Finds the placement of a `width` x `height` rectangle which leaves the least unused area
    /// in its hosting free region. The rectangle is always anchored at the bottom-left corner of the region.
    ///
    /// The rotated variant is only considered if rotation is enabled.
    pub fn find_best_fit(&self, width: fsize, height: fsize) -> Option<Fit> {
        let orientations = match self.allow_rotation && width != height {
            true => vec![(width, height, false), (height, width, true)],
            false => vec![(width, height, false)],
        };

        let mut best: Option<Fit> = None;
        for (region_idx, region) in self.regions.iter().enumerate() {
            for &(w, h, rotated) in &orientations {
                // same arithmetic as the rectangle built in `commit`
                if region.x_min + w > region.x_max || region.y_min + h > region.y_max {
                    continue;
                }
                let fit = Fit {
                    x: region.x_min,
                    y: region.y_min,
                    width: w,
                    height: h,
                    rotated,
                    leftover: region.area() - w * h,
                    region_idx,
                };
                best = match best {
                    Some(b) if b.cmp_quality(&fit) != Ordering::Greater => Some(b),
                    _ => Some(fit),
                };
            }
        }
        best
    }

    /// Returns true if a `width` x `height` rectangle at (`x`, `y`) lies within the bin
    /// and does not overlap any of the rectangles placed so far.
    pub fn fits_at(&self, x: fsize, y: fsize, width: fsize, height: fsize) -> bool {
        let rect = Rect::from_origin(x, y, width, height);
        self.bounds.encloses(&rect) && self.placed.iter().all(|p| !p.intersects(&rect))
    }

    /// Marks the rectangle as occupied and updates the free regions.
    ///
    /// # Panics
    /// When the rectangle is not enclosed by any free region: [`Self::find_best_fit`] has to be consulted first.
    pub fn commit(&mut self, x: fsize, y: fsize, width: fsize, height: fsize) {
        let placed = Rect::from_origin(x, y, width, height);
        let host_idx = self.regions.iter().position(|r| r.encloses(&placed));
        assert!(
            host_idx.is_some(),
            "committed rectangle {placed:?} is not enclosed by any free region"
        );
        debug_assert!(self.fits_at(x, y, width, height));

        let model = self.model;
        let mut updated = Vec::with_capacity(self.regions.len() + 2);
        for (idx, region) in self.regions.drain(..).enumerate() {
            if !region.intersects(&placed) {
                updated.push(region);
                continue;
            }
            match (model, Some(idx) == host_idx) {
                (FreeSpaceModel::Guillotine, true) => {
                    updated.extend(guillotine_split(&region, &placed))
                }
                _ => updated.extend(region.subtract(&placed)),
            }
        }
        if model == FreeSpaceModel::MaximalRectangles {
            prune_enclosed(&mut updated);
        }
        self.regions = updated;
        self.placed.push(placed);
        trace!(
            "committed {placed:?}, {} free regions remain",
            self.regions.len()
        );
    }

    pub fn free_regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Splits `region` around `placed` (anchored at its bottom-left corner) with one straight cut.
///
/// Either the cut runs horizontally along the top of `placed` (a full-width top residual and a
/// right residual as tall as `placed`), or vertically along its right side (a full-height right
/// residual and a top residual as wide as `placed`). The cut that keeps the larger residual in one
/// piece is chosen, horizontally on a tie. The larger residual comes first, degenerate ones are dropped.
fn guillotine_split(region: &Rect, placed: &Rect) -> Vec<Rect> {
    let horizontal = [
        Rect::new(region.x_min, placed.y_max, region.x_max, region.y_max),
        Rect::new(placed.x_max, region.y_min, region.x_max, placed.y_max),
    ];
    let vertical = [
        Rect::new(placed.x_max, region.y_min, region.x_max, region.y_max),
        Rect::new(region.x_min, placed.y_max, placed.x_max, region.y_max),
    ];
    let largest = |rs: &[Rect; 2]| fsize::max(rs[0].area(), rs[1].area());

    let [a, b] = match largest(&vertical) > largest(&horizontal) {
        true => vertical,
        false => horizontal,
    };
    let (larger, smaller) = match b.area() > a.area() {
        true => (b, a),
        false => (a, b),
    };
    [larger, smaller]
        .into_iter()
        .filter(|r| !r.is_degenerate())
        .collect()
}

/// Removes every region enclosed by another one. Of two identical regions, the first is kept.
fn prune_enclosed(regions: &mut Vec<Rect>) {
    let mut i = 0;
    while i < regions.len() {
        let redundant = regions
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.encloses(&regions[i]) && (other != &regions[i] || j < i));
        match redundant {
            true => {
                regions.remove(i);
            }
            false => i += 1,
        }
    }
}
