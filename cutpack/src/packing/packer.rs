use std::collections::HashSet;
use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::entities::{Bin, Piece, Placement};
use crate::fsize;
use crate::geometry::geo_traits::Shape;
use crate::packing::free_space::FreeSpaceTracker;
use crate::packing::result::PackResult;
use crate::packing::strategy::best_area_fit;
use crate::util::{PackerConfig, assertions};
use crate::{Error, Result};

/// Lifecycle of a [`Packer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackerState {
    /// Accepting pieces and bins
    Idle,
    /// A pack run is in progress (only observable if it was aborted by a panic)
    Running,
    /// The run succeeded, results can be queried
    Done,
    /// The run failed, nothing can be queried
    Failed,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Running,
    Done(PackResult),
    Failed,
}

/// Multi-bin packer: assigns every submitted piece to a position in one of the submitted bins.
///
/// Packing is one-shot: [`Packer::pack`] moves the packer from idle to done (or failed), after which
/// it no longer accepts pieces or bins. Results can only be queried once the run succeeded.
#[derive(Debug)]
pub struct Packer {
    config: PackerConfig,
    pieces: Vec<Piece>,
    piece_ids: HashSet<String>,
    bins: Vec<Bin>,
    phase: Phase,
}

impl Packer {
    pub fn new(config: PackerConfig) -> Self {
        Self {
            config,
            pieces: vec![],
            piece_ids: HashSet::new(),
            bins: vec![],
            phase: Phase::Idle,
        }
    }

    /// Submits a piece. Pieces are packed in submission order.
    pub fn add_rect(&mut self, id: impl Into<String>, width: fsize, height: fsize) -> Result<()> {
        self.ensure_idle()?;
        let piece = Piece::try_new(id, width, height)?;
        if !self.piece_ids.insert(piece.id().to_owned()) {
            return Err(Error::DuplicateRectangle(piece.id().to_owned()));
        }
        self.pieces.push(piece);
        Ok(())
    }

    /// Submits a bin template. Bins are opened in submission order, only when needed.
    pub fn add_bin(&mut self, width: fsize, height: fsize) -> Result<()> {
        self.ensure_idle()?;
        let bin = Bin::try_new(self.bins.len(), width, height)?;
        self.bins.push(bin);
        Ok(())
    }

    /// Runs the packing.
    ///
    /// Fails with [`Error::OutOfBins`] if a piece cannot be placed in any open bin and no bin templates are left.
    /// Either way the packer is consumed: a second call fails with [`Error::AlreadyPacked`].
    pub fn pack(&mut self) -> Result<&PackResult> {
        self.ensure_idle()?;
        self.phase = Phase::Running;

        match pack_pieces(&self.pieces, &self.bins, &self.config) {
            Ok(result) => {
                info!(
                    "[PACK] placed {} pieces in {} bin(s) with a density of {:.3}% in {:.3}ms",
                    result.n_placements(),
                    result.bins_used(),
                    result.density() * 100.0,
                    result.run_time().as_secs_f64() * 1000.0
                );
                self.phase = Phase::Done(result);
                self.result()
            }
            Err(err) => {
                warn!("[PACK] packing failed: {err}");
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }

    /// The frozen result, fails with [`Error::NotPacked`] unless a run succeeded.
    pub fn result(&self) -> Result<&PackResult> {
        match &self.phase {
            Phase::Done(result) => Ok(result),
            _ => Err(Error::NotPacked),
        }
    }

    /// Placement of a single piece.
    pub fn get_rect(&self, id: &str) -> Result<&Placement> {
        self.result()?.get_rect(id)
    }

    /// Human readable cut list, see [`PackResult::cut_list`].
    pub fn cut_list(&self) -> Result<String> {
        Ok(self.result()?.cut_list())
    }

    pub fn state(&self) -> PackerState {
        match self.phase {
            Phase::Idle => PackerState::Idle,
            Phase::Running => PackerState::Running,
            Phase::Done(_) => PackerState::Done,
            Phase::Failed => PackerState::Failed,
        }
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.phase {
            Phase::Idle => Ok(()),
            _ => Err(Error::AlreadyPacked),
        }
    }
}

/// Places the pieces one by one in input order, opening bin templates lazily in their listed order.
fn pack_pieces(pieces: &[Piece], bins: &[Bin], config: &PackerConfig) -> Result<PackResult> {
    let start = Instant::now();
    let mut trackers: Vec<FreeSpaceTracker> = vec![];
    let mut placements = IndexMap::with_capacity(pieces.len());

    for piece in pieces {
        let option = loop {
            if let Some(option) = best_area_fit(&trackers, piece.width(), piece.height()) {
                break option;
            }
            match bins.get(trackers.len()) {
                Some(bin) => {
                    debug!(
                        "[PACK] opening bin {} ({} x {}) for {:?}",
                        bin.index + 1,
                        bin.width(),
                        bin.height(),
                        piece.id()
                    );
                    trackers.push(FreeSpaceTracker::new(bin, config));
                }
                None => {
                    return Err(Error::OutOfBins {
                        id: piece.id().to_owned(),
                        width: piece.width(),
                        height: piece.height(),
                    });
                }
            }
        };

        let fit = option.fit;
        trackers[option.bin_index].commit(fit.x, fit.y, fit.width, fit.height);
        let placement = Placement {
            bin_index: option.bin_index,
            x: fit.x,
            y: fit.y,
            width: fit.width,
            height: fit.height,
            rotated: fit.rotated,
        };
        debug!(
            "[PACK] placing {:?} in bin {} at ({}, {}) as {} x {}{}, leftover {:.3}",
            piece.id(),
            placement.bin_number(),
            placement.x,
            placement.y,
            placement.width,
            placement.height,
            if placement.rotated { " (rotated)" } else { "" },
            fit.leftover
        );
        placements.insert(piece.id().to_owned(), placement);
    }

    let opened = bins[..trackers.len()].to_vec();
    let result = PackResult::new(opened, placements, start.elapsed());
    debug_assert!(assertions::result_is_valid(&result, pieces, config.allow_rotation));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer(pieces: &[(&str, fsize, fsize)], bins: &[(fsize, fsize)], allow_rotation: bool) -> Packer {
        let mut packer = Packer::new(PackerConfig {
            allow_rotation,
            ..PackerConfig::default()
        });
        for &(id, w, h) in pieces {
            packer.add_rect(id, w, h).unwrap();
        }
        for &(w, h) in bins {
            packer.add_bin(w, h).unwrap();
        }
        packer
    }

    #[test]
    fn queries_before_pack_fail() {
        let p = packer(&[("A", 1.0, 1.0)], &[(10.0, 10.0)], true);
        assert_eq!(p.state(), PackerState::Idle);
        assert_eq!(p.get_rect("A"), Err(Error::NotPacked));
        assert_eq!(p.cut_list(), Err(Error::NotPacked));
    }

    #[test]
    fn stacked_strips_fill_single_bin() {
        let mut p = packer(
            &[("A", 40.0, 10.0), ("B", 40.0, 10.0), ("C", 40.0, 76.0)],
            &[(48.0, 96.0)],
            true,
        );
        p.pack().unwrap();
        assert_eq!(p.state(), PackerState::Done);
        let a = *p.get_rect("A").unwrap();
        let b = *p.get_rect("B").unwrap();
        let c = *p.get_rect("C").unwrap();
        assert_eq!((a.x, a.y), (0.0, 0.0));
        assert_eq!((b.x, b.y), (0.0, 10.0));
        assert_eq!((c.x, c.y, c.width, c.height), (0.0, 20.0, 40.0, 76.0));
        assert!([a, b, c].iter().all(|p| p.bin_number() == 1));
    }

    #[test]
    fn opens_next_bin_when_full() {
        let mut p = packer(
            &[("A", 48.0, 96.0), ("B", 24.0, 38.0)],
            &[(48.0, 96.0), (48.0, 96.0)],
            true,
        );
        let result = p.pack().unwrap();
        assert_eq!(result.bins_used(), 2);
        assert_eq!(p.get_rect("B").unwrap().bin_number(), 2);
    }

    #[test]
    fn out_of_bins_leaves_nothing_queryable() {
        let mut p = packer(&[("X", 50.0, 50.0), ("Y", 50.0, 50.0)], &[(48.0, 96.0)], false);
        let err = p.pack().unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBins {
                id: "X".into(),
                width: 50.0,
                height: 50.0
            }
        );
        assert_eq!(p.state(), PackerState::Failed);
        assert_eq!(p.get_rect("X"), Err(Error::NotPacked));
        assert_eq!(p.pack().unwrap_err(), Error::AlreadyPacked);
    }

    #[test]
    fn no_bins_at_all() {
        let mut p = packer(&[("A", 1.0, 1.0)], &[], true);
        assert!(matches!(p.pack(), Err(Error::OutOfBins { .. })));
    }

    #[test]
    fn no_pieces_packs_into_nothing() {
        let mut p = packer(&[], &[(48.0, 96.0)], true);
        let result = p.pack().unwrap();
        assert_eq!(result.bins_used(), 0);
        assert_eq!(result.n_placements(), 0);
    }

    #[test]
    fn submission_errors() {
        let mut p = Packer::new(PackerConfig::default());
        assert!(matches!(p.add_rect("A", 0.0, 1.0), Err(Error::InvalidDimension { .. })));
        assert!(matches!(p.add_bin(10.0, -1.0), Err(Error::InvalidDimension { .. })));
        p.add_rect("A", 1.0, 1.0).unwrap();
        assert_eq!(p.add_rect("A", 2.0, 2.0), Err(Error::DuplicateRectangle("A".into())));
        p.add_bin(10.0, 10.0).unwrap();
        p.pack().unwrap();
        assert_eq!(p.add_rect("B", 1.0, 1.0), Err(Error::AlreadyPacked));
        assert_eq!(p.add_bin(1.0, 1.0), Err(Error::AlreadyPacked));
        assert_eq!(p.pieces().len(), 1);
    }

    #[test]
    fn earlier_bins_are_revisited() {
        let mut p = packer(
            &[("big", 40.0, 90.0), ("big2", 40.0, 90.0), ("small", 8.0, 90.0)],
            &[(48.0, 96.0), (48.0, 96.0)],
            false,
        );
        p.pack().unwrap();
        assert_eq!(p.get_rect("big2").unwrap().bin_number(), 2);
        assert_eq!(p.get_rect("small").unwrap().bin_number(), 1);
    }

    #[test]
    fn duplicate_detected_among_many() {
        let mut p = Packer::new(PackerConfig::default());
        for i in 0..1000 {
            p.add_rect(format!("P{i}"), 1.0, 1.0).unwrap();
        }
        assert_eq!(p.add_rect("P500", 1.0, 1.0), Err(Error::DuplicateRectangle("P500".into())));
        assert_eq!(p.pieces().len(), 1000);
    }

    #[test]
    fn decimal_widths_summing_to_bin_width_share_a_bin() {
        for (a, b) in [(0.8, 0.2), (32.1, 15.9), (32.2, 15.8)] {
            let bin_width = a + b;
            let mut p = packer(&[("A", a, 1.0), ("B", b, 1.0)], &[(bin_width, 1.0)], false);
            p.pack().unwrap();
            let placed = *p.get_rect("B").unwrap();
            assert_eq!((placed.bin_number(), placed.x, placed.y), (1, a, 0.0));
        }
    }

    #[test]
    fn decimal_heights_summing_to_bin_height_share_a_bin() {
        for (a, b) in [(0.8, 0.2), (32.1, 15.9), (32.2, 15.8)] {
            let bin_height = a + b;
            let mut p = packer(&[("A", 1.0, a), ("B", 1.0, b)], &[(1.0, bin_height)], false);
            p.pack().unwrap();
            let placed = *p.get_rect("B").unwrap();
            assert_eq!((placed.bin_number(), placed.x, placed.y), (1, 0.0, a));
        }
    }

    #[test]
    fn decimal_overflow_by_rounding_opens_next_bin() {
        // 0.6 + 1.1 rounds to just above 1.7
        let mut p = packer(&[("A", 0.6, 1.0), ("B", 1.1, 1.0)], &[(1.7, 1.0), (1.7, 1.0)], false);
        p.pack().unwrap();
        let result = p.result().unwrap();
        assert_eq!(result.bins_used(), 2);
        assert!(assertions::result_is_valid(result, p.pieces(), false));
        assert_eq!(p.get_rect("B").unwrap().bin_number(), 2);

        let mut p = packer(&[("A", 1.0, 0.6), ("B", 1.0, 1.1)], &[(1.0, 1.7)], false);
        assert!(matches!(p.pack(), Err(Error::OutOfBins { id, .. }) if id == "B"));
    }
}
