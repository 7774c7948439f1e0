use std::time::Duration;

use indexmap::IndexMap;

use crate::entities::{Bin, Placement};
use crate::geometry::geo_traits::Shape;
use crate::{Error, Result, fsize};

const RULE_WIDTH: usize = 50;

/// Frozen outcome of a successful pack run.
///
/// Placements are kept in the order they were made, which equals the submission order of the pieces.
#[derive(Debug, Clone)]
pub struct PackResult {
    /// Bins opened during the run, indexed by bin index
    bins: Vec<Bin>,
    placements: IndexMap<String, Placement>,
    run_time: Duration,
}

impl PackResult {
    pub(crate) fn new(bins: Vec<Bin>, placements: IndexMap<String, Placement>, run_time: Duration) -> Self {
        Self {
            bins,
            placements,
            run_time,
        }
    }

    /// Fails with [`Error::UnknownRectangle`] when `id` was never submitted.
    pub fn get_rect(&self, id: &str) -> Result<&Placement> {
        self.placements
            .get(id)
            .ok_or_else(|| Error::UnknownRectangle(id.to_owned()))
    }

    /// All placements, in placement order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &Placement)> + Clone {
        self.placements.iter().map(|(id, p)| (id.as_str(), p))
    }

    /// Placements within a single bin, in placement order.
    pub fn bin_placements(&self, bin_index: usize) -> impl Iterator<Item = (&str, &Placement)> + Clone {
        self.placements().filter(move |(_, p)| p.bin_index == bin_index)
    }

    /// Number of bins opened during the run.
    pub fn bins_used(&self) -> usize {
        self.bins.len()
    }

    /// The template of an opened bin, `None` if the bin was never opened.
    pub fn bin(&self, bin_index: usize) -> Option<&Bin> {
        self.bins.get(bin_index)
    }

    pub fn n_placements(&self) -> usize {
        self.placements.len()
    }

    pub fn run_time(&self) -> Duration {
        self.run_time
    }

    /// Fraction of a single bin covered by pieces.
    pub fn bin_density(&self, bin_index: usize) -> Option<fsize> {
        let bin = self.bin(bin_index)?;
        let used: fsize = self
            .bin_placements(bin_index)
            .map(|(_, p)| p.width * p.height)
            .sum();
        Some(used / bin.area())
    }

    /// Total area of the pieces divided by the total area of the opened bins.
    pub fn density(&self) -> fsize {
        let bin_area: fsize = self.bins.iter().map(|b| b.area()).sum();
        if bin_area == 0.0 {
            return 0.0;
        }
        let item_area: fsize = self.placements.values().map(|p| p.width * p.height).sum();
        item_area / bin_area
    }

    /// Human readable cut list to work from, one entry per piece in placement order.
    pub fn cut_list(&self) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!("{:-^width$}", " Cut List ", width = RULE_WIDTH),
            rule.clone(),
            String::new(),
        ];
        for (id, p) in self.placements() {
            lines.push(id.to_owned());
            lines.push(rule.clone());
            lines.push(format!("\tboard:\t\t\t{}", p.bin_number()));
            lines.push(format!("\tstart-width:\t{}", p.x));
            lines.push(format!("\tstart-height:\t{}", p.y));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> PackResult {
        let bins = vec![Bin::try_new(0, 48.0, 96.0).unwrap(), Bin::try_new(1, 48.0, 96.0).unwrap()];
        let placement = |bin_index, x, y, width, height| Placement {
            bin_index,
            x,
            y,
            width,
            height,
            rotated: false,
        };
        let placements = IndexMap::from([
            ("R1".to_owned(), placement(0, 0.0, 0.0, 24.0, 38.0)),
            ("C1".to_owned(), placement(1, 0.0, 0.0, 24.0, 78.0)),
            ("L1".to_owned(), placement(0, 24.0, 0.0, 12.5, 38.0)),
        ]);
        PackResult::new(bins, placements, Duration::ZERO)
    }

    #[test]
    fn cut_list_layout() {
        let expected = [
            "--------------------------------------------------",
            "-------------------- Cut List --------------------",
            "--------------------------------------------------",
            "",
            "R1",
            "--------------------------------------------------",
            "\tboard:\t\t\t1",
            "\tstart-width:\t0",
            "\tstart-height:\t0",
            "",
            "C1",
            "--------------------------------------------------",
            "\tboard:\t\t\t2",
            "\tstart-width:\t0",
            "\tstart-height:\t0",
            "",
            "L1",
            "--------------------------------------------------",
            "\tboard:\t\t\t1",
            "\tstart-width:\t24",
            "\tstart-height:\t0",
            "",
        ]
        .join("\n");
        assert_eq!(result().cut_list(), expected);
    }

    #[test]
    fn queries() {
        let r = result();
        assert_eq!(r.get_rect("C1").unwrap().bin_number(), 2);
        assert_eq!(r.get_rect("nope"), Err(Error::UnknownRectangle("nope".into())));
        assert_eq!(r.bins_used(), 2);
        assert!(r.bin(2).is_none());
        let in_first: Vec<&str> = r.bin_placements(0).map(|(id, _)| id).collect();
        assert_eq!(in_first, vec!["R1", "L1"]);
        assert_eq!(r.bin_density(1), Some(24.0 * 78.0 / (48.0 * 96.0)));
    }

    #[test]
    fn overlap_check_pairs_placements_per_bin() {
        use crate::util::assertions;

        let r = result();
        assert!(assertions::no_overlaps(&r));
        assert!(assertions::placements_within_bins(&r));

        let mut placements = r.placements.clone();
        placements.insert(
            "X".to_owned(),
            Placement {
                bin_index: 0,
                x: 30.0,
                y: 30.0,
                width: 10.0,
                height: 10.0,
                rotated: false,
            },
        );
        let overlapping = PackResult::new(r.bins.clone(), placements, Duration::ZERO);
        assert!(!assertions::no_overlaps(&overlapping));
    }
}
