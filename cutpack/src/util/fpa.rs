use std::cmp::Ordering;

use crate::fsize;

/// Float wrapper comparing with the tolerance of [`float_cmp::approx_eq!()`].
/// Leftover areas which only differ by rounding noise compare as equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub fsize);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(fsize, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
