use serde::{Deserialize, Serialize};

use crate::fsize;

/// Packing instance: the pieces to cut and the stock sheets to cut them from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Pieces, in the order they will be packed
    pub pieces: Vec<ExtPiece>,
    /// Bin templates, in the order they will be opened
    pub bins: Vec<ExtBin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPiece {
    /// Unique identifier of the piece
    pub id: String,
    pub width: fsize,
    pub height: fsize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    pub width: fsize,
    pub height: fsize,
    /// The number of identical sheets of this kind available
    #[serde(default = "default_stock")]
    pub stock: usize,
}

fn default_stock() -> usize {
    1
}

/// Packing solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Placements in the order they were made
    pub placements: Vec<ExtPlacement>,
    /// Number of bins opened
    pub bins_used: usize,
    /// Sum of the area of the pieces divided by the sum of the area of the opened bins
    pub density: fsize,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub id: String,
    /// One-based bin number
    pub bin: usize,
    pub x: fsize,
    pub y: fsize,
    /// Width after rotation
    pub width: fsize,
    /// Height after rotation
    pub height: fsize,
    pub rotated: bool,
}
