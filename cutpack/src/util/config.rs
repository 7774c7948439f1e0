use serde::{Deserialize, Serialize};

/// Configuration of a pack run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PackerConfig {
    /// Whether pieces may be rotated by 90 degrees
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// How the free space of each bin is tracked
    #[serde(default)]
    pub free_space: FreeSpaceModel,
}

fn default_allow_rotation() -> bool {
    true
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            allow_rotation: default_allow_rotation(),
            free_space: FreeSpaceModel::default(),
        }
    }
}

/// Strategy for updating the free regions of a bin after a placement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreeSpaceModel {
    /// The hosting region is split by a straight cut into at most two disjoint residuals
    #[default]
    Guillotine,
    /// Every overlapped region is replaced by its maximal free slivers, redundant regions are pruned
    MaximalRectangles,
}
