//! Item size classes.

use serde::{Deserialize, Serialize};

/// Size class of a holdable item, ordered smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemSize {
    Tiny,
    Small,
    #[default]
    Normal,
    Large,
    Huge,
}

impl ItemSize {
    /// Whether an item of this size fits through an opening of `max`.
    pub fn fits(self, max: ItemSize) -> bool {
        self <= max
    }
}
