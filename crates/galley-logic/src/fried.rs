//! Fried-level ladder for items that have no deep-frying recipe.
//!
//! Items climb `None → LightlyFried → Fried → Burnt` one step per
//! `cook_time_per_level`. `Burnt` is terminal.

use serde::{Deserialize, Serialize};

/// How far a non-recipe item has been fried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FriedLevel {
    #[default]
    None,
    LightlyFried,
    Fried,
    Burnt,
}

impl FriedLevel {
    /// The next level on the ladder. `Burnt` stays `Burnt`.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::LightlyFried,
            Self::LightlyFried => Self::Fried,
            Self::Fried | Self::Burnt => Self::Burnt,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Burnt
    }

    /// Display-name prefix, including the trailing space.
    pub fn name_prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::LightlyFried => "lightly-fried ",
            Self::Fried => "fried ",
            Self::Burnt => "burnt ",
        }
    }

    /// Sprite tint as a hex colour.
    pub fn tint(self) -> &'static str {
        match self {
            Self::None => "#FFFFFF",
            Self::LightlyFried => "#FFD580",
            Self::Fried => "#954535",
            Self::Burnt => "#0E0504",
        }
    }
}

/// Strip any fried-level prefix from a display name.
pub fn base_name(name: &str) -> &str {
    for level in [FriedLevel::LightlyFried, FriedLevel::Fried, FriedLevel::Burnt] {
        if let Some(rest) = name.strip_prefix(level.name_prefix()) {
            return rest;
        }
    }
    name
}

/// Rename an item for its new fried level, replacing any previous prefix.
pub fn fried_name(name: &str, level: FriedLevel) -> String {
    format!("{}{}", level.name_prefix(), base_name(name))
}

/// Whether a display name marks the item as already burnt.
pub fn is_burnt_name(name: &str) -> bool {
    name.starts_with("burnt") || name.starts_with("burned")
}
