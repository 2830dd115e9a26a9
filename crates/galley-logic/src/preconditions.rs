//! Enable and insert preconditions for kitchen appliances.
//!
//! The ECS layer gathers a snapshot of the appliance (slot occupancy, oil
//! levels, power) and these functions decide, in a fixed order, whether the
//! action may proceed. The first failing check wins.

use crate::constants::{messages, tuning::OIL_THRESHOLD};
use crate::fried::FriedLevel;
use crate::items::ItemSize;

/// Why an appliance refused to turn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisabledReason {
    NoOilContainer,
    /// Coffee maker only: no pitcher under the spout.
    NoBeaker,
    NoBasket,
    NoFilter,
    DirtyFilter,
    NoRecognizedSubstance,
    Unpowered,
    Broken,
}

impl DisabledReason {
    /// Localization key for the fryer's rejection message.
    pub fn fryer_message(self) -> &'static str {
        match self {
            Self::NoOilContainer => messages::FRYER_NO_OIL_CONTAINER,
            Self::NoBasket | Self::NoBeaker => messages::FRYER_NO_BASKET,
            Self::NoFilter => messages::FRYER_NO_FILTER,
            Self::DirtyFilter => messages::FRYER_DIRTY_FILTER,
            Self::NoRecognizedSubstance => messages::FRYER_LOW_OIL,
            Self::Unpowered => messages::FRYER_NO_POWER,
            Self::Broken => messages::FRYER_BROKEN,
        }
    }

    /// Localization key for the coffee maker's rejection message.
    pub fn coffee_message(self) -> &'static str {
        match self {
            Self::NoBeaker | Self::NoOilContainer => messages::COFFEE_NO_BEAKER,
            Self::NoBasket => messages::COFFEE_NO_BASKET,
            Self::NoFilter => messages::COFFEE_NO_FILTER,
            Self::DirtyFilter => messages::COFFEE_DIRTY_FILTER,
            Self::NoRecognizedSubstance => messages::COFFEE_NO_GROUNDS,
            Self::Unpowered | Self::Broken => messages::COFFEE_UNPOWERED,
        }
    }
}

/// Oil measurements of a fryer's solution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OilReading {
    /// Total volume of the solution.
    pub volume: f32,
    /// Combined quantity of recognized cooking oils.
    pub cooking_oil: f32,
}

impl OilReading {
    /// Enough oil to fry: both total volume and cooking oil above threshold.
    pub fn sufficient(&self) -> bool {
        self.volume > OIL_THRESHOLD && self.cooking_oil > OIL_THRESHOLD
    }
}

/// Snapshot of a fryer taken before an enable attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FryerReadiness {
    /// `None` when the fryer has no oil solution at all.
    pub oil: Option<OilReading>,
    pub has_basket: bool,
    /// `None` when the filter slot is empty, otherwise whether it is dirty.
    pub filter_dirty: Option<bool>,
    pub powered: bool,
    pub broken: bool,
}

/// Ordered enable checks for the deep fryer.
pub fn check_fryer_enable(r: &FryerReadiness) -> Result<(), DisabledReason> {
    let oil = r.oil.ok_or(DisabledReason::NoOilContainer)?;
    if !r.has_basket {
        return Err(DisabledReason::NoBasket);
    }
    match r.filter_dirty {
        None => return Err(DisabledReason::NoFilter),
        Some(true) => return Err(DisabledReason::DirtyFilter),
        Some(false) => {}
    }
    if !oil.sufficient() {
        return Err(DisabledReason::NoRecognizedSubstance);
    }
    if !r.powered {
        return Err(DisabledReason::Unpowered);
    }
    if r.broken {
        return Err(DisabledReason::Broken);
    }
    Ok(())
}

/// Whether a running fryer may keep frying this tick.
pub fn fryer_sustained(oil: Option<OilReading>, powered: bool) -> bool {
    powered && oil.map(|o| o.sufficient()).unwrap_or(false)
}

/// Snapshot of a coffee maker taken before an enable attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoffeeReadiness {
    pub has_beaker: bool,
    pub has_basket: bool,
    pub filter_dirty: Option<bool>,
    /// Whether the basket holds any recognized grounds.
    pub has_grounds: bool,
    pub powered: bool,
}

/// Ordered enable checks for the coffee maker.
pub fn check_coffee_enable(r: &CoffeeReadiness) -> Result<(), DisabledReason> {
    if !r.has_beaker {
        return Err(DisabledReason::NoBeaker);
    }
    if !r.has_basket {
        return Err(DisabledReason::NoBasket);
    }
    match r.filter_dirty {
        None => return Err(DisabledReason::NoFilter),
        Some(true) => return Err(DisabledReason::DirtyFilter),
        Some(false) => {}
    }
    if !r.has_grounds {
        return Err(DisabledReason::NoRecognizedSubstance);
    }
    if !r.powered {
        return Err(DisabledReason::Unpowered);
    }
    Ok(())
}

/// Why the fryer refused an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertRejection {
    Burnt,
    LowOil,
    Disabled,
    TooLarge,
    AlreadyContained,
    /// The station has no cook container to put things in.
    Unavailable,
}

impl InsertRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::Burnt => messages::FRYER_BURNT_ITEM,
            Self::LowOil => messages::FRYER_LOW_OIL,
            Self::Disabled => messages::FRYER_DISABLED,
            Self::TooLarge => messages::FRYER_LARGE_ITEM,
            Self::AlreadyContained => messages::FRYER_ALREADY_CONTAINED,
            Self::Unavailable => messages::FRYER_DISABLED,
        }
    }
}

/// Snapshot of an item offered to a fryer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertCandidate {
    pub burnt: bool,
    pub size: ItemSize,
    pub contained: bool,
}

impl InsertCandidate {
    pub fn new(level: FriedLevel, burnt_name: bool, size: ItemSize, contained: bool) -> Self {
        Self {
            burnt: level.is_terminal() || burnt_name,
            size,
            contained,
        }
    }
}

/// Ordered insert checks for the deep fryer.
pub fn check_fryer_insert(
    item: &InsertCandidate,
    oil: Option<OilReading>,
    enabled: bool,
    max_size: ItemSize,
) -> Result<(), InsertRejection> {
    if item.burnt {
        return Err(InsertRejection::Burnt);
    }
    if item.contained {
        return Err(InsertRejection::AlreadyContained);
    }
    // No oil solution reads as an empty vat.
    let oil = oil.unwrap_or_default();
    if oil.volume <= OIL_THRESHOLD {
        return Err(InsertRejection::LowOil);
    }
    if !enabled {
        return Err(InsertRejection::Disabled);
    }
    if !item.size.fits(max_size) {
        return Err(InsertRejection::TooLarge);
    }
    Ok(())
}
