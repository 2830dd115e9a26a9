//! Kitchen appliance components: DeepFryer, Cooking, DeepFried, Filter, CoffeeMaker.

use galley_logic::constants::{slots, solutions, sounds, tuning};
use galley_logic::cooking::CookProgress;
use galley_logic::fried::FriedLevel;
use galley_logic::items::ItemSize;
use serde::{Deserialize, Serialize};

use crate::output::SoundHandle;

/// Deep fryer station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepFryer {
    pub enabled: bool,
    pub broken: bool,
    /// Seconds per fried level for items without a recipe
    pub cook_time_per_level: f64,
    /// Largest item that fits in the oil
    pub max_item_size: ItemSize,
    /// Container slot holding the items in the oil
    pub container_id: String,
    /// Solution holding the oil
    pub solution_id: String,
    pub basket_slot: String,
    pub filter_slot: String,
    pub frying_sound: String,
    pub buzzer_sound: String,
    /// Idle frying loop while enabled
    #[serde(skip)]
    pub loop_sound: Option<SoundHandle>,
}

impl Default for DeepFryer {
    fn default() -> Self {
        Self {
            enabled: false,
            broken: false,
            cook_time_per_level: tuning::COOK_TIME_PER_LEVEL,
            max_item_size: ItemSize::Normal,
            container_id: slots::FRYER_COOK.to_string(),
            solution_id: solutions::FRYER_OIL.to_string(),
            basket_slot: slots::FRYER_BASKET.to_string(),
            filter_slot: slots::FRYER_FILTER.to_string(),
            frying_sound: sounds::FRYING_IDLE.to_string(),
            buzzer_sound: sounds::FRYING_BUZZER.to_string(),
            loop_sound: None,
        }
    }
}

impl DeepFryer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cook_time_per_level(mut self, seconds: f64) -> Self {
        self.cook_time_per_level = seconds;
        self
    }

    pub fn with_max_item_size(mut self, size: ItemSize) -> Self {
        self.max_item_size = size;
        self
    }
}

/// Cooking progress of an item in a fryer. Removed on every path that takes
/// the item out of the oil, so a deleted item never leaves a timer behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooking {
    pub progress: CookProgress,
}

/// Fried level of an item without a recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepFried {
    pub level: FriedLevel,
}

/// Filter cartridge used by fryers and coffee makers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub dirty: bool,
    /// Permanent filters never get dirty
    pub infinite_uses: bool,
}

/// Drip coffee maker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeMaker {
    pub enabled: bool,
    /// Heat gained per second while brewing
    pub heating_amount: f32,
    pub current_heat: f32,
    /// Sim time the current brew started
    pub started_at: Option<f64>,
    pub finish_sound: Option<String>,
}

impl Default for CoffeeMaker {
    fn default() -> Self {
        Self {
            enabled: false,
            heating_amount: tuning::COFFEE_HEATING_AMOUNT,
            current_heat: 0.0,
            started_at: None,
            finish_sound: Some(sounds::COFFEE_POUR.to_string()),
        }
    }
}

impl CoffeeMaker {
    pub fn new() -> Self {
        Self::default()
    }
}
