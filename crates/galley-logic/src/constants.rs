//! Game constants: slot names, reagent and prototype ids, thresholds.
//!
//! Plain `&str`/`f32` constants shared by the ECS systems, the content
//! loader and the headless harness.

pub mod slots {
    /// Items currently in the oil.
    pub const FRYER_COOK: &str = "fryer_slots";
    pub const FRYER_BASKET: &str = "basket";
    pub const FRYER_FILTER: &str = "filter";

    pub const COFFEE_BEAKER: &str = "beaker";
    pub const COFFEE_BASKET: &str = "basket";
    pub const COFFEE_FILTER: &str = "filter";
}

pub mod solutions {
    /// The fryer's own oil solution.
    pub const FRYER_OIL: &str = "fryer";
    /// Solution on a coffee basket that holds the grounds.
    pub const BASKET_FOOD: &str = "food";
    /// Solution on the coffee pitcher that receives the brew.
    pub const BEAKER_DRINK: &str = "drink";
}

pub mod reagents {
    pub const OIL_OLIVE: &str = "OilOlive";

    /// Reagents the fryer accepts as cooking oil.
    pub const COOKING_OILS: &[&str] = &[OIL_OLIVE];

    pub const GROUND_COFFEE: &str = "TP14ReagentGroundCoffee";
    pub const MIXED_COFFEE: &str = "TP14ReagentMixedCoffee";
    pub const TAMPERED_COFFEE: &str = "TP14ReagentTamperedCoffee";
    pub const MIXED_TAMPERED_COFFEE: &str = "TP14ReagentMixedTamperedCoffee";

    pub const COFFEE: &str = "Coffee";
    pub const BAD_COFFEE: &str = "TP14ReagentBadCoffee";
    pub const QUALITY_COFFEE: &str = "TP14ReagentQualityCoffee";
}

pub mod prototypes {
    /// Placeholder left behind when a fried item burns.
    pub const RUINED_FOOD: &str = "FoodBadRecipe";
    pub const FRYER_BASKET: &str = "FryerBasket";
    pub const FRYER_OIL_FILTER: &str = "FryerOilFilter";
    pub const COFFEE_PITCHER: &str = "TP14CoffeePitcher";
    pub const COFFEE_BASKET: &str = "TP14CoffeeBasket";
    pub const COFFEE_FILTER: &str = "TP14CoffeeFilter";
    pub const DIRTY_COFFEE_FILTER: &str = "TP14CoffeeFilterDirty";
}

pub mod sounds {
    pub const FRYING_IDLE: &str = "/Audio/_TP/Machines/Kitchen/frying_idle.ogg";
    pub const FRYING_BUZZER: &str = "/Audio/_TP/Machines/Kitchen/frying_buzzer.ogg";
    pub const COFFEE_POUR: &str = "/Audio/_TP/Machines/Kitchen/coffee-pour.ogg";

    /// Volume offsets in decibels.
    pub const FRYING_IDLE_VOLUME: f32 = -3.0;
    pub const BUZZER_VOLUME: f32 = -5.0;
    pub const COFFEE_POUR_VOLUME: f32 = -3.0;
}

pub mod tuning {
    /// Oil volume (and cooking-oil quantity) must be strictly above this.
    pub const OIL_THRESHOLD: f32 = 25.0;
    /// Seconds between fried levels for items without a recipe.
    pub const COOK_TIME_PER_LEVEL: f64 = 15.0;
    /// Recipe cook time when the content omits one.
    pub const DEFAULT_RECIPE_COOK_TIME: u32 = 5;
    /// Heat damage applied on every fried-level step.
    pub const FRY_HEAT_DAMAGE: f32 = 100.0;

    /// Coffee maker heat gained per second.
    pub const COFFEE_HEATING_AMOUNT: f32 = 6.5;
    /// Coffee maker heat at which a brew completes.
    pub const BREW_HEAT: f32 = 195.0;
    /// Brewed volume per unit of grounds.
    pub const BREW_MULTIPLIER: f32 = 2.0;
}

/// Localization keys for player-facing messages.
pub mod messages {
    pub const FRYER_NO_POWER: &str = "deep-fryer-no-power";
    pub const FRYER_BROKEN: &str = "deep-fryer-message-broken";
    pub const FRYER_LOW_OIL: &str = "deep-fryer-message-low-oil";
    pub const FRYER_NO_OIL_CONTAINER: &str = "deep-fryer-message-no-oil-container";
    pub const FRYER_NO_BASKET: &str = "deep-fryer-message-no-basket";
    pub const FRYER_NO_FILTER: &str = "deep-fryer-message-no-filter";
    pub const FRYER_DIRTY_FILTER: &str = "deep-fryer-message-dirty-filter";
    pub const FRYER_DISABLED: &str = "deep-fryer-message-disabled";
    pub const FRYER_BURNT_ITEM: &str = "deep-fryer-message-burnt-item";
    pub const FRYER_LARGE_ITEM: &str = "deep-fryer-message-large-item";
    pub const FRYER_ALREADY_CONTAINED: &str = "deep-fryer-message-already-contained";
    pub const FRYER_INSERTED: &str = "deep-fryer-message-inserted";
    pub const FRYER_GRABBED: &str = "deep-fryer-message-grabbed-item";
    pub const FRYER_GRABBED_OTHERS: &str = "deep-fryer-message-grabbed-item-others";
    pub const FRYER_TOGGLE_ON: &str = "deep-fryer-message-toggle-on";
    pub const FRYER_TOGGLE_ON_OTHERS: &str = "deep-fryer-message-toggle-on-others";
    pub const FRYER_TOGGLE_OFF: &str = "deep-fryer-message-toggle-off";
    pub const FRYER_TOGGLE_OFF_OTHERS: &str = "deep-fryer-message-toggle-off-others";

    pub const COFFEE_NO_BEAKER: &str = "coffee-maker-message-no-beaker";
    pub const COFFEE_NO_BASKET: &str = "coffee-maker-message-no-basket";
    pub const COFFEE_NO_FILTER: &str = "coffee-maker-message-no-filter";
    pub const COFFEE_DIRTY_FILTER: &str = "coffee-maker-message-dirty-filter";
    pub const COFFEE_NO_GROUNDS: &str = "coffee-maker-message-no-grounds";
    pub const COFFEE_UNPOWERED: &str = "coffee-maker-message-unpowered";
    pub const COFFEE_ENABLED: &str = "coffee-maker-message-enabled";
    pub const COFFEE_ENABLED_OTHERS: &str = "coffee-maker-message-enabled-other";
    pub const COFFEE_BREWING: &str = "coffee-maker-message-brewing";
    pub const COFFEE_COMPLETE: &str = "coffee-maker-message-complete";
}
