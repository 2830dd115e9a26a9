//! Setup - spawning appliances and cooks with their fittings.

use galley_logic::constants::tuning::{COFFEE_HEATING_AMOUNT, COOK_TIME_PER_LEVEL};
use galley_logic::constants::{prototypes, reagents, slots, solutions};
use galley_logic::items::ItemSize;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::content::{spawn_prototype, Content};
use crate::host;

/// How to build a deep fryer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FryerConfig {
    pub name: String,
    pub cook_time_per_level: f64,
    pub max_item_size: ItemSize,
    /// Starting olive oil in the vat
    pub oil: f32,
    pub powered: bool,
    pub with_basket: bool,
    pub with_filter: bool,
}

impl Default for FryerConfig {
    fn default() -> Self {
        Self {
            name: "deep fryer".to_string(),
            cook_time_per_level: COOK_TIME_PER_LEVEL,
            max_item_size: ItemSize::Normal,
            oil: 30.0,
            powered: true,
            with_basket: true,
            with_filter: true,
        }
    }
}

/// How to build a coffee maker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeeMakerConfig {
    pub name: String,
    pub heating_amount: f32,
    pub powered: bool,
    pub with_beaker: bool,
    /// Grounds reagent and quantity loaded in the basket; `None` for no basket
    pub grounds: Option<(String, f32)>,
    /// `None` for no filter, otherwise whether it is permanent
    pub filter_infinite_uses: Option<bool>,
}

impl Default for CoffeeMakerConfig {
    fn default() -> Self {
        Self {
            name: "coffee maker".to_string(),
            heating_amount: COFFEE_HEATING_AMOUNT,
            powered: true,
            with_beaker: true,
            grounds: Some((reagents::GROUND_COFFEE.to_string(), 10.0)),
            filter_infinite_uses: Some(false),
        }
    }
}

/// Spawn a deep fryer with its vat, basket and filter
pub fn spawn_deep_fryer(world: &mut World, content: &Content, config: &FryerConfig, at: Vec3) -> Entity {
    let fryer = DeepFryer::new()
        .with_cook_time_per_level(config.cook_time_per_level)
        .with_max_item_size(config.max_item_size);
    let containers = Containers::new()
        .with_slot(&fryer.container_id)
        .with_slot(&fryer.basket_slot)
        .with_slot(&fryer.filter_slot);
    let oil = Solutions::new().with(
        fryer.solution_id.clone(),
        Solution::new().with(reagents::OIL_OLIVE, config.oil),
    );

    let station = world.spawn((
        fryer,
        containers,
        oil,
        PowerReceiver {
            powered: config.powered,
        },
        Position(at),
        Name::new(config.name.clone()),
    ));

    if config.with_basket {
        let basket = spawn_prototype(world, content, prototypes::FRYER_BASKET, at);
        let _ = host::insert(world, station, slots::FRYER_BASKET, basket);
    }
    if config.with_filter {
        let filter = spawn_prototype(world, content, prototypes::FRYER_OIL_FILTER, at);
        let _ = world.insert_one(filter, Filter::default());
        let _ = host::insert(world, station, slots::FRYER_FILTER, filter);
    }

    log::debug!("Spawned deep fryer {:?} with {} oil", station, config.oil);
    station
}

/// Spawn a coffee maker with its pitcher, basket and filter
pub fn spawn_coffee_maker(
    world: &mut World,
    content: &Content,
    config: &CoffeeMakerConfig,
    at: Vec3,
) -> Entity {
    let mut maker = CoffeeMaker::new();
    maker.heating_amount = config.heating_amount;

    let station = world.spawn((
        maker,
        Containers::new()
            .with_slot(slots::COFFEE_BEAKER)
            .with_slot(slots::COFFEE_BASKET)
            .with_slot(slots::COFFEE_FILTER),
        PowerReceiver {
            powered: config.powered,
        },
        Position(at),
        Name::new(config.name.clone()),
    ));

    if config.with_beaker {
        let beaker = spawn_prototype(world, content, prototypes::COFFEE_PITCHER, at);
        let _ = world.insert_one(
            beaker,
            Solutions::new().with(solutions::BEAKER_DRINK, Solution::new()),
        );
        let _ = host::insert(world, station, slots::COFFEE_BEAKER, beaker);
    }
    if let Some((reagent, quantity)) = &config.grounds {
        let basket = spawn_prototype(world, content, prototypes::COFFEE_BASKET, at);
        let _ = world.insert_one(
            basket,
            Solutions::new().with(
                solutions::BASKET_FOOD,
                Solution::new().with(reagent.clone(), *quantity),
            ),
        );
        let _ = host::insert(world, station, slots::COFFEE_BASKET, basket);
    }
    if let Some(infinite_uses) = config.filter_infinite_uses {
        let filter = spawn_prototype(world, content, prototypes::COFFEE_FILTER, at);
        let _ = world.insert_one(
            filter,
            Filter {
                dirty: false,
                infinite_uses,
            },
        );
        let _ = host::insert(world, station, slots::COFFEE_FILTER, filter);
    }

    log::debug!("Spawned coffee maker {:?}", station);
    station
}

/// Spawn a cook with empty hands
pub fn spawn_cook(world: &mut World, name: &str, hands: usize, at: Vec3) -> Entity {
    world.spawn((Name::new(name), Hands::new(hands), Position(at)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_deep_fryer_fittings() {
        let content = Content::builtin().unwrap();
        let mut world = World::new();
        let fryer = spawn_deep_fryer(&mut world, &content, &FryerConfig::default(), Vec3::ZERO);

        assert!(!world.get::<&DeepFryer>(fryer).unwrap().enabled);
        assert_eq!(host::contents(&world, fryer, slots::FRYER_BASKET).len(), 1);
        assert_eq!(host::contents(&world, fryer, slots::FRYER_FILTER).len(), 1);
        assert!(host::contents(&world, fryer, slots::FRYER_COOK).is_empty());

        let sols = world.get::<&Solutions>(fryer).unwrap();
        assert_eq!(
            sols.get(solutions::FRYER_OIL).unwrap().quantity(reagents::OIL_OLIVE),
            30.0
        );
    }

    #[test]
    fn test_spawn_bare_fryer() {
        let content = Content::builtin().unwrap();
        let mut world = World::new();
        let config = FryerConfig {
            with_basket: false,
            with_filter: false,
            powered: false,
            ..Default::default()
        };
        let fryer = spawn_deep_fryer(&mut world, &content, &config, Vec3::ZERO);
        assert!(host::is_slot_empty(&world, fryer, slots::FRYER_BASKET));
        assert!(!host::is_powered(&world, fryer));
    }

    #[test]
    fn test_spawn_coffee_maker_fittings() {
        let content = Content::builtin().unwrap();
        let mut world = World::new();
        let maker = spawn_coffee_maker(
            &mut world,
            &content,
            &CoffeeMakerConfig::default(),
            Vec3::ZERO,
        );
        let basket = host::first_in(&world, maker, slots::COFFEE_BASKET).unwrap();
        let sols = world.get::<&Solutions>(basket).unwrap();
        assert_eq!(
            sols.get(solutions::BASKET_FOOD).unwrap().quantity(reagents::GROUND_COFFEE),
            10.0
        );
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: FryerConfig = serde_json::from_str(r#"{ "oil": 50.0 }"#).unwrap();
        assert_eq!(config.oil, 50.0);
        assert_eq!(config.cook_time_per_level, COOK_TIME_PER_LEVEL);
    }
}
