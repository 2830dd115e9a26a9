//! Kitchen engine - main entry point the host drives each frame

use galley_logic::fried::FriedLevel;
use galley_logic::preconditions::{DisabledReason, InsertRejection};
use galley_logic::recipes::RecipeDefinition;
use hecs::{Entity, World};

use crate::components::*;
use crate::content::{spawn_prototype, Content, ContentError};
use crate::host::{self, ContainerError};
use crate::output::{Outbox, OutputEvent};
use crate::setup::{self, CoffeeMakerConfig, FryerConfig};
use crate::systems::*;

/// Owns the world, the content and the output queue
pub struct KitchenEngine {
    /// ECS world containing all entities
    pub world: World,
    /// Simulation time in seconds since start
    pub sim_time: f64,
    /// Recipes and prototypes
    pub content: Content,
    /// Presentation and message events not yet drained by the host
    pub outbox: Outbox,

    time_scale: f32,
}

impl KitchenEngine {
    pub fn new(content: Content) -> Self {
        Self {
            world: World::new(),
            sim_time: 0.0,
            content,
            outbox: Outbox::new(),
            time_scale: 1.0,
        }
    }

    /// Engine with the bundled recipes and prototypes
    pub fn with_builtin_content() -> Result<Self, ContentError> {
        Ok(Self::new(Content::builtin()?))
    }

    /// Update the kitchen by delta_seconds
    pub fn update(&mut self, delta_seconds: f32) {
        let scaled_delta = delta_seconds * self.time_scale;
        self.sim_time += scaled_delta as f64;

        deep_fryer_system(
            &mut self.world,
            &self.content,
            self.sim_time,
            scaled_delta as f64,
            &mut self.outbox,
        );
        coffee_maker_system(&mut self.world, &self.content, scaled_delta, &mut self.outbox);
    }

    /// Set time scale (1.0 = real-time, 2.0 = 2x speed, etc.)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    // Spawning

    pub fn spawn_deep_fryer(&mut self, config: &FryerConfig, at: Vec3) -> Entity {
        setup::spawn_deep_fryer(&mut self.world, &self.content, config, at)
    }

    pub fn spawn_coffee_maker(&mut self, config: &CoffeeMakerConfig, at: Vec3) -> Entity {
        setup::spawn_coffee_maker(&mut self.world, &self.content, config, at)
    }

    pub fn spawn_cook(&mut self, name: &str, hands: usize, at: Vec3) -> Entity {
        setup::spawn_cook(&mut self.world, name, hands, at)
    }

    pub fn spawn_item(&mut self, prototype: &str, at: Vec3) -> Entity {
        spawn_prototype(&mut self.world, &self.content, prototype, at)
    }

    /// Destroy an entity and everything inside it. A fryer is torn down
    /// first so its frying loop stops.
    pub fn despawn(&mut self, entity: Entity) {
        teardown_fryer(&mut self.world, entity, &mut self.outbox);
        host::delete(&mut self.world, entity);
    }

    // Interactions

    pub fn toggle_fryer(&mut self, station: Entity, user: Entity) -> Result<ToggleOutcome, DisabledReason> {
        toggle_fryer(&mut self.world, station, user, &mut self.outbox)
    }

    pub fn try_enable_fryer(&mut self, station: Entity, user: Entity) -> Result<(), DisabledReason> {
        try_enable_fryer(&mut self.world, station, user, &mut self.outbox)
    }

    pub fn insert_into_fryer(
        &mut self,
        station: Entity,
        user: Entity,
        item: Entity,
    ) -> Result<(), InsertRejection> {
        insert_into_fryer(&mut self.world, station, user, item, &mut self.outbox)
    }

    pub fn teardown_fryer(&mut self, station: Entity) {
        teardown_fryer(&mut self.world, station, &mut self.outbox)
    }

    pub fn try_enable_coffee_maker(&mut self, station: Entity, user: Entity) -> Result<(), DisabledReason> {
        try_enable_coffee_maker(&mut self.world, station, user, self.sim_time, &mut self.outbox)
    }

    pub fn insert_into_coffee_maker(
        &mut self,
        station: Entity,
        slot: &str,
        item: Entity,
    ) -> Result<(), ContainerError> {
        insert_into_coffee_maker(&mut self.world, station, slot, item, &mut self.outbox)
    }

    pub fn remove_from_coffee_maker(
        &mut self,
        station: Entity,
        slot: &str,
        item: Entity,
    ) -> Result<(), ContainerError> {
        remove_from_coffee_maker(&mut self.world, station, slot, item, &mut self.outbox)
    }

    /// Host-side power change
    pub fn set_powered(&mut self, entity: Entity, powered: bool) {
        if let Ok(mut receiver) = self.world.get::<&mut PowerReceiver>(entity) {
            receiver.powered = powered;
        }
    }

    /// Replace the quantity of one reagent in one of an entity's solutions
    pub fn set_reagent(&mut self, entity: Entity, solution: &str, reagent: &str, quantity: f32) {
        if let Ok(mut solutions) = self.world.get::<&mut Solutions>(entity) {
            if let Some(solution) = solutions.get_mut(solution) {
                solution.set(reagent, quantity);
            }
        }
    }

    // Queries

    pub fn fryer_enabled(&self, station: Entity) -> bool {
        self.world
            .get::<&DeepFryer>(station)
            .map(|f| f.enabled)
            .unwrap_or(false)
    }

    /// Items currently in a fryer's oil
    pub fn fryer_contents(&self, station: Entity) -> Vec<Entity> {
        match self.world.get::<&DeepFryer>(station) {
            Ok(fryer) => host::contents(&self.world, station, &fryer.container_id),
            Err(_) => Vec::new(),
        }
    }

    pub fn fried_level(&self, item: Entity) -> FriedLevel {
        self.world
            .get::<&DeepFried>(item)
            .map(|d| d.level)
            .unwrap_or_default()
    }

    /// Accrued frying time of an item's current stage
    pub fn cook_elapsed(&self, item: Entity) -> Option<f64> {
        self.world
            .get::<&Cooking>(item)
            .ok()
            .map(|c| c.progress.elapsed)
    }

    pub fn prototype_of(&self, entity: Entity) -> Option<String> {
        self.world.get::<&Prototype>(entity).ok().map(|p| p.0.clone())
    }

    pub fn name_of(&self, entity: Entity) -> String {
        host::display_name(&self.world, entity)
    }

    /// Entities spawned from a prototype, in no particular order
    pub fn entities_of(&self, prototype: &str) -> Vec<Entity> {
        self.world
            .query::<&Prototype>()
            .iter()
            .filter(|(_, p)| p.0 == prototype)
            .map(|(e, _)| e)
            .collect()
    }

    /// Guidebook listing for a recipe group
    pub fn recipes_in_group(&self, group: &str) -> Vec<&RecipeDefinition> {
        self.content.catalogue.group(group)
    }

    /// Hand every pending output event to the host
    pub fn drain_output(&mut self) -> Vec<OutputEvent> {
        self.outbox.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = KitchenEngine::with_builtin_content().unwrap();
        assert_eq!(engine.sim_time(), 0.0);
        assert!(!engine.content.catalogue.is_empty());
    }

    #[test]
    fn test_time_scale() {
        let mut engine = KitchenEngine::new(Content::default());
        engine.set_time_scale(2.0);
        engine.update(1.0);
        assert!((engine.sim_time() - 2.0).abs() < 1e-9);

        engine.set_time_scale(-1.0);
        assert_eq!(engine.time_scale(), 0.0);
    }

    #[test]
    fn test_time_scale_speeds_up_frying() {
        let mut engine = KitchenEngine::with_builtin_content().unwrap();
        let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), Vec3::ZERO);
        let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
        engine.try_enable_fryer(fryer, cook).unwrap();
        let potato = engine.spawn_item("FoodPotato", Vec3::ZERO);
        engine.insert_into_fryer(fryer, cook, potato).unwrap();

        engine.set_time_scale(2.0);
        for _ in 0..5 {
            engine.update(1.0);
        }
        let contents = engine.fryer_contents(fryer);
        assert_eq!(contents.len(), 1);
        assert_eq!(engine.prototype_of(contents[0]).as_deref(), Some("FoodFries"));
    }

    #[test]
    fn test_drain_output() {
        let mut engine = KitchenEngine::with_builtin_content().unwrap();
        let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), Vec3::ZERO);
        let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
        engine.toggle_fryer(fryer, cook).unwrap();

        assert!(!engine.drain_output().is_empty());
        assert!(engine.drain_output().is_empty());
    }

    #[test]
    fn test_despawn_running_fryer_stops_loop() {
        let mut engine = KitchenEngine::with_builtin_content().unwrap();
        let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), Vec3::ZERO);
        let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
        engine.try_enable_fryer(fryer, cook).unwrap();
        let potato = engine.spawn_item("FoodPotato", Vec3::ZERO);
        engine.insert_into_fryer(fryer, cook, potato).unwrap();
        engine.update(1.0);
        engine.drain_output();

        engine.despawn(fryer);
        engine.update(1.0);

        let events = engine.drain_output();
        let stops = events
            .iter()
            .filter(|e| matches!(e, OutputEvent::StopSound { .. }))
            .count();
        assert_eq!(stops, 1);
        assert!(!engine.world.contains(fryer));
        assert!(!engine.world.contains(potato));
    }

    #[test]
    fn test_despawn_plain_item() {
        let mut engine = KitchenEngine::with_builtin_content().unwrap();
        let banana = engine.spawn_item("FoodBanana", Vec3::ZERO);
        engine.despawn(banana);
        assert!(!engine.world.contains(banana));
        assert!(engine.drain_output().is_empty());
    }

    #[test]
    fn test_guidebook_group() {
        let engine = KitchenEngine::with_builtin_content().unwrap();
        let snacks = engine.recipes_in_group("Snacks");
        let ids: Vec<&str> = snacks.iter().map(|r| r.id.as_str()).collect();
        // Ordered by display name: "French fries" before "Onion rings".
        assert_eq!(ids, vec!["DeepFryFries", "DeepFryOnionRings"]);
    }
}
