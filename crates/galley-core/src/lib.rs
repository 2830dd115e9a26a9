//! Galley Core - Kitchen Appliance Simulation
//!
//! ECS-based gameplay for kitchen appliances: a deep fryer that cooks items
//! by recipe or fries them up a level ladder until they burn, and a drip
//! coffee maker that brews grounds into a pitcher.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Appliances, cooks, food items, baskets and filters
//! - **Components**: Pure data attached to entities (DeepFryer, Cooking, Solutions, etc.)
//! - **Systems**: Logic that queries and updates components once per tick
//!
//! Rules that need no world access (fried levels, recipes, preconditions)
//! live in `galley-logic`. Systems report visuals, audio and player messages
//! through the [`output`] traits instead of rendering anything.
//!
//! # Example
//!
//! ```rust,no_run
//! use galley_core::prelude::*;
//!
//! let mut engine = KitchenEngine::with_builtin_content().unwrap();
//! let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), Vec3::ZERO);
//! let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
//! engine.toggle_fryer(fryer, cook).unwrap();
//!
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//!     for event in engine.drain_output() {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod components;
pub mod content;
pub mod engine;
pub mod host;
pub mod output;
pub mod setup;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::content::Content;
    pub use crate::engine::KitchenEngine;
    pub use crate::output::{Outbox, OutputEvent, Visual};
    pub use crate::setup::{CoffeeMakerConfig, FryerConfig};
    pub use crate::systems::ToggleOutcome;
}
