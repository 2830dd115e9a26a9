//! Systems - appliance logic that operates on components

mod coffee_maker;
mod deep_fryer;

pub use coffee_maker::*;
pub use deep_fryer::*;

use galley_logic::constants::prototypes;
use hecs::{Entity, World};

use crate::components::{Filter, Prototype};
use crate::host;

/// State of the filter in a slot: `None` when empty, otherwise whether it is dirty.
pub(crate) fn filter_state(world: &World, owner: Entity, slot: &str) -> Option<bool> {
    let filter = host::first_in(world, owner, slot)?;
    let flagged = world.get::<&Filter>(filter).map(|f| f.dirty).unwrap_or(false);
    let dirty_prototype = world
        .get::<&Prototype>(filter)
        .map(|p| p.0 == prototypes::DIRTY_COFFEE_FILTER)
        .unwrap_or(false);
    Some(flagged || dirty_prototype)
}
