//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod kitchen;
mod storage;

pub use common::*;
pub use kitchen::*;
pub use storage::*;
