//! Pure kitchen appliance logic for Galley.
//!
//! This crate holds the rules of the deep fryer and coffee maker with no
//! ECS or host engine attached. Functions take plain data and return
//! decisions, so the ECS systems in `galley-core` stay thin and every rule
//! is unit-testable on its own.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coffee`] | Ground reagent → brewed reagent table, brew temperature |
//! | [`constants`] | Slot names, reagent/prototype ids, thresholds, sounds, message keys |
//! | [`cooking`] | Cook-time accrual and per-tick cook decisions |
//! | [`fried`] | Fried-level ladder, display-name prefixes, sprite tints |
//! | [`items`] | Item size classes and fit checks |
//! | [`preconditions`] | Enable/insert rejection reasons and their ordered checks |
//! | [`recipes`] | Deep-frying recipe definitions and the validated catalogue |

pub mod coffee;
pub mod constants;
pub mod cooking;
pub mod fried;
pub mod items;
pub mod preconditions;
pub mod recipes;
