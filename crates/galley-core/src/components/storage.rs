//! Storage components: reagent solutions, item containers, hands.
//!
//! Containers and hands carry `hecs::Entity` references and are not serializable.

use std::collections::BTreeMap;

use hecs::Entity;
use serde::{Deserialize, Serialize};

/// A mix of reagents by quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub reagents: BTreeMap<String, f32>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reagent: impl Into<String>, quantity: f32) -> Self {
        self.add(reagent, quantity);
        self
    }

    pub fn volume(&self) -> f32 {
        self.reagents.values().sum()
    }

    pub fn quantity(&self, reagent: &str) -> f32 {
        self.reagents.get(reagent).copied().unwrap_or(0.0)
    }

    pub fn add(&mut self, reagent: impl Into<String>, quantity: f32) {
        if quantity <= 0.0 {
            return;
        }
        *self.reagents.entry(reagent.into()).or_insert(0.0) += quantity;
    }

    /// Remove up to `quantity`; returns how much was actually removed.
    pub fn remove(&mut self, reagent: &str, quantity: f32) -> f32 {
        let Some(current) = self.reagents.get_mut(reagent) else {
            return 0.0;
        };
        let removed = quantity.min(*current).max(0.0);
        *current -= removed;
        if *current <= 0.0 {
            self.reagents.remove(reagent);
        }
        removed
    }

    /// Set a reagent to an exact quantity (zero removes it).
    pub fn set(&mut self, reagent: impl Into<String>, quantity: f32) {
        let reagent = reagent.into();
        if quantity <= 0.0 {
            self.reagents.remove(&reagent);
        } else {
            self.reagents.insert(reagent, quantity);
        }
    }
}

/// Named solutions held by one entity (a fryer's oil, a beaker's drink)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solutions {
    pub solutions: BTreeMap<String, Solution>,
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, solution: Solution) -> Self {
        self.solutions.insert(id.into(), solution);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Solution> {
        self.solutions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Solution> {
        self.solutions.get_mut(id)
    }
}

/// One named slot of a container owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    /// Contained entities in insertion order
    pub contents: Vec<Entity>,
    /// Locked slots refuse normal insert and remove
    pub locked: bool,
}

/// Named container slots on an entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Containers {
    pub slots: BTreeMap<String, Container>,
}

impl Containers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), Container::default());
        self
    }
}

/// Back-reference from a contained entity to its container.
/// An entity is in at most one container at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InContainer {
    pub owner: Entity,
    pub slot: String,
}

/// Hands of a cook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hands {
    pub capacity: usize,
    pub held: Vec<Entity>,
}

impl Hands {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            held: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.held.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_volume() {
        let s = Solution::new().with("OilOlive", 30.0).with("Water", 5.0);
        assert_eq!(s.volume(), 35.0);
        assert_eq!(s.quantity("OilOlive"), 30.0);
        assert_eq!(s.quantity("Milk"), 0.0);
    }

    #[test]
    fn test_solution_remove_clamps() {
        let mut s = Solution::new().with("OilOlive", 10.0);
        assert_eq!(s.remove("OilOlive", 4.0), 4.0);
        assert_eq!(s.remove("OilOlive", 100.0), 6.0);
        assert!(s.reagents.is_empty());
        assert_eq!(s.remove("OilOlive", 1.0), 0.0);
    }

    #[test]
    fn test_hands_full() {
        let mut world = hecs::World::new();
        let mut hands = Hands::new(1);
        assert!(!hands.is_full());
        hands.held.push(world.spawn(()));
        assert!(hands.is_full());
    }
}
