//! Common components used across multiple entity types.

use std::collections::BTreeMap;

use galley_logic::items::ItemSize;
use serde::{Deserialize, Serialize};

/// 3D position vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// Where an entity sits in the world. Items inside a container or a hand
/// share their holder's position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position(pub Vec3);

/// Display name, rewritten by frying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content prototype the entity was spawned from. Recipes match on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prototype(pub String);

/// Marks a holdable item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub size: ItemSize,
}

/// Power connection of a machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerReceiver {
    pub powered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Blunt,
    Heat,
    Cold,
}

/// Entities that take damage. Damage only accumulates here; what it means
/// (death, destruction) is decided elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Damageable {
    pub damage: BTreeMap<DamageType, f32>,
}

impl Damageable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, kind: DamageType, amount: f32) {
        *self.damage.entry(kind).or_insert(0.0) += amount;
    }

    pub fn get(&self, kind: DamageType) -> f32 {
        self.damage.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f32 {
        self.damage.values().sum()
    }
}
