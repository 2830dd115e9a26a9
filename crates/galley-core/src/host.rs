//! Host engine services the kitchen systems rely on: named containers with
//! exclusive membership, hands, power, naming and entity deletion.
//!
//! All operations are tolerant of missing data. Lookups on entities without
//! the relevant component return empty results instead of failing.

use hecs::{Entity, World};

use crate::components::{
    Containers, Cooking, Hands, InContainer, Name, Position, PowerReceiver, Prototype, Vec3,
};

/// Errors from container operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    NoSuchEntity(Entity),
    NoSuchSlot { owner: Entity, slot: String },
    /// The slot is locked while its appliance runs
    Locked { owner: Entity, slot: String },
    AlreadyContained(Entity),
    NotContained(Entity),
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerError::NoSuchEntity(e) => write!(f, "entity {:?} does not exist", e),
            ContainerError::NoSuchSlot { owner, slot } => {
                write!(f, "{:?} has no container slot '{}'", owner, slot)
            }
            ContainerError::Locked { owner, slot } => {
                write!(f, "container slot '{}' on {:?} is locked", slot, owner)
            }
            ContainerError::AlreadyContained(e) => {
                write!(f, "{:?} is already inside a container", e)
            }
            ContainerError::NotContained(e) => {
                write!(f, "{:?} is not inside that container", e)
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Entities in a slot, in insertion order. Empty if the slot is missing.
pub fn contents(world: &World, owner: Entity, slot: &str) -> Vec<Entity> {
    world
        .get::<&Containers>(owner)
        .ok()
        .and_then(|c| c.slots.get(slot).map(|s| s.contents.clone()))
        .unwrap_or_default()
}

pub fn first_in(world: &World, owner: Entity, slot: &str) -> Option<Entity> {
    contents(world, owner, slot).first().copied()
}

pub fn is_slot_empty(world: &World, owner: Entity, slot: &str) -> bool {
    first_in(world, owner, slot).is_none()
}

/// The container currently holding `item`, if any.
pub fn container_of(world: &World, item: Entity) -> Option<InContainer> {
    world.get::<&InContainer>(item).ok().map(|c| (*c).clone())
}

/// Put `item` into `owner`'s `slot`. Membership is exclusive.
pub fn insert(world: &mut World, owner: Entity, slot: &str, item: Entity) -> Result<(), ContainerError> {
    if !world.contains(item) {
        return Err(ContainerError::NoSuchEntity(item));
    }
    if world.get::<&InContainer>(item).is_ok() {
        return Err(ContainerError::AlreadyContained(item));
    }

    {
        let mut containers = world
            .get::<&mut Containers>(owner)
            .map_err(|_| ContainerError::NoSuchSlot {
                owner,
                slot: slot.to_string(),
            })?;
        let container = containers
            .slots
            .get_mut(slot)
            .ok_or_else(|| ContainerError::NoSuchSlot {
                owner,
                slot: slot.to_string(),
            })?;
        if container.locked {
            return Err(ContainerError::Locked {
                owner,
                slot: slot.to_string(),
            });
        }
        container.contents.push(item);
    }

    release_from_hands(world, item);
    let position = position_of(world, owner);
    world.insert(
        item,
        (
            InContainer {
                owner,
                slot: slot.to_string(),
            },
            Position(position),
        ),
    )
    .map_err(|_| ContainerError::NoSuchEntity(item))
}

/// Take `item` out of `owner`'s `slot`, honouring the slot lock.
///
/// Leaving a container ends any cooking in progress.
pub fn remove(world: &mut World, owner: Entity, slot: &str, item: Entity) -> Result<(), ContainerError> {
    take_out(world, owner, slot, item, false)
}

/// Take `item` out of `owner`'s `slot` even if the slot is locked.
pub fn force_remove(world: &mut World, owner: Entity, slot: &str, item: Entity) -> Result<(), ContainerError> {
    take_out(world, owner, slot, item, true)
}

fn take_out(
    world: &mut World,
    owner: Entity,
    slot: &str,
    item: Entity,
    force: bool,
) -> Result<(), ContainerError> {
    {
        let mut containers = world
            .get::<&mut Containers>(owner)
            .map_err(|_| ContainerError::NoSuchSlot {
                owner,
                slot: slot.to_string(),
            })?;
        let container = containers
            .slots
            .get_mut(slot)
            .ok_or_else(|| ContainerError::NoSuchSlot {
                owner,
                slot: slot.to_string(),
            })?;
        if container.locked && !force {
            return Err(ContainerError::Locked {
                owner,
                slot: slot.to_string(),
            });
        }
        let idx = container
            .contents
            .iter()
            .position(|e| *e == item)
            .ok_or(ContainerError::NotContained(item))?;
        container.contents.remove(idx);
    }

    let _ = world.remove_one::<InContainer>(item);
    let _ = world.remove_one::<Cooking>(item);
    Ok(())
}

/// Lock or unlock slots on an owner. Missing slots are ignored.
pub fn set_locked(world: &mut World, owner: Entity, slots: &[&str], locked: bool) {
    if let Ok(mut containers) = world.get::<&mut Containers>(owner) {
        for slot in slots {
            if let Some(container) = containers.slots.get_mut(*slot) {
                container.locked = locked;
            }
        }
    }
}

/// Delete an entity, detaching it from whatever holds it first.
/// Anything it contains is deleted with it.
pub fn delete(world: &mut World, entity: Entity) {
    if let Some(held_in) = container_of(world, entity) {
        let _ = force_remove(world, held_in.owner, &held_in.slot, entity);
    }
    release_from_hands(world, entity);

    let inner: Vec<Entity> = world
        .get::<&Containers>(entity)
        .map(|c| c.slots.values().flat_map(|s| s.contents.iter().copied()).collect())
        .unwrap_or_default();
    for child in inner {
        delete(world, child);
    }

    let _ = world.despawn(entity);
}

/// Put an item in a cook's hand, or drop it at their feet if hands are full.
/// Returns true if the item ended up in hand.
pub fn pickup_or_drop(world: &mut World, user: Entity, item: Entity) -> bool {
    let user_pos = position_of(world, user);
    let picked = match world.get::<&mut Hands>(user) {
        Ok(mut hands) if !hands.is_full() => {
            hands.held.push(item);
            true
        }
        _ => false,
    };
    let _ = world.insert_one(item, Position(user_pos));
    picked
}

fn release_from_hands(world: &mut World, item: Entity) {
    for (_, hands) in world.query_mut::<&mut Hands>() {
        hands.held.retain(|e| *e != item);
    }
}

pub fn is_powered(world: &World, entity: Entity) -> bool {
    world
        .get::<&PowerReceiver>(entity)
        .map(|p| p.powered)
        .unwrap_or(false)
}

pub fn position_of(world: &World, entity: Entity) -> Vec3 {
    world
        .get::<&Position>(entity)
        .map(|p| p.0)
        .unwrap_or(Vec3::ZERO)
}

/// Name used in player-facing messages
pub fn display_name(world: &World, entity: Entity) -> String {
    if let Ok(name) = world.get::<&Name>(entity) {
        return name.0.clone();
    }
    if let Ok(proto) = world.get::<&Prototype>(entity) {
        return proto.0.clone();
    }
    format!("{:?}", entity)
}
