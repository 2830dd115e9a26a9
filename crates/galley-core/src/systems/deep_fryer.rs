//! Deep fryer system - oil, cook timers, recipes and the fried-level ladder

use galley_logic::constants::{messages, prototypes, reagents, sounds, tuning};
use galley_logic::cooking::{next_step, CookProgress, CookStep};
use galley_logic::fried::{fried_name, is_burnt_name, FriedLevel};
use galley_logic::preconditions::{
    check_fryer_enable, check_fryer_insert, fryer_sustained, DisabledReason, FryerReadiness,
    InsertCandidate, InsertRejection, OilReading,
};
use hecs::{Entity, World};

use crate::components::{
    Cooking, DamageType, Damageable, DeepFried, DeepFryer, InContainer, Item, Name, Prototype,
    Solutions,
};
use crate::content::{spawn_prototype, Content};
use crate::host::{self, ContainerError};
use crate::output::{AudioParams, Message, Output, Visual};

use super::filter_state;

/// What a toggle interaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Items were handed back to the user; `enabled` is unchanged
    Evacuated(usize),
    TurnedOn,
    TurnedOff,
    /// Not a fryer
    Ignored,
}

/// Oil measurements of a station's fryer solution
pub fn oil_reading(world: &World, station: Entity, solution_id: &str) -> Option<OilReading> {
    let solutions = world.get::<&Solutions>(station).ok()?;
    let oil = solutions.get(solution_id)?;
    Some(OilReading {
        volume: oil.volume(),
        cooking_oil: reagents::COOKING_OILS.iter().map(|r| oil.quantity(r)).sum(),
    })
}

/// Snapshot of everything the enable checks look at
pub fn fryer_readiness(world: &World, station: Entity) -> Option<FryerReadiness> {
    let fryer = world.get::<&DeepFryer>(station).ok()?;
    Some(FryerReadiness {
        oil: oil_reading(world, station, &fryer.solution_id),
        has_basket: !host::is_slot_empty(world, station, &fryer.basket_slot),
        filter_dirty: filter_state(world, station, &fryer.filter_slot),
        powered: host::is_powered(world, station),
        broken: fryer.broken,
    })
}

/// Try to turn a fryer on. On failure the user is told why and nothing changes.
pub fn try_enable_fryer<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    user: Entity,
    out: &mut O,
) -> Result<(), DisabledReason> {
    // Not a fryer: nothing to report to anyone.
    let Some(readiness) = fryer_readiness(world, station) else {
        return Err(DisabledReason::NoOilContainer);
    };

    if let Err(reason) = check_fryer_enable(&readiness) {
        out.popup(
            station,
            user,
            Message::new(reason.fryer_message()).arg("fryer", host::display_name(world, station)),
        );
        return Err(reason);
    }

    if let Ok(mut fryer) = world.get::<&mut DeepFryer>(station) {
        fryer.enabled = true;
    }
    out.set_visual(station, Visual::FryerActive, true);
    log::debug!("Deep fryer {:?} enabled", station);
    Ok(())
}

/// The fryer's main interaction: grab everything out of the oil, or switch
/// it on or off when it is empty.
pub fn toggle_fryer<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    user: Entity,
    out: &mut O,
) -> Result<ToggleOutcome, DisabledReason> {
    let (enabled, container_id) = match world.get::<&DeepFryer>(station) {
        Ok(fryer) => (fryer.enabled, fryer.container_id.clone()),
        Err(_) => return Ok(ToggleOutcome::Ignored),
    };

    let items = host::contents(world, station, &container_id);
    if !items.is_empty() {
        let fryer_name = host::display_name(world, station);
        let user_name = host::display_name(world, user);
        for item in &items {
            if host::force_remove(world, station, &container_id, *item).is_err() {
                continue;
            }
            host::pickup_or_drop(world, user, *item);

            let item_name = host::display_name(world, *item);
            out.popup(
                station,
                user,
                Message::new(messages::FRYER_GRABBED)
                    .arg("item", item_name.clone())
                    .arg("fryer", fryer_name.clone()),
            );
            out.popup_others(
                station,
                user,
                Message::new(messages::FRYER_GRABBED_OTHERS)
                    .arg("user", user_name.clone())
                    .arg("item", item_name)
                    .arg("fryer", fryer_name.clone()),
            );
        }
        return Ok(ToggleOutcome::Evacuated(items.len()));
    }

    let fryer_name = host::display_name(world, station);
    let user_name = host::display_name(world, user);
    if enabled {
        shut_down(world, station, out);
        out.popup(
            station,
            user,
            Message::new(messages::FRYER_TOGGLE_OFF).arg("fryer", fryer_name.clone()),
        );
        out.popup_others(
            station,
            user,
            Message::new(messages::FRYER_TOGGLE_OFF_OTHERS)
                .arg("user", user_name)
                .arg("fryer", fryer_name),
        );
        Ok(ToggleOutcome::TurnedOff)
    } else {
        try_enable_fryer(world, station, user, out)?;
        out.popup(
            station,
            user,
            Message::new(messages::FRYER_TOGGLE_ON).arg("fryer", fryer_name.clone()),
        );
        out.popup_others(
            station,
            user,
            Message::new(messages::FRYER_TOGGLE_ON_OTHERS)
                .arg("user", user_name)
                .arg("fryer", fryer_name),
        );
        Ok(ToggleOutcome::TurnedOn)
    }
}

/// Drop an item into the oil
pub fn insert_into_fryer<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    user: Entity,
    item: Entity,
    out: &mut O,
) -> Result<(), InsertRejection> {
    let (enabled, max_size, container_id, solution_id) = match world.get::<&DeepFryer>(station) {
        Ok(fryer) => (
            fryer.enabled,
            fryer.max_item_size,
            fryer.container_id.clone(),
            fryer.solution_id.clone(),
        ),
        Err(_) => return Err(InsertRejection::Unavailable),
    };

    let candidate = InsertCandidate::new(
        world.get::<&DeepFried>(item).map(|d| d.level).unwrap_or_default(),
        world.get::<&Name>(item).map(|n| is_burnt_name(&n.0)).unwrap_or(false),
        world.get::<&Item>(item).map(|i| i.size).unwrap_or_default(),
        world.get::<&InContainer>(item).is_ok(),
    );
    let oil = oil_reading(world, station, &solution_id);
    let item_name = host::display_name(world, item);
    let fryer_name = host::display_name(world, station);

    let placed = check_fryer_insert(&candidate, oil, enabled, max_size).and_then(|()| {
        host::insert(world, station, &container_id, item).map_err(|e| match e {
            ContainerError::AlreadyContained(_) => InsertRejection::AlreadyContained,
            _ => InsertRejection::Unavailable,
        })
    });
    if let Err(rejection) = placed {
        out.popup(
            station,
            user,
            Message::new(rejection.message())
                .arg("item", item_name)
                .arg("fryer", fryer_name),
        );
        return Err(rejection);
    }
    // Every stay in the oil starts from zero.
    let _ = world.remove_one::<Cooking>(item);

    if world.get::<&Damageable>(item).is_ok() {
        log::info!(
            "{} put {} inside {}",
            host::display_name(world, user),
            item_name,
            fryer_name
        );
    }
    out.popup(
        station,
        user,
        Message::new(messages::FRYER_INSERTED)
            .arg("item", item_name)
            .arg("fryer", fryer_name),
    );
    Ok(())
}

/// Remove the fryer from a station: stop its loop and forget every cook timer
pub fn teardown_fryer<O: Output + ?Sized>(world: &mut World, station: Entity, out: &mut O) {
    let Ok(fryer) = world.remove_one::<DeepFryer>(station) else {
        return;
    };
    if let Some(handle) = fryer.loop_sound {
        out.stop_sound(handle);
    }
    for item in host::contents(world, station, &fryer.container_id) {
        let _ = world.remove_one::<Cooking>(item);
    }
    log::debug!("Deep fryer {:?} torn down", station);
}

/// Advance every enabled fryer by `dt` seconds, ending at sim time `now`
pub fn deep_fryer_system<O: Output + ?Sized>(
    world: &mut World,
    content: &Content,
    now: f64,
    dt: f64,
    out: &mut O,
) {
    clear_stale_cooking(world);

    let stations: Vec<Entity> = world
        .query::<&DeepFryer>()
        .iter()
        .filter(|(_, fryer)| fryer.enabled)
        .map(|(e, _)| e)
        .collect();

    for station in stations {
        let (container_id, solution_id, cook_time_per_level, buzzer, frying_sound, looping) =
            match world.get::<&DeepFryer>(station) {
                Ok(f) => (
                    f.container_id.clone(),
                    f.solution_id.clone(),
                    f.cook_time_per_level,
                    f.buzzer_sound.clone(),
                    f.frying_sound.clone(),
                    f.loop_sound.is_some(),
                ),
                Err(_) => continue,
            };

        let oil = oil_reading(world, station, &solution_id);
        if !fryer_sustained(oil, host::is_powered(world, station)) {
            log::debug!(
                "Deep fryer {:?} lost power or oil ({:?}), shutting down",
                station,
                oil
            );
            shut_down(world, station, out);
            continue;
        }

        if !looping {
            let handle = out.play_sound(
                station,
                &frying_sound,
                AudioParams::looping(sounds::FRYING_IDLE_VOLUME),
            );
            if let Ok(mut fryer) = world.get::<&mut DeepFryer>(station) {
                fryer.loop_sound = Some(handle);
            }
        }

        let mut pass = FryPass {
            world: &mut *world,
            content,
            out: &mut *out,
            station,
            container_id: &container_id,
            cook_time_per_level,
            buzzer: &buzzer,
            now,
            dt,
        };
        for item in host::contents(pass.world, station, &container_id) {
            pass.fry_item(item);
        }
    }
}

/// Switch a fryer off: flag, visual and loop sound. Cook timers freeze.
fn shut_down<O: Output + ?Sized>(world: &mut World, station: Entity, out: &mut O) {
    let handle = match world.get::<&mut DeepFryer>(station) {
        Ok(mut fryer) => {
            fryer.enabled = false;
            fryer.loop_sound.take()
        }
        Err(_) => return,
    };
    out.set_visual(station, Visual::FryerActive, false);
    if let Some(handle) = handle {
        out.stop_sound(handle);
    }
}

/// Drop cook timers from items that are no longer in a fryer's oil
fn clear_stale_cooking(world: &mut World) {
    let stale: Vec<Entity> = world
        .query::<(&Cooking, Option<&InContainer>)>()
        .iter()
        .filter(|(_, (_, held))| match held {
            Some(held) => !world
                .get::<&DeepFryer>(held.owner)
                .map(|f| f.container_id == held.slot)
                .unwrap_or(false),
            None => true,
        })
        .map(|(e, _)| e)
        .collect();
    for item in stale {
        let _ = world.remove_one::<Cooking>(item);
    }
}

/// One station's frying pass over its contents
struct FryPass<'a, O: Output + ?Sized> {
    world: &'a mut World,
    content: &'a Content,
    out: &'a mut O,
    station: Entity,
    container_id: &'a str,
    cook_time_per_level: f64,
    buzzer: &'a str,
    now: f64,
    dt: f64,
}

impl<'a, O: Output + ?Sized> FryPass<'a, O> {
    fn fry_item(&mut self, item: Entity) {
        let accrued = self
            .world
            .get::<&mut Cooking>(item)
            .ok()
            .map(|mut cooking| {
                cooking.progress.accrue(self.now, self.dt);
                cooking.progress
            });
        let progress = match accrued {
            Some(progress) => progress,
            None => {
                let mut progress = CookProgress::default();
                progress.accrue(self.now, self.dt);
                let _ = self.world.insert_one(item, Cooking { progress });
                progress
            }
        };

        let content = self.content;
        let recipe = self
            .world
            .get::<&Prototype>(item)
            .ok()
            .and_then(|p| content.catalogue.find(&p.0));
        let level = self
            .world
            .get::<&DeepFried>(item)
            .map(|d| d.level)
            .unwrap_or_default();

        match next_step(&progress, recipe, level, self.cook_time_per_level) {
            CookStep::Wait => {}
            CookStep::Complete(recipe) => self.complete_recipe(item, &recipe.id, &recipe.result),
            CookStep::Advance(next) => self.advance_level(item, next),
        }
    }

    /// Swap the ingredient for the recipe's result, in the same slot
    fn complete_recipe(&mut self, item: Entity, recipe_id: &str, result: &str) {
        let _ = host::force_remove(self.world, self.station, self.container_id, item);
        host::delete(self.world, item);

        let at = host::position_of(self.world, self.station);
        let cooked = spawn_prototype(self.world, self.content, result, at);
        if let Err(e) = host::insert(self.world, self.station, self.container_id, cooked) {
            log::warn!("Could not place {} from recipe {}: {}", result, recipe_id, e);
        }
        self.buzz();
        log::debug!("Recipe {} finished in {:?}", recipe_id, self.station);
    }

    fn advance_level(&mut self, item: Entity, next: FriedLevel) {
        let _ = self.world.insert_one(item, DeepFried { level: next });
        if let Ok(mut cooking) = self.world.get::<&mut Cooking>(item) {
            cooking.progress.restart(self.now);
        }
        if let Ok(mut damageable) = self.world.get::<&mut Damageable>(item) {
            damageable.apply(DamageType::Heat, tuning::FRY_HEAT_DAMAGE);
        }
        if let Ok(mut name) = self.world.get::<&mut Name>(item) {
            let renamed = fried_name(&name.0, next);
            name.0 = renamed;
        }
        self.out.set_tint(item, next.tint());
        self.buzz();

        if next.is_terminal() {
            let _ = host::force_remove(self.world, self.station, self.container_id, item);
            host::delete(self.world, item);
            let at = host::position_of(self.world, self.station);
            spawn_prototype(self.world, self.content, prototypes::RUINED_FOOD, at);
            log::debug!("{:?} burnt in {:?}", item, self.station);
        }
    }

    fn buzz(&mut self) {
        self.out.play_sound(
            self.station,
            self.buzzer,
            AudioParams::once(sounds::BUZZER_VOLUME),
        );
    }
}
