//! Coffee maker system - heats up, brews grounds into the pitcher

use galley_logic::coffee::{brew_yield, heat_step, is_grounds, GROUNDS};
use galley_logic::constants::{messages, prototypes, slots, solutions, sounds};
use galley_logic::preconditions::{check_coffee_enable, CoffeeReadiness, DisabledReason};
use hecs::{Entity, World};

use crate::components::{CoffeeMaker, Filter, Name, Prototype, Solutions};
use crate::content::Content;
use crate::host::{self, ContainerError};
use crate::output::{AudioParams, Message, Output, Visual};

use super::filter_state;

const MAKER_SLOTS: [&str; 3] = [slots::COFFEE_BEAKER, slots::COFFEE_BASKET, slots::COFFEE_FILTER];

pub fn coffee_readiness(world: &World, station: Entity) -> Option<CoffeeReadiness> {
    world.get::<&CoffeeMaker>(station).ok()?;
    let basket = host::first_in(world, station, slots::COFFEE_BASKET);
    let has_grounds = basket
        .and_then(|b| world.get::<&Solutions>(b).ok())
        .map(|sols| {
            sols.get(solutions::BASKET_FOOD)
                .map(|food| food.reagents.iter().any(|(r, q)| is_grounds(r) && *q > 0.0))
                .unwrap_or(false)
        })
        .unwrap_or(false);

    Some(CoffeeReadiness {
        has_beaker: !host::is_slot_empty(world, station, slots::COFFEE_BEAKER),
        has_basket: basket.is_some(),
        filter_dirty: filter_state(world, station, slots::COFFEE_FILTER),
        has_grounds,
        powered: host::is_powered(world, station),
    })
}

/// Start a brew. The maker's slots stay locked until it finishes.
pub fn try_enable_coffee_maker<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    user: Entity,
    now: f64,
    out: &mut O,
) -> Result<(), DisabledReason> {
    let Some(readiness) = coffee_readiness(world, station) else {
        return Err(DisabledReason::NoBeaker);
    };
    let maker_name = host::display_name(world, station);

    if let Err(reason) = check_coffee_enable(&readiness) {
        out.popup(
            station,
            user,
            Message::new(reason.coffee_message()).arg("entity", maker_name),
        );
        return Err(reason);
    }

    if let Ok(mut maker) = world.get::<&mut CoffeeMaker>(station) {
        maker.enabled = true;
        maker.started_at = Some(now);
    }
    host::set_locked(world, station, &MAKER_SLOTS, true);

    out.popup(
        station,
        user,
        Message::new(messages::COFFEE_ENABLED).arg("entity", maker_name.clone()),
    );
    out.popup_others(
        station,
        user,
        Message::new(messages::COFFEE_ENABLED_OTHERS)
            .arg("user", host::display_name(world, user))
            .arg("entity", maker_name),
    );
    Ok(())
}

/// Load a pitcher, basket or filter
pub fn insert_into_coffee_maker<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    slot: &str,
    item: Entity,
    out: &mut O,
) -> Result<(), ContainerError> {
    host::insert(world, station, slot, item)?;
    if let Some(visual) = slot_visual(slot) {
        out.set_visual(station, visual, true);
    }
    Ok(())
}

/// Take a pitcher, basket or filter out. Refused while brewing.
pub fn remove_from_coffee_maker<O: Output + ?Sized>(
    world: &mut World,
    station: Entity,
    slot: &str,
    item: Entity,
    out: &mut O,
) -> Result<(), ContainerError> {
    match host::remove(world, station, slot, item) {
        Ok(()) => {
            if let Some(visual) = slot_visual(slot) {
                out.set_visual(station, visual, false);
            }
            Ok(())
        }
        Err(e @ ContainerError::Locked { .. }) => {
            out.broadcast(station, Message::new(messages::COFFEE_BREWING));
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn slot_visual(slot: &str) -> Option<Visual> {
    match slot {
        slots::COFFEE_BEAKER => Some(Visual::CoffeePitcher),
        slots::COFFEE_BASKET => Some(Visual::CoffeeBasket),
        _ => None,
    }
}

/// Heat every running coffee maker by `dt` seconds and finish ready brews
pub fn coffee_maker_system<O: Output + ?Sized>(
    world: &mut World,
    content: &Content,
    dt: f32,
    out: &mut O,
) {
    let makers: Vec<Entity> = world
        .query::<&CoffeeMaker>()
        .iter()
        .filter(|(_, maker)| maker.enabled)
        .map(|(e, _)| e)
        .collect();

    for station in makers {
        let fittings = (
            host::first_in(world, station, slots::COFFEE_BEAKER),
            host::first_in(world, station, slots::COFFEE_BASKET),
            host::first_in(world, station, slots::COFFEE_FILTER),
        );
        let (Some(beaker), Some(basket), Some(filter)) = fittings else {
            log::debug!("Coffee maker {:?} lost a fitting, stopping", station);
            stop_brewing(world, station);
            continue;
        };

        let done = match world.get::<&mut CoffeeMaker>(station) {
            Ok(mut maker) => {
                let (heat, done) = heat_step(maker.current_heat, maker.heating_amount, dt);
                maker.current_heat = heat;
                done
            }
            Err(_) => continue,
        };
        if !done {
            continue;
        }

        if !brew(world, beaker, basket) {
            log::debug!("Coffee maker {:?} has no grounds or pitcher solution", station);
            stop_brewing(world, station);
            continue;
        }

        let finish_sound = world
            .get::<&CoffeeMaker>(station)
            .ok()
            .and_then(|m| m.finish_sound.clone());
        stop_brewing(world, station);
        if let Some(path) = finish_sound {
            out.play_sound(station, &path, AudioParams::once(sounds::COFFEE_POUR_VOLUME));
        }
        out.broadcast(station, Message::new(messages::COFFEE_COMPLETE));
        dirty_filter(world, content, filter);
        log::debug!("Coffee maker {:?} finished brewing", station);
    }
}

/// Drain the basket's grounds into brewed drink in the pitcher.
/// False if either solution is missing.
fn brew(world: &mut World, beaker: Entity, basket: Entity) -> bool {
    let has_drink = world
        .get::<&Solutions>(beaker)
        .map(|s| s.get(solutions::BEAKER_DRINK).is_some())
        .unwrap_or(false);
    if !has_drink {
        return false;
    }

    let mut brewed = Vec::new();
    {
        let Ok(mut basket_sols) = world.get::<&mut Solutions>(basket) else {
            return false;
        };
        let Some(food) = basket_sols.get_mut(solutions::BASKET_FOOD) else {
            return false;
        };
        for ground in GROUNDS {
            let amount = food.quantity(ground);
            if let Some((drink, volume)) = brew_yield(ground, amount) {
                food.remove(ground, amount);
                brewed.push((drink, volume));
            }
        }
    }

    if let Ok(mut beaker_sols) = world.get::<&mut Solutions>(beaker) {
        if let Some(drink) = beaker_sols.get_mut(solutions::BEAKER_DRINK) {
            for (reagent, volume) in brewed {
                drink.add(reagent, volume);
            }
        }
    }
    true
}

fn stop_brewing(world: &mut World, station: Entity) {
    if let Ok(mut maker) = world.get::<&mut CoffeeMaker>(station) {
        maker.enabled = false;
        maker.current_heat = 0.0;
        maker.started_at = None;
    }
    host::set_locked(world, station, &MAKER_SLOTS, false);
}

/// A used paper filter turns into a dirty one in place
fn dirty_filter(world: &mut World, content: &Content, filter: Entity) {
    let infinite = match world.get::<&mut Filter>(filter) {
        Ok(mut f) if !f.infinite_uses => {
            f.dirty = true;
            false
        }
        _ => true,
    };
    if infinite {
        return;
    }
    if let Ok(mut proto) = world.get::<&mut Prototype>(filter) {
        proto.0 = prototypes::DIRTY_COFFEE_FILTER.to_string();
    }
    if let (Some(dirty), Ok(mut name)) = (
        content.prototype(prototypes::DIRTY_COFFEE_FILTER),
        world.get::<&mut Name>(filter),
    ) {
        name.0 = dirty.name.clone();
    }
}
