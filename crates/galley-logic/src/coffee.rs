//! Coffee brewing table.
//!
//! Each recognized ground reagent brews into one drink reagent at
//! `BREW_MULTIPLIER` times its volume.

use crate::constants::reagents;
use crate::constants::tuning::{BREW_HEAT, BREW_MULTIPLIER};

/// Ground reagents the coffee maker recognizes, in brewing order.
pub const GROUNDS: &[&str] = &[
    reagents::GROUND_COFFEE,
    reagents::MIXED_COFFEE,
    reagents::TAMPERED_COFFEE,
    reagents::MIXED_TAMPERED_COFFEE,
];

pub fn is_grounds(reagent: &str) -> bool {
    GROUNDS.contains(&reagent)
}

/// The drink a ground reagent brews into.
pub fn brewed_reagent(ground: &str) -> Option<&'static str> {
    match ground {
        reagents::GROUND_COFFEE => Some(reagents::COFFEE),
        reagents::MIXED_COFFEE | reagents::TAMPERED_COFFEE => Some(reagents::BAD_COFFEE),
        reagents::MIXED_TAMPERED_COFFEE => Some(reagents::QUALITY_COFFEE),
        _ => None,
    }
}

/// Drink reagent and volume produced by `amount` of `ground`.
pub fn brew_yield(ground: &str, amount: f32) -> Option<(&'static str, f32)> {
    if amount <= 0.0 {
        return None;
    }
    brewed_reagent(ground).map(|drink| (drink, amount * BREW_MULTIPLIER))
}

/// Heat after one frame; returns the new heat and whether the brew is done.
pub fn heat_step(current: f32, heating_amount: f32, dt: f32) -> (f32, bool) {
    let heat = current + heating_amount * dt;
    (heat, heat >= BREW_HEAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brew_table() {
        assert_eq!(
            brew_yield(reagents::GROUND_COFFEE, 10.0),
            Some((reagents::COFFEE, 20.0))
        );
        assert_eq!(
            brew_yield(reagents::TAMPERED_COFFEE, 5.0),
            Some((reagents::BAD_COFFEE, 10.0))
        );
        assert_eq!(
            brew_yield(reagents::MIXED_TAMPERED_COFFEE, 1.0),
            Some((reagents::QUALITY_COFFEE, 2.0))
        );
        assert_eq!(brew_yield("Water", 10.0), None);
        assert_eq!(brew_yield(reagents::GROUND_COFFEE, 0.0), None);
    }

    #[test]
    fn test_heat_step() {
        // 6.5/s reaches 195 after 30 seconds.
        let mut heat = 0.0;
        let mut done = false;
        let mut secs = 0;
        while !done {
            let (h, d) = heat_step(heat, 6.5, 1.0);
            heat = h;
            done = d;
            secs += 1;
        }
        assert_eq!(secs, 30);
    }
}
