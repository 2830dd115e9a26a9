//! Cook-time accrual and per-tick cook decisions.
//!
//! Progress is accrued only while a fryer is actively frying, so a power cut
//! or an oil drop freezes it rather than discarding it.

use serde::{Deserialize, Serialize};

use crate::fried::FriedLevel;
use crate::recipes::RecipeDefinition;

/// Slack for float accumulation when comparing accrued time to a threshold.
const TIME_EPSILON: f64 = 1e-9;

/// Per-item cooking progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CookProgress {
    /// Sim time at which the current cook stage was first observed.
    pub started_at: Option<f64>,
    /// Seconds of active frying since the current stage started.
    pub elapsed: f64,
}

impl CookProgress {
    /// Account for one active frame of `dt` seconds ending at `now`.
    ///
    /// An item seen for the first time is stamped and credited with the
    /// whole frame.
    pub fn accrue(&mut self, now: f64, dt: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now - dt);
        }
        self.elapsed += dt.max(0.0);
    }

    /// Start a new stage at `now` with no accrued time.
    ///
    /// Time past the previous stage's threshold is dropped, so with uneven
    /// frames a stage can run up to one frame longer than its nominal time.
    pub fn restart(&mut self, now: f64) {
        self.started_at = Some(now);
        self.elapsed = 0.0;
    }

    pub fn has_reached(&self, seconds: f64) -> bool {
        self.elapsed + TIME_EPSILON >= seconds
    }
}

/// What the fryer should do with one item this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CookStep<'a> {
    /// Not done yet.
    Wait,
    /// Replace the item with the recipe's result.
    Complete(&'a RecipeDefinition),
    /// Move the item to the given fried level.
    Advance(FriedLevel),
}

/// Decide the next step for an item.
///
/// A matching recipe always wins; the fried-level ladder only applies to
/// items without one.
pub fn next_step<'a>(
    progress: &CookProgress,
    recipe: Option<&'a RecipeDefinition>,
    level: FriedLevel,
    cook_time_per_level: f64,
) -> CookStep<'a> {
    match recipe {
        Some(recipe) => {
            if progress.has_reached(recipe.cook_time_secs()) {
                CookStep::Complete(recipe)
            } else {
                CookStep::Wait
            }
        }
        None => {
            if level.is_terminal() || !progress.has_reached(cook_time_per_level) {
                CookStep::Wait
            } else {
                CookStep::Advance(level.next())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(secs: u32) -> RecipeDefinition {
        RecipeDefinition::new("RecipeFries", "FoodPotato", secs, "FoodFries")
    }

    #[test]
    fn test_accrue_stamps_once() {
        let mut p = CookProgress::default();
        p.accrue(1.0, 1.0);
        assert_eq!(p.started_at, Some(0.0));
        p.accrue(2.0, 1.0);
        assert_eq!(p.started_at, Some(0.0));
        assert!((p.elapsed - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_recipe_waits_until_cook_time() {
        let r = recipe(10);
        let mut p = CookProgress::default();
        for t in 1..10 {
            p.accrue(t as f64, 1.0);
            assert_eq!(next_step(&p, Some(&r), FriedLevel::None, 15.0), CookStep::Wait);
        }
        p.accrue(10.0, 1.0);
        assert_eq!(next_step(&p, Some(&r), FriedLevel::None, 15.0), CookStep::Complete(&r));
    }

    #[test]
    fn test_recipe_beats_ladder() {
        // Past the per-level time but short of the recipe: still waiting.
        let r = recipe(30);
        let p = CookProgress {
            started_at: Some(0.0),
            elapsed: 20.0,
        };
        assert_eq!(next_step(&p, Some(&r), FriedLevel::None, 15.0), CookStep::Wait);
    }

    #[test]
    fn test_ladder_advances_one_step() {
        let p = CookProgress {
            started_at: Some(0.0),
            elapsed: 100.0,
        };
        assert_eq!(
            next_step(&p, None, FriedLevel::None, 15.0),
            CookStep::Advance(FriedLevel::LightlyFried)
        );
        assert_eq!(
            next_step(&p, None, FriedLevel::Fried, 15.0),
            CookStep::Advance(FriedLevel::Burnt)
        );
        assert_eq!(next_step(&p, None, FriedLevel::Burnt, 15.0), CookStep::Wait);
    }

    #[test]
    fn test_small_frames_reach_threshold() {
        let r = recipe(10);
        let mut p = CookProgress::default();
        let dt = 1.0 / 60.0;
        let mut now = 0.0;
        for _ in 0..600 {
            now += dt;
            p.accrue(now, dt);
        }
        assert_eq!(next_step(&p, Some(&r), FriedLevel::None, 15.0), CookStep::Complete(&r));
    }

    #[test]
    fn test_restart_clears_elapsed() {
        let mut p = CookProgress {
            started_at: Some(0.0),
            elapsed: 15.0,
        };
        p.restart(15.0);
        assert_eq!(p.started_at, Some(15.0));
        assert_eq!(p.elapsed, 0.0);
    }
}
