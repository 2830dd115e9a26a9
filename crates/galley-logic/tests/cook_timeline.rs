//! Integration tests for the pure cook timeline.
//!
//! Exercises: RecipeCatalogue → CookProgress accrual → next_step decisions
//! → FriedLevel ladder, without any ECS.

use galley_logic::constants::tuning::{COOK_TIME_PER_LEVEL, OIL_THRESHOLD};
use galley_logic::cooking::{next_step, CookProgress, CookStep};
use galley_logic::fried::{fried_name, FriedLevel};
use galley_logic::preconditions::{fryer_sustained, OilReading};
use galley_logic::recipes::{RecipeCatalogue, RecipeDefinition};

// ── Helpers ────────────────────────────────────────────────────────────

fn catalogue() -> RecipeCatalogue {
    RecipeCatalogue::new(vec![
        RecipeDefinition::new("DeepFryFries", "FoodPotato", 10, "FoodFries"),
        RecipeDefinition::new("DeepFryChicken", "FoodChickenLeg", 25, "FoodFriedChicken"),
    ])
    .expect("valid catalogue")
}

/// Minimal single-item fryer loop. Returns the time the recipe completed or
/// the levels seen, stopping at Burnt.
struct Timeline {
    progress: CookProgress,
    level: FriedLevel,
    now: f64,
}

impl Timeline {
    fn new() -> Self {
        Self {
            progress: CookProgress::default(),
            level: FriedLevel::None,
            now: 0.0,
        }
    }

    /// One frame; `active` false models a disabled fryer.
    fn frame<'a>(
        &mut self,
        recipe: Option<&'a RecipeDefinition>,
        dt: f64,
        active: bool,
    ) -> CookStep<'a> {
        self.now += dt;
        if !active {
            return CookStep::Wait;
        }
        self.progress.accrue(self.now, dt);
        let step = next_step(&self.progress, recipe, self.level, COOK_TIME_PER_LEVEL);
        if let CookStep::Advance(next) = step {
            self.level = next;
            self.progress.restart(self.now);
        }
        step
    }
}

// ── Recipes ────────────────────────────────────────────────────────────

#[test]
fn recipe_completes_on_tenth_second() {
    let catalogue = catalogue();
    let recipe = catalogue.find("FoodPotato");
    let mut t = Timeline::new();

    for _ in 0..9 {
        assert_eq!(t.frame(recipe, 1.0, true), CookStep::Wait);
    }
    assert!(matches!(t.frame(recipe, 1.0, true), CookStep::Complete(r) if r.result == "FoodFries"));
}

#[test]
fn recipe_never_fries() {
    let catalogue = catalogue();
    let recipe = catalogue.find("FoodChickenLeg");
    let mut t = Timeline::new();
    for _ in 0..24 {
        assert_eq!(t.frame(recipe, 1.0, true), CookStep::Wait);
    }
    assert_eq!(t.level, FriedLevel::None);
}

#[test]
fn inactive_frames_do_not_count() {
    let catalogue = catalogue();
    let recipe = catalogue.find("FoodPotato");
    let mut t = Timeline::new();

    for _ in 0..5 {
        t.frame(recipe, 1.0, true);
    }
    for _ in 0..95 {
        t.frame(recipe, 1.0, false);
    }
    assert!((t.progress.elapsed - 5.0).abs() < 1e-9);

    for _ in 0..4 {
        assert_eq!(t.frame(recipe, 1.0, true), CookStep::Wait);
    }
    assert!(matches!(t.frame(recipe, 1.0, true), CookStep::Complete(_)));
    assert!((t.now - 105.0).abs() < 1e-9);
}

// ── Ladder ─────────────────────────────────────────────────────────────

#[test]
fn ladder_timeline_without_recipe() {
    let catalogue = catalogue();
    let recipe = catalogue.find("FoodBanana");
    assert!(recipe.is_none());

    let mut t = Timeline::new();
    let mut changes = Vec::new();
    for _ in 0..60 {
        if let CookStep::Advance(level) = t.frame(recipe, 1.0, true) {
            changes.push((t.now as u32, level));
        }
    }
    assert_eq!(
        changes,
        vec![
            (15, FriedLevel::LightlyFried),
            (30, FriedLevel::Fried),
            (45, FriedLevel::Burnt),
        ]
    );
}

#[test]
fn uneven_frames_drop_the_overshoot() {
    let mut t = Timeline::new();
    let mut frames = Vec::new();
    for frame in 1..=50 {
        if let CookStep::Advance(_) = t.frame(None, 0.7, true) {
            frames.push(frame);
        }
    }
    // 22 frames of 0.7 s reach 15 s; the next stage needs another 22.
    assert_eq!(frames, vec![22, 44]);
    assert!((t.progress.elapsed - 4.2).abs() < 1e-6);
}

#[test]
fn names_follow_the_ladder() {
    let mut name = "banana".to_string();
    for level in [FriedLevel::LightlyFried, FriedLevel::Fried, FriedLevel::Burnt] {
        name = fried_name(&name, level);
    }
    assert_eq!(name, "burnt banana");
}

// ── Sustain ────────────────────────────────────────────────────────────

#[test]
fn oil_sustain_boundary() {
    let at = OilReading {
        volume: OIL_THRESHOLD,
        cooking_oil: OIL_THRESHOLD,
    };
    let above = OilReading {
        volume: OIL_THRESHOLD + 0.5,
        cooking_oil: OIL_THRESHOLD + 0.5,
    };
    assert!(!fryer_sustained(Some(at), true));
    assert!(fryer_sustained(Some(above), true));
}
