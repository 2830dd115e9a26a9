//! Galley Headless Kitchen Harness
//!
//! Replays deep fryer and coffee maker scenarios against the real systems.
//! Runs entirely in-process: no host engine, no networking, no rendering.
//!
//! Usage:
//!   cargo run -p galley-simtest
//!   cargo run -p galley-simtest -- --verbose
//!   cargo run -p galley-simtest -- --seed 7

use galley_core::content::{Content, ContentFile};
use galley_core::host;
use galley_core::prelude::*;
use galley_logic::constants::{prototypes, reagents, slots, solutions};
use galley_logic::fried::FriedLevel;
use galley_logic::preconditions::DisabledReason;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CONTENT_JSON: &str = include_str!("../../../data/kitchen_content.json");

/// Kitchens run by the randomized frame-size sweep
const SWEEP_RUNS: u64 = 64;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let seed = std::env::args()
        .skip_while(|a| a != "--seed")
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    println!("=== Galley Kitchen Harness (seed {}) ===\n", seed);

    let content = match Content::from_json(CONTENT_JSON) {
        Ok(c) => c,
        Err(e) => {
            println!("  ✗ content_load: {}", e);
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. Content validation
    results.extend(validate_content(&content));

    // 2. Recipe timing
    results.extend(validate_recipes(&content));

    // 3. Fried-level ladder
    results.extend(validate_ladder(&content));

    // 4. Oil and power interruptions
    results.extend(validate_interruptions(&content));

    // 5. Toggle behaviour
    results.extend(validate_toggle(&content));

    // 6. Randomized frame-size sweep
    results.extend(sweep_frame_sizes(&content, seed));

    // 7. Coffee maker
    results.extend(validate_coffee(&content));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

struct Station {
    engine: KitchenEngine,
    fryer: hecs::Entity,
    cook: hecs::Entity,
}

fn station(content: &Content) -> Station {
    let mut engine = KitchenEngine::new(content.clone());
    let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), Vec3::ZERO);
    let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
    Station {
        engine,
        fryer,
        cook,
    }
}

impl Station {
    fn enabled(mut self) -> Self {
        let _ = self.engine.try_enable_fryer(self.fryer, self.cook);
        self
    }

    fn drop_in(&mut self, prototype: &str) -> Option<hecs::Entity> {
        let item = self.engine.spawn_item(prototype, Vec3::ZERO);
        self.engine
            .insert_into_fryer(self.fryer, self.cook, item)
            .ok()
            .map(|()| item)
    }

    fn run(&mut self, frames: usize, dt: f32) {
        for _ in 0..frames {
            self.engine.update(dt);
        }
    }
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

// ── 1. Content ──────────────────────────────────────────────────────────

fn validate_content(content: &Content) -> Vec<TestResult> {
    println!("--- Content ---");
    let mut results = Vec::new();

    results.push(check(
        "content_has_recipes",
        content.catalogue.len() >= 5,
        format!("{} recipes loaded", content.catalogue.len()),
    ));

    let missing: Vec<&str> = content
        .catalogue
        .iter()
        .flat_map(|r| [r.ingredient.as_str(), r.result.as_str()])
        .filter(|id| content.prototype(id).is_none())
        .collect();
    results.push(check(
        "content_prototypes_resolve",
        missing.is_empty(),
        if missing.is_empty() {
            "every ingredient and result has a prototype".to_string()
        } else {
            format!("missing: {}", missing.join(", "))
        },
    ));

    results.push(check(
        "content_has_ruined_food",
        content.prototype(prototypes::RUINED_FOOD).is_some(),
        prototypes::RUINED_FOOD,
    ));

    // Re-parse as raw data and count distinct ingredients.
    let raw: Result<ContentFile, _> = serde_json::from_str(CONTENT_JSON);
    match raw {
        Ok(file) => {
            let mut ingredients: Vec<&str> =
                file.recipes.iter().map(|r| r.ingredient.as_str()).collect();
            ingredients.sort_unstable();
            ingredients.dedup();
            results.push(check(
                "content_unique_ingredients",
                ingredients.len() == file.recipes.len(),
                format!("{} recipes, {} ingredients", file.recipes.len(), ingredients.len()),
            ));
        }
        Err(e) => results.push(check("content_reparse", false, e.to_string())),
    }

    let groups: Vec<String> = ["Snacks", "Mains", "Desserts"]
        .iter()
        .map(|g| format!("{}={}", g, content.catalogue.group(g).len()))
        .collect();
    results.push(check(
        "content_groups_cover_catalogue",
        ["Snacks", "Mains", "Desserts"]
            .iter()
            .map(|g| content.catalogue.group(g).len())
            .sum::<usize>()
            == content.catalogue.len(),
        groups.join(", "),
    ));

    results
}

// ── 2. Recipes ──────────────────────────────────────────────────────────

fn validate_recipes(content: &Content) -> Vec<TestResult> {
    println!("--- Recipes ---");
    let mut results = Vec::new();

    for recipe in content.catalogue.iter() {
        let mut s = station(content).enabled();
        let Some(item) = s.drop_in(&recipe.ingredient) else {
            results.push(check(
                &format!("recipe_{}_insert", recipe.id),
                false,
                "ingredient rejected",
            ));
            continue;
        };

        s.run((recipe.cook_time as usize).saturating_sub(1), 1.0);
        let waited = s.engine.world.contains(item);
        s.run(1, 1.0);
        let done = !s.engine.world.contains(item)
            && s
                .engine
                .fryer_contents(s.fryer)
                .iter()
                .any(|e| s.engine.prototype_of(*e).as_deref() == Some(recipe.result.as_str()));

        results.push(check(
            &format!("recipe_{}", recipe.id),
            waited && done,
            format!(
                "{} → {} after {}s (waited: {}, done: {})",
                recipe.ingredient, recipe.result, recipe.cook_time, waited, done
            ),
        ));
    }

    results
}

// ── 3. Ladder ───────────────────────────────────────────────────────────

fn validate_ladder(content: &Content) -> Vec<TestResult> {
    println!("--- Fried-Level Ladder ---");
    let mut results = Vec::new();

    let mut s = station(content).enabled();
    let Some(mouse) = s.drop_in("MobMouse") else {
        results.push(check("ladder_insert", false, "mouse rejected"));
        return results;
    };

    let mut levels = Vec::new();
    let mut heat_at_15 = 0.0;
    for second in 1..=45 {
        s.run(1, 1.0);
        if s.engine.world.contains(mouse) {
            levels.push(s.engine.fried_level(mouse));
            if second == 15 {
                heat_at_15 = s
                    .engine
                    .world
                    .get::<&Damageable>(mouse)
                    .map(|d| d.get(DamageType::Heat))
                    .unwrap_or(0.0);
            }
        }
    }

    let monotonic = levels.windows(2).all(|w| w[0] <= w[1]);
    results.push(check(
        "ladder_monotonic",
        monotonic,
        format!("{} observations", levels.len()),
    ));
    results.push(check(
        "ladder_heat_damage",
        heat_at_15 == 100.0,
        format!("heat {} at t=15", heat_at_15),
    ));
    results.push(check(
        "ladder_burnt_deleted",
        !s.engine.world.contains(mouse)
            && s.engine.entities_of(prototypes::RUINED_FOOD).len() == 1,
        format!("{} levels reached before burning", levels.len()),
    ));
    results.push(check(
        "ladder_fried_before_burnt",
        levels.last() == Some(&FriedLevel::Fried),
        format!("last level {:?}", levels.last()),
    ));

    results
}

// ── 4. Interruptions ────────────────────────────────────────────────────

fn validate_interruptions(content: &Content) -> Vec<TestResult> {
    println!("--- Oil & Power ---");
    let mut results = Vec::new();

    let mut s = station(content).enabled();
    if let Some(potato) = s.drop_in("FoodPotato") {
        s.run(5, 1.0);
        s.engine
            .set_reagent(s.fryer, solutions::FRYER_OIL, reagents::OIL_OLIVE, 20.0);
        s.run(95, 1.0);
        let frozen = s.engine.cook_elapsed(potato).unwrap_or(-1.0);
        results.push(check(
            "oil_drop_freezes",
            !s.engine.fryer_enabled(s.fryer) && (frozen - 5.0).abs() < 1e-6,
            format!("elapsed {:.3}s after 100s", frozen),
        ));

        s.engine
            .set_reagent(s.fryer, solutions::FRYER_OIL, reagents::OIL_OLIVE, 30.0);
        let _ = s.engine.try_enable_fryer(s.fryer, s.cook);
        s.run(4, 1.0);
        let waiting = s.engine.world.contains(potato);
        s.run(1, 1.0);
        results.push(check(
            "oil_refill_resumes",
            waiting && !s.engine.world.contains(potato),
            "five more seconds after re-enable",
        ));
    }

    let mut s = station(content).enabled();
    s.run(1, 1.0);
    s.engine.set_powered(s.fryer, false);
    s.run(1, 1.0);
    let retry = s.engine.try_enable_fryer(s.fryer, s.cook);
    results.push(check(
        "power_cut_disables",
        !s.engine.fryer_enabled(s.fryer) && retry == Err(DisabledReason::Unpowered),
        format!("retry: {:?}", retry),
    ));

    results
}

// ── 5. Toggle ───────────────────────────────────────────────────────────

fn validate_toggle(content: &Content) -> Vec<TestResult> {
    println!("--- Toggle ---");
    let mut results = Vec::new();

    let mut s = station(content).enabled();
    let items: Vec<_> = ["FoodPotato", "FoodBanana", "FoodDoughSlice"]
        .iter()
        .filter_map(|p| s.drop_in(p))
        .collect();
    s.run(2, 1.0);
    let outcome = s.engine.toggle_fryer(s.fryer, s.cook);
    results.push(check(
        "toggle_evacuates",
        outcome == Ok(ToggleOutcome::Evacuated(items.len()))
            && s.engine.fryer_contents(s.fryer).is_empty(),
        format!("{:?}", outcome),
    ));
    results.push(check(
        "toggle_keeps_enabled",
        s.engine.fryer_enabled(s.fryer),
        "enabled untouched by evacuation",
    ));
    results.push(check(
        "toggle_clears_timers",
        items.iter().all(|e| s.engine.cook_elapsed(*e).is_none()),
        "no cook state on evacuated items",
    ));

    let off = s.engine.toggle_fryer(s.fryer, s.cook);
    let on = s.engine.toggle_fryer(s.fryer, s.cook);
    results.push(check(
        "toggle_empty_cycles",
        off == Ok(ToggleOutcome::TurnedOff) && on == Ok(ToggleOutcome::TurnedOn),
        format!("{:?} then {:?}", off, on),
    ));

    results
}

// ── 6. Sweep ────────────────────────────────────────────────────────────

fn sweep_frame_sizes(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Frame-Size Sweep ---");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut early = 0;
    let mut late = 0;

    for _ in 0..SWEEP_RUNS {
        let mut s = station(content).enabled();
        let Some(potato) = s.drop_in("FoodPotato") else {
            late += 1;
            continue;
        };

        let mut accrued = 0.0f64;
        while accrued < 12.0 {
            let dt: f32 = rng.gen_range(0.005..0.5);
            s.engine.update(dt);
            accrued += dt as f64;

            let present = s.engine.world.contains(potato);
            if accrued + 1e-6 < 10.0 && !present {
                early += 1;
                break;
            }
            if accrued >= 10.0 + 1e-6 && present {
                late += 1;
                break;
            }
            if !present {
                break;
            }
        }
    }

    vec![check(
        "sweep_recipe_timing",
        early == 0 && late == 0,
        format!(
            "{} runs, {} completed early, {} completed late",
            SWEEP_RUNS, early, late
        ),
    )]
}

// ── 7. Coffee ───────────────────────────────────────────────────────────

fn validate_coffee(content: &Content) -> Vec<TestResult> {
    println!("--- Coffee Maker ---");
    let mut results = Vec::new();

    let mut engine = KitchenEngine::new(content.clone());
    let maker = engine.spawn_coffee_maker(&CoffeeMakerConfig::default(), Vec3::ZERO);
    let cook = engine.spawn_cook("barista", 2, Vec3::ZERO);

    let enabled = engine.try_enable_coffee_maker(maker, cook);
    results.push(check("coffee_enables", enabled.is_ok(), format!("{:?}", enabled)));

    for _ in 0..30 {
        engine.update(1.0);
    }

    let coffee = host::first_in(&engine.world, maker, slots::COFFEE_BEAKER)
        .and_then(|beaker| {
            engine
                .world
                .get::<&Solutions>(beaker)
                .ok()
                .and_then(|s| s.get(solutions::BEAKER_DRINK).map(|d| d.quantity(reagents::COFFEE)))
        })
        .unwrap_or(0.0);
    results.push(check(
        "coffee_brews",
        coffee == 20.0,
        format!("{} units of coffee after 30s", coffee),
    ));

    let again = engine.try_enable_coffee_maker(maker, cook);
    results.push(check(
        "coffee_filter_dirty",
        again == Err(DisabledReason::DirtyFilter),
        format!("second brew: {:?}", again),
    ));

    results
}
