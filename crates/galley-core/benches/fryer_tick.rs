use criterion::{black_box, criterion_group, criterion_main, Criterion};
use galley_core::prelude::*;

/// A kitchen with a row of enabled fryers, each holding a few items
fn busy_kitchen(fryers: usize) -> KitchenEngine {
    let mut engine = KitchenEngine::with_builtin_content().expect("builtin content");
    let cook = engine.spawn_cook("cook", 2, Vec3::ZERO);
    for i in 0..fryers {
        let at = Vec3::new(i as f32, 0.0, 0.0);
        let fryer = engine.spawn_deep_fryer(&FryerConfig::default(), at);
        engine.try_enable_fryer(fryer, cook).expect("fryer enables");
        for prototype in ["FoodPotato", "FoodBanana", "FoodFishFillet"] {
            let item = engine.spawn_item(prototype, at);
            engine
                .insert_into_fryer(fryer, cook, item)
                .expect("insert succeeds");
        }
    }
    engine
}

fn bench_fryer_tick(c: &mut Criterion) {
    c.bench_function("fryer_tick_50_stations", |b| {
        let mut engine = busy_kitchen(50);
        b.iter(|| {
            engine.update(black_box(1.0 / 60.0));
            engine.outbox.clear();
        })
    });
}

criterion_group!(benches, bench_fryer_tick);
criterion_main!(benches);
