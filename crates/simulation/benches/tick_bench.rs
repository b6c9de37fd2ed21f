use criterion::{criterion_group, criterion_main, Criterion};

use simulation::structures::StructureKind;
use simulation::test_harness::TestPlant;

/// Full-tick throughput on a busy floor: sources, movers, converters, and a
/// wall of insulators all active at once.
fn bench_full_tick(c: &mut Criterion) {
    let mut plant = TestPlant::new()
        .with_funds(1_000_000)
        .with_heat(8, 8, 5_000.0);
    for x in 4..12 {
        plant = plant.with_structure(x, 4, StructureKind::FuelRod);
        plant = plant.with_structure(x, 6, StructureKind::Insulator);
        plant = plant.with_structure(x, 8, StructureKind::HeatExchanger);
        plant = plant.with_structure(x, 10, StructureKind::Turbine);
        plant = plant.with_structure(x, 12, StructureKind::Substation);
    }

    c.bench_function("full_tick", |b| {
        b.iter(|| plant.tick(1));
    });
}

criterion_group!(benches, bench_full_tick);
criterion_main!(benches);
