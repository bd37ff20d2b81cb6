use elemental::{
    atom::Atom, energy, periodic_table, report::EnergyReport, ModelConstants,
};
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_formulas(c: &mut Criterion) {
    let table = periodic_table::human_body();
    let constants = ModelConstants::default();
    let atom = Atom::from_element(&table.elements()[0], &constants);

    c.bench_function("Kinetic energy", |b| {
        b.iter(|| energy::kinetic_energy(black_box(atom.electron())))
    });

    c.bench_function("Potential energy", |b| {
        b.iter(|| {
            energy::potential_energy(
                black_box(atom.electron()),
                black_box(atom.nucleus()),
                constants.coulomb_constant,
            )
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let table = periodic_table::human_body();
    let constants = ModelConstants::default();

    c.bench_function("Human body report", |b| {
        b.iter(|| EnergyReport::compute(black_box(&table), &constants))
    });

    let report = EnergyReport::compute(&table, &constants).unwrap();
    c.bench_function("Human body text", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(4096);
            report
                .write_text(&mut buffer, elemental::LabelStyle::Names)
                .unwrap();
            buffer
        })
    });
}

criterion_group!(benches, bench_formulas, bench_report);
criterion_main!(benches);
