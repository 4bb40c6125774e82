// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Kernel Benchmarks
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use meissner_core::{bcs, pippard};
use meissner_types::parameters::MaterialParameters;
use std::hint::black_box;

fn niobium() -> MaterialParameters<f64> {
    MaterialParameters {
        temperature: 3.5,
        critical_temperature: 9.25,
        gap_mev: bcs::gap_mev(9.25),
        coherence_length_0: 38.0,
        mean_free_path: 10_000.0,
        penetration_depth_0: 22.0,
        exponent: 4.0,
    }
}

fn bench_gap_solver(c: &mut Criterion) {
    c.bench_function("bcs_reduced_gap_mid", |b| {
        b.iter(|| bcs::reduced_gap(black_box(0.5f64)))
    });
    c.bench_function("bcs_reduced_gap_near_tc", |b| {
        b.iter(|| bcs::reduced_gap(black_box(0.98f64)))
    });
}

fn bench_kernels(c: &mut Criterion) {
    let p = niobium();
    c.bench_function("bcs_kernel", |b| {
        b.iter(|| bcs::kernel(black_box(0.05f64), &p))
    });
    c.bench_function("pippard_kernel", |b| {
        b.iter(|| pippard::kernel(black_box(0.05f64), &p))
    });
}

fn bench_profiles(c: &mut Criterion) {
    let p = niobium();
    let integrator = pippard::pippard_integrator::<f64>();
    let depths: Vec<f64> = (0..64).map(|i| 2.0 * i as f64).collect();

    c.bench_function("pippard_point", |b| {
        b.iter(|| pippard::reduced_field_penetration(black_box(30.0f64), &p, &integrator))
    });
    c.bench_function("bcs_profile_64_depths", |b| {
        b.iter(|| bcs::reduced_field_profile(black_box(&depths), &p, &integrator))
    });
}

criterion_group!(benches, bench_gap_solver, bench_kernels, bench_profiles);
criterion_main!(benches);
