// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: placement update followed by a full collision sweep
//!
//! A planar chain of `n` joints spaced 1.5 apart, one unit sphere per joint,
//! so neighbouring spheres overlap. Measures `update_geometry_placements` +
//! `compute_collisions` over every cross-joint pair, and the joint-bucket
//! variant that only visits pairs keyed by one joint.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linkage_dry_tests::{CatalogBuilder, SphereEngine};
use linkage_geom::{
    compute_collisions, compute_joint_collisions, update_geometry_placements, GeometryCatalog,
    GeometryRuntimeState,
};
use nalgebra::Isometry3;

fn build_planar_chain(njoints: usize) -> (GeometryCatalog, Vec<Isometry3<f64>>) {
    let mut builder = CatalogBuilder::new();
    for joint in 0..njoints {
        builder = builder.sphere(&format!("link{joint}"), joint, 1.0);
    }
    let catalog = builder.all_pairs().build();
    let joints = (0..njoints)
        .map(|j| Isometry3::translation(1.5 * j as f64, 0.0, 0.0))
        .collect();
    (catalog, joints)
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_sweep");
    for &njoints in &[16usize, 64] {
        let (catalog, joints) = build_planar_chain(njoints);
        let engine = SphereEngine::new();
        let mut state = GeometryRuntimeState::new(&catalog);
        group.throughput(Throughput::Elements(catalog.npairs() as u64));
        group.bench_function(BenchmarkId::new("all_pairs", njoints), |b| {
            b.iter(|| {
                update_geometry_placements(&catalog, &mut state, &joints).expect("joints present");
                let hit = compute_collisions(&catalog, &mut state, &engine, false).expect("fresh state");
                criterion::black_box(hit);
            });
        });
        group.bench_function(BenchmarkId::new("joint_bucket", njoints), |b| {
            b.iter(|| {
                let hit = compute_joint_collisions(&catalog, &mut state, &engine, 0).expect("fresh state");
                criterion::black_box(hit);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_sweep);
criterion_main!(benches);
