//! Benchmarks for chain enumeration and scoring.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rfchain_core::{group_locked, Component, ComponentKind};
use rfchain_search::{rank, SearchSpace, Targets};

fn component(name: &str, kind: ComponentKind, gain_db: f64, fixed: bool) -> Component {
    Component {
        name: name.into(),
        kind,
        gain_db: Some(gain_db),
        gain_db_max: None,
        insertion_loss_db: None,
        nf_db: Some(2.0),
        p1db_dbm: Some(18.0),
        gain_db_options: None,
        fixed,
        locked_with_next: false,
    }
}

fn small_space() -> SearchSpace {
    let fixed = [
        component("b0", ComponentKind::Amplifier, 15.0, true),
        component("b1", ComponentKind::Amplifier, -2.0, true),
        component("b2", ComponentKind::Amplifier, 20.0, true),
    ];
    let movable = [
        component("a0", ComponentKind::Amplifier, 12.0, false),
        component("a1", ComponentKind::Amplifier, 10.0, false),
    ];
    let mut att = component("att", ComponentKind::Attenuator, 0.0, false);
    att.gain_db = None;
    att.gain_db_options = Some(vec![0.0, -5.0, -10.0]);

    let blocks = group_locked(&fixed);
    SearchSpace::new(&blocks, &movable, &[att]).unwrap()
}

fn bench_enumeration(c: &mut Criterion) {
    let space = small_space();
    c.bench_function("enumerate_candidates", |b| {
        b.iter(|| black_box(space.candidates().count()));
    });
}

fn bench_rank(c: &mut Criterion) {
    let space = small_space();
    let targets = Targets {
        gain_db: 35.0,
        nf_max_db: 4.0,
        p1db_min_dbm: 10.0,
    };
    c.bench_function("rank_small_space", |b| {
        b.iter(|| black_box(rank(&space, &targets)).len());
    });
}

criterion_group!(benches, bench_enumeration, bench_rank);
criterion_main!(benches);
