//! End-to-end search over a small front-end fixture.

use rfchain_core::{group_locked, Component, ComponentKind};
use rfchain_search::{rank, rank_parallel, SearchSpace, Targets};

fn component(name: &str, kind: ComponentKind) -> Component {
    Component {
        name: name.into(),
        kind,
        gain_db: None,
        gain_db_max: None,
        insertion_loss_db: None,
        nf_db: None,
        p1db_dbm: None,
        gain_db_options: None,
        fixed: false,
        locked_with_next: false,
    }
}

/// Three fixed stages, one movable amplifier, one two-setting attenuator.
fn fixture() -> (Vec<Component>, Vec<Component>, Vec<Component>) {
    let mut f1 = component("f1", ComponentKind::Amplifier);
    f1.gain_db = Some(15.0);
    f1.nf_db = Some(2.0);
    f1.fixed = true;

    let mut f2 = component("f2", ComponentKind::Amplifier);
    f2.gain_db = Some(-2.0);
    f2.nf_db = Some(2.0);
    f2.fixed = true;

    let mut f3 = component("f3", ComponentKind::Amplifier);
    f3.gain_db = Some(20.0);
    f3.nf_db = Some(3.0);
    f3.fixed = true;

    let mut amp = component("amp", ComponentKind::Amplifier);
    amp.gain_db = Some(12.0);
    amp.nf_db = Some(1.5);

    let mut att = component("att", ComponentKind::Attenuator);
    att.gain_db_options = Some(vec![0.0, -10.0]);

    (vec![f1, f2, f3], vec![amp], vec![att])
}

fn targets() -> Targets {
    Targets {
        gain_db: 35.0,
        nf_max_db: 4.0,
        p1db_min_dbm: 10.0,
    }
}

#[test]
fn end_to_end_ranks_on_target_gain() {
    let (fixed, movable, attenuators) = fixture();
    let blocks = group_locked(&fixed);
    let space = SearchSpace::new(&blocks, &movable, &attenuators).unwrap();

    // 1 amplifier in 4 gaps, then 1 attenuator in 5 gaps with 2 settings.
    assert_eq!(space.estimated_candidates(), 40);

    let results = rank(&space, &targets());
    assert_eq!(results.len(), 40);

    // Every candidate uses the amplifier and the attenuator, so gains are
    // 33 + 12 - 10 = 35 dB at the minimum setting and 45 dB at the
    // maximum; the ranking is decided by the noise-figure penalty.
    let best = &results[0];
    assert!((best.envelope.gain_min_db - 35.0).abs() < 1e-6);
    assert!((best.envelope.gain_max_db - 45.0).abs() < 1e-6);
    assert!(best.envelope.nf_max_db <= 4.0);

    // Sorted ascending by score.
    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }

    // No component carries a compression point, so every candidate takes
    // the full unbounded-compression penalty, finitely.
    assert!(best.score.is_finite());
    assert_eq!(best.names.len(), 5);
}

#[test]
fn parallel_ranking_matches_sequential() {
    let (fixed, movable, attenuators) = fixture();
    let blocks = group_locked(&fixed);
    let space = SearchSpace::new(&blocks, &movable, &attenuators).unwrap();

    let sequential = rank(&space, &targets());
    let parallel = rank_parallel(&space, &targets());

    assert_eq!(sequential.len(), parallel.len());
    assert!((sequential[0].score - parallel[0].score).abs() < 1e-12);
    assert!(
        (sequential.last().unwrap().score - parallel.last().unwrap().score).abs() < 1e-12
    );
}

#[test]
fn locked_components_stay_adjacent_in_every_candidate() {
    let (mut fixed, movable, attenuators) = fixture();
    fixed[0].locked_with_next = true;

    let blocks = group_locked(&fixed);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].label(), "f1 + f2");

    let space = SearchSpace::new(&blocks, &movable, &attenuators).unwrap();
    for chain in space.candidates().map(|c| c.names()) {
        assert!(chain.contains(&"f1 + f2".to_string()));
    }
}

#[test]
fn missing_mandatory_field_fails_before_enumeration() {
    let (fixed, mut movable, attenuators) = fixture();
    movable[0].gain_db = None;

    let blocks = group_locked(&fixed);
    let err = SearchSpace::new(&blocks, &movable, &attenuators).unwrap_err();
    assert!(err.to_string().contains("gain_dB"));
}
