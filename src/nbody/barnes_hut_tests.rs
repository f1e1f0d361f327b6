use approx::assert_relative_eq;

use crate::nbody::{
    default_sources, opening_criterion, random_cloud, source_bodies, Body, Gadget,
};
use crate::utils::SimConstants;

#[test]
fn test_node_containing_reference_is_always_opened() {
    let bodies = random_cloud(16, 10.0, 5);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    // Even an absurdly large theta cannot approximate the node the reference
    // body sits in.
    let should_open = opening_criterion(1e6);
    assert!(should_open(gadget.root(), &bodies[0]));
}

#[test]
fn test_far_reference_sees_one_aggregate() {
    let bodies = random_cloud(32, 1.0, 6);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let total = gadget.com().mass;

    let far = Body::at_rest(999, 1.0, 1e6, 1e6);
    let sources = source_bodies(&gadget, &far, opening_criterion(0.7));
    assert_eq!(sources.len(), 1);
    assert!(sources[0].is_aggregate());
    assert_relative_eq!(sources[0].mass, total, max_relative = 1e-12);
}

#[test]
fn test_coverage_for_various_angles() {
    let bodies = random_cloud(64, 30.0, 7);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let total = gadget.com().mass;
    let reference = &bodies[17];

    for theta in [0.0, 0.3, 0.7, 1.2, 5.0] {
        let sources = source_bodies(&gadget, reference, opening_criterion(theta));
        let mass: f64 = sources.iter().map(|p| p.mass).sum();
        assert_relative_eq!(mass, total, max_relative = 1e-9);

        // After identity-based self-exclusion, exactly the rest of the mass remains.
        let others: f64 = sources
            .iter()
            .filter(|p| p.id != reference.id)
            .map(|p| p.mass)
            .sum();
        assert_relative_eq!(mass - others, reference.mass, max_relative = 1e-9);
    }
}

#[test]
fn test_reference_leaf_is_reached_exactly() {
    let bodies = random_cloud(48, 20.0, 8);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let reference = &bodies[5];
    let sources = source_bodies(&gadget, reference, opening_criterion(0.7));
    let found = sources.iter().find(|p| p.id == reference.id);
    assert_eq!(found, Some(reference), "The reference body's own leaf must never be approximated");
}

#[test]
fn test_theta_zero_degenerates_to_all_leaves() {
    let bodies = random_cloud(32, 12.0, 9);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let sources = source_bodies(&gadget, &bodies[0], opening_criterion(0.0));

    assert_eq!(sources.len(), bodies.len());
    assert!(sources.iter().all(|p| !p.is_aggregate()));
    let mut ids: Vec<u64> = sources.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..bodies.len() as u64).collect::<Vec<u64>>());
}

#[test]
fn test_larger_theta_coarsens_the_source_list() {
    let bodies = random_cloud(128, 40.0, 10);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let reference = &bodies[0];

    let fine = source_bodies(&gadget, reference, opening_criterion(0.3)).len();
    let coarse = source_bodies(&gadget, reference, opening_criterion(1.5)).len();
    assert!(coarse <= fine, "Raising theta must not refine the approximation");
}

#[test]
fn test_default_sources_uses_configured_theta() {
    let bodies = random_cloud(32, 12.0, 11);
    let gadget = Gadget::from_bodies(&bodies).unwrap();
    let constants = SimConstants::new(None, Some(0.0), None);

    let via_default = default_sources(&gadget, &bodies[3], &constants);
    let via_explicit = source_bodies(&gadget, &bodies[3], opening_criterion(0.0));
    assert_eq!(via_default.len(), via_explicit.len());
}
