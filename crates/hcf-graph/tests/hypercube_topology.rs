mod common;

use std::collections::BTreeSet;

use common::{seeded_cube, vertex};
use hcf_core::rng::RngHandle;
use hcf_core::FlowError;
use hcf_graph::{build_hypercube, canonical_hash, capacity_exponent_limit, MAX_DIMENSION};

#[test]
fn zero_dimension_is_a_single_vertex() {
    let network = seeded_cube(0, 1);
    assert_eq!(network.num_vertices(), 1);
    assert_eq!(network.num_edges(), 0);
    assert!(network.outgoing(vertex(0)).unwrap().is_empty());
}

#[test]
fn one_dimension_has_a_single_pair() {
    let network = seeded_cube(1, 1);
    assert_eq!(network.num_vertices(), 2);
    assert_eq!(network.num_edges(), 1);
    assert_eq!(network.edge_records().len(), 2);
    let forward = &network.edge_records()[0];
    assert_eq!((forward.tail(), forward.head()), (vertex(0), vertex(1)));
    assert!([1, 2].contains(&forward.capacity()));
}

#[test]
fn counts_follow_the_closed_form() {
    for dimension in 1..=6u32 {
        let network = seeded_cube(dimension, 11);
        let vertices = 1usize << dimension;
        assert_eq!(network.num_vertices(), vertices);
        assert_eq!(network.num_edges(), dimension as usize * vertices / 2);
        assert_eq!(network.edge_records().len(), dimension as usize * vertices);
        for v in network.vertices() {
            assert_eq!(network.outgoing(v).unwrap().len(), dimension as usize);
        }
    }
}

#[test]
fn every_pair_is_hamming_adjacent_and_unique() {
    let network = seeded_cube(5, 3);
    let mut seen = BTreeSet::new();
    for (_, edge) in network.forward_arcs() {
        let (tail, head) = (edge.tail().as_raw(), edge.head().as_raw());
        assert!(tail < head);
        assert_eq!((tail ^ head).count_ones(), 1);
        assert!(seen.insert((tail, head)));
    }
    assert_eq!(seen.len(), network.num_edges());
}

#[test]
fn capacities_respect_the_exponent_limit() {
    let network = seeded_cube(6, 17);
    for (id, edge) in network.forward_arcs() {
        let capacity = edge.capacity();
        assert!(capacity > 0);
        assert_eq!(capacity.count_ones(), 1, "capacity must be a power of two");
        let exponent = capacity.trailing_zeros();
        let limit =
            capacity_exponent_limit(edge.tail().index(), edge.head().index(), network.dimension());
        assert!(exponent <= limit);

        let reverse = network.edge(edge.reverse()).unwrap();
        assert_eq!(reverse.capacity(), 0);
        assert_eq!(reverse.flow(), 0);
        assert_eq!(reverse.reverse(), id);
        assert!(!reverse.is_forward());
    }
}

#[test]
fn same_seed_rebuilds_identical_capacities() {
    let a = seeded_cube(7, 2024);
    let b = seeded_cube(7, 2024);
    assert_eq!(a.arc_flows(), b.arc_flows());
    assert_eq!(canonical_hash(&a), canonical_hash(&b));

    let c = seeded_cube(7, 2025);
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
}

#[test]
fn dimension_beyond_representable_range_is_a_config_error() {
    let mut rng = RngHandle::from_seed(0);
    for dimension in [MAX_DIMENSION + 1, 64, 200] {
        match build_hypercube(dimension, &mut rng) {
            Err(FlowError::Config(info)) => {
                assert_eq!(info.code, "dimension-out-of-range");
                assert_eq!(info.context.get("dimension"), Some(&dimension.to_string()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
