mod common;

use common::{arc_capacity, seeded_cube, vertex};
use hcf_graph::find_augmenting_path;

#[test]
fn first_path_on_a_cube_uses_the_fewest_hops() {
    let network = seeded_cube(4, 8);
    let path = find_augmenting_path(&network, vertex(0), vertex(15))
        .unwrap()
        .expect("fresh cube must have a path");
    let edges = path.edges(&network).unwrap();
    assert_eq!(edges.len(), 4);

    let first = network.edge(*edges.last().unwrap()).unwrap();
    let last = network.edge(edges[0]).unwrap();
    assert_eq!(first.tail(), vertex(0));
    assert_eq!(last.head(), vertex(15));

    let smallest = edges
        .iter()
        .map(|id| network.edge(*id).unwrap().residual())
        .min()
        .unwrap();
    assert_eq!(path.bottleneck(), smallest);
}

#[test]
fn path_edges_chain_back_to_the_source() {
    let network = seeded_cube(3, 21);
    let path = find_augmenting_path(&network, vertex(1), vertex(7))
        .unwrap()
        .unwrap();
    let edges = path.edges(&network).unwrap();
    for pair in edges.windows(2) {
        let later = network.edge(pair[0]).unwrap();
        let earlier = network.edge(pair[1]).unwrap();
        assert_eq!(earlier.head(), later.tail());
    }
    assert_eq!(path.source(), vertex(1));
    assert_eq!(path.sink(), vertex(7));
    assert!(path.parent_edge(vertex(1)).is_none());
}

#[test]
fn single_edge_bottleneck_is_its_capacity() {
    let network = seeded_cube(1, 99);
    let path = find_augmenting_path(&network, vertex(0), vertex(1))
        .unwrap()
        .unwrap();
    assert_eq!(path.bottleneck(), arc_capacity(&network, 0, 1));
}

#[test]
fn reverse_direction_has_no_residual_capacity_initially() {
    let network = seeded_cube(1, 99);
    assert!(find_augmenting_path(&network, vertex(1), vertex(0))
        .unwrap()
        .is_none());
}

#[test]
fn unknown_sink_is_an_error() {
    let network = seeded_cube(2, 1);
    let err = find_augmenting_path(&network, vertex(0), vertex(4)).unwrap_err();
    assert_eq!(err.code(), "unknown-vertex");
}
