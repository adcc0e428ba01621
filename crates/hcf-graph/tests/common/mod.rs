#![allow(dead_code)]

use hcf_core::rng::RngHandle;
use hcf_core::{Capacity, VertexId};
use hcf_graph::{build_hypercube, FlowNetwork};

pub fn vertex(raw: u64) -> VertexId {
    VertexId::from_raw(raw)
}

pub fn seeded_cube(dimension: u32, seed: u64) -> FlowNetwork {
    build_hypercube(dimension, &mut RngHandle::from_seed(seed)).unwrap()
}

pub fn arc_capacity(network: &FlowNetwork, tail: u64, head: u64) -> Capacity {
    let id = network.find_arc(vertex(tail), vertex(head)).unwrap();
    network.edge(id).unwrap().capacity()
}

/// Minimum capacity over every `source`/`sink` separating vertex subset.
pub fn brute_force_min_cut(network: &FlowNetwork, source: u64, sink: u64) -> Capacity {
    let n = network.num_vertices();
    let free: Vec<u64> = (0..n as u64).filter(|v| *v != source && *v != sink).collect();
    let mut best = Capacity::MAX;
    for mask in 0u64..(1u64 << free.len()) {
        let mut inside = vec![false; n];
        inside[source as usize] = true;
        for (bit, v) in free.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                inside[*v as usize] = true;
            }
        }
        let capacity: Capacity = network
            .forward_arcs()
            .filter(|(_, edge)| inside[edge.tail().index()] && !inside[edge.head().index()])
            .map(|(_, edge)| edge.capacity())
            .sum();
        best = best.min(capacity);
    }
    best
}
