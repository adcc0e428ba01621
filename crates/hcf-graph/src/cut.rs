use std::collections::VecDeque;

use hcf_core::errors::FlowError;
use hcf_core::{Capacity, EdgeId, ResidualNetwork, VertexId};
use serde::{Deserialize, Serialize};

use crate::ids::{ensure_vertex, make_vertex};

/// Source-side minimum cut read off a maximum flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Vertices reachable from the source through positive residual edges.
    pub source_side: Vec<VertexId>,
    /// Forward arcs leaving the source side.
    pub arcs: Vec<EdgeId>,
    /// Summed capacity of [`MinCut::arcs`].
    pub capacity: Capacity,
}

impl MinCut {
    /// Returns whether `vertex` lies on the source side.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.source_side.binary_search(&vertex).is_ok()
    }
}

/// Extracts the cut separating the vertices reachable from `source` in the
/// residual network from the rest.
///
/// Only a minimum cut once the network carries a maximum flow; on any other
/// flow state it is merely the reachability cut of that state.
pub fn min_cut<N>(network: &N, source: VertexId) -> Result<MinCut, FlowError>
where
    N: ResidualNetwork + ?Sized,
{
    ensure_vertex(network, source)?;
    let mut reached = vec![false; network.num_vertices()];
    reached[source.index()] = true;
    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        for &edge_id in network.outgoing(current)? {
            let edge = network.edge(edge_id)?;
            let head = edge.head().index();
            if !reached[head] && edge.residual() > 0 {
                reached[head] = true;
                queue.push_back(edge.head());
            }
        }
    }

    let source_side: Vec<VertexId> = reached
        .iter()
        .enumerate()
        .filter(|(_, inside)| **inside)
        .map(|(idx, _)| make_vertex(idx))
        .collect();

    let mut arcs = Vec::new();
    let mut capacity = 0;
    for &vertex in &source_side {
        for &edge_id in network.outgoing(vertex)? {
            let edge = network.edge(edge_id)?;
            if edge.is_forward() && !reached[edge.head().index()] {
                arcs.push(edge_id);
                capacity += edge.capacity();
            }
        }
    }

    Ok(MinCut {
        source_side,
        arcs,
        capacity,
    })
}
