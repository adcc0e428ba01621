use std::collections::VecDeque;

use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::{Capacity, EdgeId, ResidualNetwork, VertexId};

use crate::ids::ensure_vertex;

/// Shortest augmenting path found by [`find_augmenting_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    source: VertexId,
    sink: VertexId,
    bottleneck: Capacity,
    parents: Vec<Option<EdgeId>>,
}

impl AugmentingPath {
    /// Returns the smallest residual capacity along the path. Always positive.
    pub fn bottleneck(&self) -> Capacity {
        self.bottleneck
    }

    /// Returns the vertex the path starts from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the vertex the path ends at.
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// Returns the edge through which the search first reached `vertex`.
    pub fn parent_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Reconstructs the path edges, ordered from the sink back to the source.
    pub fn edges<N>(&self, network: &N) -> Result<Vec<EdgeId>, FlowError>
    where
        N: ResidualNetwork + ?Sized,
    {
        let mut edges = Vec::new();
        let mut current = self.sink;
        while current != self.source {
            // A parent chain longer than the vertex count means the records moved under us.
            if edges.len() >= self.parents.len() {
                return Err(broken_chain(current));
            }
            let edge_id = self.parent_edge(current).ok_or_else(|| broken_chain(current))?;
            edges.push(edge_id);
            current = network.edge(edge_id)?.tail();
        }
        Ok(edges)
    }
}

/// Breadth-first search for a fewest-hops path with positive residual
/// capacity on every edge.
///
/// Each vertex keeps the first edge that discovered it and is never
/// revisited; the source is never re-entered. The search stops as soon as the
/// sink is discovered. Returns `Ok(None)` when the sink is unreachable or when
/// `source == sink`, which needs no augmentation.
pub fn find_augmenting_path<N>(
    network: &N,
    source: VertexId,
    sink: VertexId,
) -> Result<Option<AugmentingPath>, FlowError>
where
    N: ResidualNetwork + ?Sized,
{
    ensure_vertex(network, source)?;
    ensure_vertex(network, sink)?;
    if source == sink {
        return Ok(None);
    }

    let num_vertices = network.num_vertices();
    let mut parents: Vec<Option<EdgeId>> = vec![None; num_vertices];
    let mut path_capacity: Vec<Capacity> = vec![0; num_vertices];
    path_capacity[source.index()] = Capacity::MAX;

    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        let reach = path_capacity[current.index()];
        for &edge_id in network.outgoing(current)? {
            let edge = network.edge(edge_id)?;
            let head = edge.head();
            if head == source || parents[head.index()].is_some() {
                continue;
            }
            let residual = edge.residual();
            if residual <= 0 {
                continue;
            }
            parents[head.index()] = Some(edge_id);
            path_capacity[head.index()] = reach.min(residual);
            if head == sink {
                return Ok(Some(AugmentingPath {
                    source,
                    sink,
                    bottleneck: path_capacity[head.index()],
                    parents,
                }));
            }
            queue.push_back(head);
        }
    }
    Ok(None)
}

fn broken_chain(vertex: VertexId) -> FlowError {
    FlowError::Graph(
        ErrorInfo::new("broken-parent-chain", "augmenting path cannot be reconstructed")
            .with_context("vertex", vertex.as_raw()),
    )
}
