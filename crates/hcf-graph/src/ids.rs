use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::{EdgeId, ResidualNetwork, VertexId};

/// Creates a [`VertexId`] from an index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}

/// Creates an [`EdgeId`] from an index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}

pub(crate) fn unknown_vertex(vertex: VertexId, num_vertices: usize) -> FlowError {
    FlowError::Graph(
        ErrorInfo::new("unknown-vertex", "vertex is not part of the network")
            .with_context("vertex", vertex.as_raw())
            .with_context("num_vertices", num_vertices),
    )
}

pub(crate) fn unknown_edge(edge: EdgeId, num_records: usize) -> FlowError {
    FlowError::Graph(
        ErrorInfo::new("unknown-edge", "edge is not part of the network")
            .with_context("edge", edge.as_raw())
            .with_context("num_records", num_records),
    )
}

/// Fails with `unknown-vertex` unless `vertex` indexes into `network`.
pub(crate) fn ensure_vertex<N>(network: &N, vertex: VertexId) -> Result<(), FlowError>
where
    N: ResidualNetwork + ?Sized,
{
    if vertex.as_raw() < network.num_vertices() as u64 {
        Ok(())
    } else {
        Err(unknown_vertex(vertex, network.num_vertices()))
    }
}
