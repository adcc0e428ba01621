use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::{Capacity, ResidualNetwork, VertexId};

use crate::ids::{ensure_vertex, make_vertex};

/// Verifies the current flow assignment and returns the net outflow of
/// `source`.
///
/// Checks, in this order for every record: `flow <= capacity`, non-negative
/// flow on forward records, an involutive reverse link and `flow ==
/// -reverse.flow`. Then checks conservation at every vertex other than
/// `source` and `sink`. Meaningful only between augmentations.
pub fn check_flow<N>(network: &N, source: VertexId, sink: VertexId) -> Result<Capacity, FlowError>
where
    N: ResidualNetwork + ?Sized,
{
    ensure_vertex(network, source)?;
    ensure_vertex(network, sink)?;

    let mut source_outflow = 0;
    for idx in 0..network.num_vertices() {
        let vertex = make_vertex(idx);
        let mut net: Capacity = 0;
        for &edge_id in network.outgoing(vertex)? {
            let edge = network.edge(edge_id)?;
            if edge.flow() > edge.capacity() {
                return Err(FlowError::Invariant(
                    ErrorInfo::new("capacity-exceeded", "flow exceeds capacity")
                        .with_context("edge", edge_id.as_raw())
                        .with_context("flow", edge.flow())
                        .with_context("capacity", edge.capacity()),
                ));
            }
            if edge.is_forward() && edge.flow() < 0 {
                return Err(FlowError::Invariant(
                    ErrorInfo::new("negative-forward-flow", "forward edge carries negative flow")
                        .with_context("edge", edge_id.as_raw())
                        .with_context("flow", edge.flow()),
                ));
            }
            let partner = network.edge(edge.reverse())?;
            if partner.reverse() != edge_id {
                return Err(FlowError::Invariant(
                    ErrorInfo::new("pairing-broken", "reverse link is not involutive")
                        .with_context("edge", edge_id.as_raw())
                        .with_context("reverse", edge.reverse().as_raw()),
                ));
            }
            if partner.flow() != -edge.flow() {
                return Err(FlowError::Invariant(
                    ErrorInfo::new("antisymmetry-broken", "reverse flow is not the negation")
                        .with_context("edge", edge_id.as_raw())
                        .with_context("flow", edge.flow())
                        .with_context("reverse_flow", partner.flow()),
                ));
            }
            net += edge.flow();
        }
        if vertex == source {
            source_outflow = net;
        } else if vertex != sink && net != 0 {
            return Err(FlowError::Invariant(
                ErrorInfo::new("conservation-broken", "inflow differs from outflow")
                    .with_context("vertex", vertex.as_raw())
                    .with_context("net_outflow", net),
            ));
        }
    }
    Ok(source_outflow)
}
