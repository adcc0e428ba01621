use hcf_core::errors::FlowError;
use hcf_core::{Capacity, ResidualNetwork, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::augment::find_augmenting_path;

/// Result of a max-flow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowOutcome {
    /// Flow added by this run.
    pub value: Capacity,
    /// Number of augmenting paths pushed.
    pub augmentations: u64,
}

/// Computes a maximum `source -> sink` flow with Edmonds-Karp.
///
/// Repeatedly takes the shortest augmenting path and pushes its bottleneck
/// along every edge of the path, withdrawing the same amount from each paired
/// reverse edge. Terminates after O(V·E) augmentations.
///
/// The network is annotated in place. Flow already present is kept and
/// extended, so a second call on a saturated network returns a value of zero;
/// call [`ResidualNetwork::reset_flows`] first for a fresh computation.
#[instrument(level = "debug", skip(network), fields(vertices = network.num_vertices()))]
pub fn max_flow<N>(
    network: &mut N,
    source: VertexId,
    sink: VertexId,
) -> Result<FlowOutcome, FlowError>
where
    N: ResidualNetwork + ?Sized,
{
    let mut outcome = FlowOutcome::default();
    while let Some(path) = find_augmenting_path(&*network, source, sink)? {
        let bottleneck = path.bottleneck();
        let edges = path.edges(&*network)?;
        for &edge in &edges {
            network.push_flow(edge, bottleneck)?;
        }
        outcome.value += bottleneck;
        outcome.augmentations += 1;
        debug!(
            iteration = outcome.augmentations,
            bottleneck,
            hops = edges.len(),
            "pushed augmenting path"
        );
    }

    info!(
        source = source.as_raw(),
        sink = sink.as_raw(),
        value = outcome.value,
        augmentations = outcome.augmentations,
        "max flow complete"
    );
    Ok(outcome)
}
