use sha2::{Digest, Sha256};

use crate::network::FlowNetwork;

/// Computes the canonical structural hash for the provided network.
///
/// Covers the dimension, the vertex count and every forward arc as
/// `(tail, head, capacity)` in creation order. Flow values are excluded, so
/// the hash is stable across max-flow runs and resets.
pub fn canonical_hash(network: &FlowNetwork) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"hcf-hypercube");
    hasher.update(network.dimension().to_le_bytes());
    hasher.update((network.num_vertices() as u64).to_le_bytes());
    hasher.update((network.num_edges() as u64).to_le_bytes());
    for (_, edge) in network.forward_arcs() {
        hasher.update(edge.tail().as_raw().to_le_bytes());
        hasher.update(edge.head().as_raw().to_le_bytes());
        hasher.update(edge.capacity().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
