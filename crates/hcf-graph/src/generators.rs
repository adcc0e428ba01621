use std::mem;

use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::rng::RngHandle;
use hcf_core::{Capacity, EdgeId, ResidualEdge};
use rand::Rng;
use tracing::info;

use crate::ids::make_vertex;
use crate::network::FlowNetwork;

/// Largest supported dimension.
///
/// Bounded twice: the `k` arcs leaving a corner can each carry up to `2^k`,
/// so `k * 2^k` must fit in [`Capacity`], and the edge-record arena and the
/// adjacency table must each stay within `isize::MAX` bytes.
pub const MAX_DIMENSION: u32 = largest_dimension();

const fn largest_dimension() -> u32 {
    let mut dimension = 0;
    while dimension + 1 < usize::BITS && storable(dimension + 1) {
        dimension += 1;
    }
    dimension
}

/// Whether a `dimension`-cube fits both the capacity type and memory.
const fn storable(dimension: u32) -> bool {
    let arc_capacity = match (1 as Capacity).checked_shl(dimension) {
        Some(capacity) if capacity > 0 => capacity,
        _ => return false,
    };
    if (dimension as Capacity).checked_mul(arc_capacity).is_none() {
        return false;
    }
    match arena_bytes(dimension) {
        Some(bytes) => bytes <= isize::MAX as usize,
        None => false,
    }
}

/// Byte size of the largest single allocation a `dimension`-cube needs.
const fn arena_bytes(dimension: u32) -> Option<usize> {
    let num_vertices = match 1usize.checked_shl(dimension) {
        Some(n) => n,
        None => return None,
    };
    let records = match (dimension as usize).checked_mul(num_vertices) {
        Some(r) => r,
        None => return None,
    };
    let edge_bytes = match records.checked_mul(mem::size_of::<ResidualEdge>()) {
        Some(b) => b,
        None => return None,
    };
    let adjacency_bytes = match num_vertices.checked_mul(mem::size_of::<Vec<EdgeId>>()) {
        Some(b) => b,
        None => return None,
    };
    if edge_bytes > adjacency_bytes {
        Some(edge_bytes)
    } else {
        Some(adjacency_bytes)
    }
}

/// Returns the vertex count `2^dimension`, or a configuration error when it
/// cannot be represented.
pub fn hypercube_order(dimension: u32) -> Result<usize, FlowError> {
    if dimension > MAX_DIMENSION {
        return Err(dimension_error(dimension));
    }
    1usize
        .checked_shl(dimension)
        .ok_or_else(|| dimension_error(dimension))
}

/// Returns the largest capacity exponent allowed for the arc `tail -> head`.
///
/// With `b(x)` the popcount of `x`, the limit is
/// `max(b(tail), k - b(tail), b(head), k - b(head))`. Bits above `dimension`
/// are not rejected; the complement terms then bottom out at zero.
pub fn capacity_exponent_limit(tail: usize, head: usize, dimension: u32) -> u32 {
    let tail_bits = tail.count_ones();
    let head_bits = head.count_ones();
    tail_bits
        .max(dimension.saturating_sub(tail_bits))
        .max(head_bits)
        .max(dimension.saturating_sub(head_bits))
}

/// Builds the `dimension`-dimensional hypercube with random capacities.
///
/// Vertices are visited in ascending order and, for each, bit positions from
/// the lowest up; the pair `(i, i ^ 2^p)` is created only when the neighbour
/// is larger, so every unordered pair gets exactly one forward/reverse pair.
/// Each forward capacity is `2^r` with `r` drawn uniformly from
/// `0..=capacity_exponent_limit`, consuming `rng` in that visiting order.
pub fn build_hypercube(dimension: u32, rng: &mut RngHandle) -> Result<FlowNetwork, FlowError> {
    let num_vertices = hypercube_order(dimension)?;
    let num_pairs = (dimension as usize)
        .checked_mul(num_vertices / 2)
        .filter(|pairs| pairs.checked_mul(2).is_some())
        .ok_or_else(|| dimension_error(dimension))?;

    let mut network = FlowNetwork::with_vertices(dimension, num_vertices, num_pairs);
    for tail in 0..num_vertices {
        for bit in 0..dimension {
            let head = tail ^ (1usize << bit);
            if head <= tail {
                continue;
            }
            let limit = capacity_exponent_limit(tail, head, dimension);
            let exponent = rng.gen_range(0..=limit);
            let capacity: Capacity = 1 << exponent;
            network.add_edge_pair(make_vertex(tail), make_vertex(head), capacity)?;
        }
    }

    info!(
        dimension,
        vertices = network.num_vertices(),
        edges = network.num_edges(),
        "built hypercube"
    );
    Ok(network)
}

fn dimension_error(dimension: u32) -> FlowError {
    FlowError::Config(
        ErrorInfo::new(
            "dimension-out-of-range",
            "hypercube dimension yields a vertex count that cannot be represented",
        )
        .with_context("dimension", dimension)
        .with_context("max_dimension", MAX_DIMENSION)
        .with_hint(format!("choose a dimension between 0 and {MAX_DIMENSION}")),
    )
}
