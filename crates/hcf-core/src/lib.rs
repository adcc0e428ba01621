#![deny(missing_docs)]
#![doc = "Core traits and data types for hypercube max-flow computation."]

use serde::{Deserialize, Serialize};

pub mod edge;
pub mod errors;
pub mod provenance;
pub mod rng;

pub use edge::{Capacity, ResidualEdge};
pub use errors::{ErrorInfo, FlowError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a vertex of a flow network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the identifier as an index into per-vertex arrays.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a directed edge record within a flow network arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the identifier as an index into the edge arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Structural contract shared by residual networks the flow engine can drive.
///
/// Every edge record is owned by the network and addressed by [`EdgeId`]. Each
/// record names its antiparallel partner, and [`ResidualNetwork::push_flow`]
/// must update both sides of the pair before returning.
pub trait ResidualNetwork: Send + Sync {
    /// Returns the number of vertices in the network.
    fn num_vertices(&self) -> usize;

    /// Returns the edges whose tail is `vertex`, in insertion order.
    fn outgoing(&self, vertex: VertexId) -> Result<&[EdgeId], FlowError>;

    /// Returns the edge record addressed by `edge`.
    fn edge(&self, edge: EdgeId) -> Result<&ResidualEdge, FlowError>;

    /// Pushes `amount` units along `edge` and withdraws them from its reverse.
    fn push_flow(&mut self, edge: EdgeId, amount: Capacity) -> Result<(), FlowError>;

    /// Resets the flow on every edge to zero.
    fn reset_flows(&mut self);
}
