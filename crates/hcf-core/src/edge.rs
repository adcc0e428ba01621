//! Residual edge records stored in a flow network arena.

use serde::{Deserialize, Serialize};

use crate::{EdgeId, VertexId};

/// Integer type used for capacities and flow amounts.
///
/// Signed so that a reverse edge can carry the negated flow of its partner.
pub type Capacity = i64;

/// One directed arc of a residual network.
///
/// Records are created in forward/reverse pairs by [`ResidualEdge::pair`] and the
/// pairing never changes afterwards. A forward record carries the assigned
/// capacity, its reverse starts with capacity zero, and both start with zero
/// flow. Between augmentations `flow == -reverse.flow` holds for every pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualEdge {
    tail: VertexId,
    head: VertexId,
    capacity: Capacity,
    flow: Capacity,
    reverse: EdgeId,
    forward: bool,
}

impl ResidualEdge {
    /// Creates a forward record `tail -> head` and its zero-capacity reverse.
    ///
    /// `forward_id` and `reverse_id` are the arena slots the two records will
    /// occupy; each record stores the slot of the other.
    pub fn pair(
        tail: VertexId,
        head: VertexId,
        capacity: Capacity,
        forward_id: EdgeId,
        reverse_id: EdgeId,
    ) -> (Self, Self) {
        let forward = Self {
            tail,
            head,
            capacity,
            flow: 0,
            reverse: reverse_id,
            forward: true,
        };
        let reverse = Self {
            tail: head,
            head: tail,
            capacity: 0,
            flow: 0,
            reverse: forward_id,
            forward: false,
        };
        (forward, reverse)
    }

    /// Returns the vertex the edge leaves.
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// Returns the vertex the edge enters.
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Returns the capacity fixed at creation.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the current flow.
    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// Returns the identifier of the antiparallel partner.
    pub fn reverse(&self) -> EdgeId {
        self.reverse
    }

    /// Returns whether this is the capacity-carrying half of its pair.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Returns `capacity - flow`, the amount that can still be pushed.
    pub fn residual(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// Adjusts the flow by `delta`. Only this side of the pair is touched.
    pub fn add_flow(&mut self, delta: Capacity) {
        self.flow += delta;
    }

    /// Clears the flow back to zero.
    pub fn clear_flow(&mut self) {
        self.flow = 0;
    }
}
