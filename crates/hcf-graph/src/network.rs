use hcf_core::errors::FlowError;
use hcf_core::{Capacity, EdgeId, ResidualEdge, ResidualNetwork, VertexId};
use serde::{Deserialize, Serialize};

use crate::ids::{make_edge, make_vertex, unknown_edge, unknown_vertex};

/// Capacity and current flow of one forward arc, `tail < head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcFlow {
    /// Vertex the arc leaves.
    pub tail: u64,
    /// Vertex the arc enters.
    pub head: u64,
    /// Capacity assigned at construction.
    pub capacity: Capacity,
    /// Flow currently routed along the arc.
    pub flow: Capacity,
}

/// Arena-backed residual network.
///
/// All edge records live in one vector owned by the network and adjacency
/// lists store [`EdgeId`] indices into it. The pair created by a single
/// [`FlowNetwork::add_edge_pair`] call occupies two consecutive slots, forward
/// first. Records are never added after construction or removed; only their
/// flow changes.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    dimension: u32,
    edges: Vec<ResidualEdge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    /// Creates a network with `num_vertices` isolated vertices.
    pub(crate) fn with_vertices(dimension: u32, num_vertices: usize, num_pairs: usize) -> Self {
        Self {
            dimension,
            edges: Vec::with_capacity(num_pairs.saturating_mul(2)),
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Appends a forward arc `tail -> head` with `capacity` together with its
    /// zero-capacity reverse and returns the forward identifier.
    pub(crate) fn add_edge_pair(
        &mut self,
        tail: VertexId,
        head: VertexId,
        capacity: Capacity,
    ) -> Result<EdgeId, FlowError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        let forward_id = make_edge(self.edges.len());
        let reverse_id = make_edge(self.edges.len() + 1);
        let (forward, reverse) = ResidualEdge::pair(tail, head, capacity, forward_id, reverse_id);
        self.edges.push(forward);
        self.edges.push(reverse);
        self.adjacency[tail.index()].push(forward_id);
        self.adjacency[head.index()].push(reverse_id);
        Ok(forward_id)
    }

    /// Returns the hypercube dimension the network was built for.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical edges, one per forward/reverse pair.
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    /// Returns all vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(make_vertex)
    }

    /// Returns every directed edge record, indexed by [`EdgeId`].
    pub fn edge_records(&self) -> &[ResidualEdge] {
        &self.edges
    }

    /// Returns the record addressed by `edge`.
    pub fn edge(&self, edge: EdgeId) -> Result<&ResidualEdge, FlowError> {
        self.edges
            .get(edge.index())
            .ok_or_else(|| unknown_edge(edge, self.edges.len()))
    }

    /// Returns the edges leaving `vertex`, forward and reverse records alike.
    pub fn outgoing(&self, vertex: VertexId) -> Result<&[EdgeId], FlowError> {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_vertex(vertex, self.adjacency.len()))
    }

    /// Looks up the forward record `tail -> head`, if one exists.
    pub fn find_arc(&self, tail: VertexId, head: VertexId) -> Option<EdgeId> {
        self.adjacency.get(tail.index())?.iter().copied().find(|id| {
            let edge = &self.edges[id.index()];
            edge.is_forward() && edge.head() == head
        })
    }

    /// Returns the forward records in creation order.
    pub fn forward_arcs(&self) -> impl Iterator<Item = (EdgeId, &ResidualEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.is_forward())
            .map(|(idx, edge)| (make_edge(idx), edge))
    }

    /// Returns capacity and flow of every forward arc in creation order.
    pub fn arc_flows(&self) -> Vec<ArcFlow> {
        self.forward_arcs()
            .map(|(_, edge)| ArcFlow {
                tail: edge.tail().as_raw(),
                head: edge.head().as_raw(),
                capacity: edge.capacity(),
                flow: edge.flow(),
            })
            .collect()
    }

    /// Returns the summed capacity of all forward arcs.
    pub fn total_capacity(&self) -> Capacity {
        self.forward_arcs().map(|(_, edge)| edge.capacity()).sum()
    }

    /// Returns the flow leaving `vertex` minus the flow entering it.
    pub fn net_outflow(&self, vertex: VertexId) -> Result<Capacity, FlowError> {
        // Reverse records carry the negated flow of the arcs entering `vertex`.
        let mut net = 0;
        for &id in self.outgoing(vertex)? {
            net += self.edge(id)?.flow();
        }
        Ok(net)
    }

    /// Pushes `amount` along `edge` and withdraws it from the paired reverse.
    pub fn push_flow(&mut self, edge: EdgeId, amount: Capacity) -> Result<(), FlowError> {
        let reverse = self.edge(edge)?.reverse();
        self.edge(reverse)?;
        self.edges[edge.index()].add_flow(amount);
        self.edges[reverse.index()].add_flow(-amount);
        Ok(())
    }

    /// Zeroes the flow of every record, keeping topology and capacities.
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.clear_flow();
        }
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), FlowError> {
        if vertex.as_raw() < self.adjacency.len() as u64 {
            Ok(())
        } else {
            Err(unknown_vertex(vertex, self.adjacency.len()))
        }
    }
}

impl ResidualNetwork for FlowNetwork {
    fn num_vertices(&self) -> usize {
        FlowNetwork::num_vertices(self)
    }

    fn outgoing(&self, vertex: VertexId) -> Result<&[EdgeId], FlowError> {
        FlowNetwork::outgoing(self, vertex)
    }

    fn edge(&self, edge: EdgeId) -> Result<&ResidualEdge, FlowError> {
        FlowNetwork::edge(self, edge)
    }

    fn push_flow(&mut self, edge: EdgeId, amount: Capacity) -> Result<(), FlowError> {
        FlowNetwork::push_flow(self, edge, amount)
    }

    fn reset_flows(&mut self) {
        FlowNetwork::reset_flows(self)
    }
}
