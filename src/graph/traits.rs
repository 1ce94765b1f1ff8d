use std::fmt::{self, Debug, Display};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Index of an edge inside a graph's edge arena
pub type EdgeId = usize;

/// A weighted directed edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Debug,
{
    /// Creates a new edge
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Tail vertex of the edge
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex of the edge
    pub fn to(&self) -> usize {
        self.to
    }

    /// Weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// True if the edge starts and ends at the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight.to_f64().unwrap_or(f64::NAN);
        write!(f, "{}->{} {:5.2}", self.from, self.to, weight)
    }
}

/// Trait representing a read-only edge-weighted directed graph
///
/// Edges live in an arena owned by the graph and are addressed by [`EdgeId`], so
/// algorithms can hold on to edges without taking ownership of them.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the edge stored under `id`
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    fn edge(&self, id: EdgeId) -> &DirectedEdge<W>;

    /// Returns an iterator over the ids of the edges leaving `vertex`
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge and returns its id
    ///
    /// Parallel edges are kept; both endpoints must exist and the weight must be finite.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId>;
}
