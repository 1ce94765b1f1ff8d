use crate::graph::traits::{DirectedEdge, EdgeId, Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph implementation using an edge arena plus adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Every edge in insertion order; `EdgeId` indexes this vector
    edges: Vec<DirectedEdge<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [edge_id]
    adjacency: Vec<Vec<EdgeId>>,

    /// Number of edges pointing into each vertex
    in_degree: Vec<usize>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            adjacency: Vec::new(),
            in_degree: Vec::new(),
        }
    }

    /// Creates a new directed graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Iterates over all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.edges.iter()
    }

    /// Number of edges pointing into `vertex`
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree[vertex]
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, id: EdgeId) -> &DirectedEdge<W> {
        &self.edges[id]
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Debug,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.in_degree.push(0);
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_finite() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        let id = self.edges.len();
        self.edges.push(DirectedEdge::new(from, to, weight));
        self.adjacency[from].push(id);
        self.in_degree[to] += 1;
        Ok(id)
    }
}
