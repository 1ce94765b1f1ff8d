use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::algorithm::traits::{Maximize, Minimize, PathTree};
use crate::graph::{DirectedEdge, Graph, Topological};
use crate::{Error, Result};

/// Shortest and longest paths from a single source in an edge-weighted DAG
///
/// Both sweeps are computed eagerly by the constructor with one pass over a
/// topological order, after which every query is a read of frozen arrays. Edge
/// weights may be negative.
///
/// Queries taking a vertex index panic when the index is out of range, the same
/// way slice indexing does. Each of them has a `try_` variant that returns
/// [`Error::InvalidVertex`] instead.
#[derive(Debug, Clone)]
pub struct AcyclicSP<'g, W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    graph: &'g G,
    source: usize,
    shortest: PathTree<W>,
    longest: PathTree<W>,
}

/// The farthest vertex from the source by longest distance
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath<'g, W> {
    /// Vertex at the end of the critical path
    pub target: usize,
    /// Total weight of the critical path
    pub length: W,
    /// Edges of the critical path in source-to-target order
    pub edges: Vec<&'g DirectedEdge<W>>,
}

impl<'g, W, G> AcyclicSP<'g, W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Computes a topological order of `graph` and runs both sweeps from `source`
    ///
    /// Fails with [`Error::CycleDetected`] when `graph` is not acyclic.
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        let topological = Topological::new(graph)?;
        Ok(Self::relax_in_order(graph, topological.order(), source))
    }

    /// Runs both sweeps from `source` using a caller-supplied topological order
    ///
    /// The order must be a permutation of the vertices. Whether it respects every edge
    /// is not checked; see [`crate::graph::is_topological_order`]. On an order that does
    /// not, distances are unspecified but queries still terminate.
    pub fn with_order(graph: &'g G, order: &[usize], source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        check_permutation(order, graph.vertex_count())?;
        Ok(Self::relax_in_order(graph, order, source))
    }

    fn relax_in_order(graph: &'g G, order: &[usize], source: usize) -> Self {
        let n = graph.vertex_count();
        log::debug!(
            "relaxing {} vertices and {} edges from source {}",
            n,
            graph.edge_count(),
            source
        );

        let mut shortest: PathTree<W> = PathTree::rooted::<Minimize>(n, source);
        let mut longest: PathTree<W> = PathTree::rooted::<Maximize>(n, source);

        for &v in order {
            // Every vertex before `v` in the order is final, so this is too
            if !shortest.is_reached(v) {
                continue;
            }
            shortest.relax::<Minimize, G>(graph, v);
            longest.relax::<Maximize, G>(graph, v);
        }

        let engine = AcyclicSP {
            graph,
            source,
            shortest,
            longest,
        };
        log::debug!(
            "sweeps finished: {} of {} vertices reachable from {}",
            engine.reachable_vertices().count(),
            n,
            source
        );
        engine
    }

    /// The source vertex both sweeps start from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices in the underlying graph
    pub fn vertex_count(&self) -> usize {
        self.shortest.distances.len()
    }

    /// The graph this engine was built over
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Minimum total weight of a path from the source to `v`, or `+inf` if none exists
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn distance_to(&self, v: usize) -> W {
        self.shortest.distances[v]
    }

    /// Maximum total weight of a path from the source to `v`, or `-inf` if none exists
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn longest_distance_to(&self, v: usize) -> W {
        self.longest.distances[v]
    }

    /// True if `v` is reachable from the source
    ///
    /// Both sweeps share the same reachable set, so this governs shortest and longest
    /// path queries alike. When a path weight overflows, a reachable vertex can
    /// report an infinite distance; it still has a path.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.shortest.is_reached(v)
    }

    /// Edges of a minimum-weight path from the source to `v`
    ///
    /// Returns `None` if `v` is unreachable and an empty path for the source itself.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn path_to(&self, v: usize) -> Option<Vec<&'g DirectedEdge<W>>> {
        self.walk(&self.shortest, v)
    }

    /// Edges of a maximum-weight path from the source to `v`
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn longest_path_to(&self, v: usize) -> Option<Vec<&'g DirectedEdge<W>>> {
        self.walk(&self.longest, v)
    }

    /// Vertices of a minimum-weight path, from the source to `v` inclusive
    pub fn vertex_path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.path_to(v).map(|edges| self.vertices_of(&edges))
    }

    /// Vertices of a maximum-weight path, from the source to `v` inclusive
    pub fn longest_vertex_path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.longest_path_to(v).map(|edges| self.vertices_of(&edges))
    }

    /// Like [`distance_to`](Self::distance_to), but fails on an unknown vertex
    pub fn try_distance_to(&self, v: usize) -> Result<W> {
        self.check_vertex(v).map(|v| self.distance_to(v))
    }

    /// Like [`longest_distance_to`](Self::longest_distance_to), but fails on an unknown vertex
    pub fn try_longest_distance_to(&self, v: usize) -> Result<W> {
        self.check_vertex(v).map(|v| self.longest_distance_to(v))
    }

    /// Like [`has_path_to`](Self::has_path_to), but fails on an unknown vertex
    pub fn try_has_path_to(&self, v: usize) -> Result<bool> {
        self.check_vertex(v).map(|v| self.has_path_to(v))
    }

    /// Like [`path_to`](Self::path_to), but fails on an unknown vertex
    pub fn try_path_to(&self, v: usize) -> Result<Option<Vec<&'g DirectedEdge<W>>>> {
        self.check_vertex(v).map(|v| self.path_to(v))
    }

    /// Like [`longest_path_to`](Self::longest_path_to), but fails on an unknown vertex
    pub fn try_longest_path_to(&self, v: usize) -> Result<Option<Vec<&'g DirectedEdge<W>>>> {
        self.check_vertex(v).map(|v| self.longest_path_to(v))
    }

    /// Iterates over every vertex reachable from the source, in index order
    pub fn reachable_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&v| self.has_path_to(v))
    }

    /// The reachable vertex with the greatest longest-path distance
    ///
    /// Ties go to the lowest vertex id. This is the critical path of a
    /// precedence-constrained schedule whose jobs are the edges of the graph.
    pub fn critical_path(&self) -> CriticalPath<'g, W> {
        let target = self
            .reachable_vertices()
            .max_by_key(|&v| (OrderedFloat(self.longest_distance_to(v)), std::cmp::Reverse(v)))
            .unwrap_or(self.source);

        CriticalPath {
            target,
            length: self.longest_distance_to(target),
            edges: self.longest_path_to(target).unwrap_or_default(),
        }
    }

    fn check_vertex(&self, v: usize) -> Result<usize> {
        if v < self.vertex_count() {
            Ok(v)
        } else {
            Err(Error::InvalidVertex(v))
        }
    }

    fn walk(&self, tree: &PathTree<W>, v: usize) -> Option<Vec<&'g DirectedEdge<W>>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = v;
        while current != self.source {
            // A simple path never has more edges than the graph has vertices
            if path.len() >= self.vertex_count() {
                log::warn!(
                    "path to {} exceeds {} edges; the input graph is not acyclic",
                    v,
                    self.vertex_count()
                );
                return None;
            }
            let edge = self.graph.edge(tree.predecessors[current]?);
            path.push(edge);
            current = edge.from();
        }

        path.reverse();
        Some(path)
    }

    fn vertices_of(&self, edges: &[&DirectedEdge<W>]) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(self.source);
        vertices.extend(edges.iter().map(|e| e.to()));
        vertices
    }
}

/// Builds one engine per vertex of `graph`, sharing a single topological order
///
/// Engines are constructed in parallel; entry `s` of the result has source `s`.
pub fn solve_all_sources<W, G>(graph: &G) -> Result<Vec<AcyclicSP<'_, W, G>>>
where
    W: Float + Debug + Send + Sync,
    G: Graph<W> + Sync,
{
    let topological = Topological::new(graph)?;
    let order = topological.order();

    Ok((0..graph.vertex_count())
        .into_par_iter()
        .map(|source| AcyclicSP::relax_in_order(graph, order, source))
        .collect())
}

fn check_permutation(order: &[usize], vertex_count: usize) -> Result<()> {
    if order.len() != vertex_count {
        return Err(Error::InvalidOrder(format!(
            "order lists {} vertices but the graph has {}",
            order.len(),
            vertex_count
        )));
    }

    let mut seen = vec![false; vertex_count];
    for &v in order {
        if v >= vertex_count {
            return Err(Error::InvalidOrder(format!("vertex {} is out of range", v)));
        }
        if std::mem::replace(&mut seen[v], true) {
            return Err(Error::InvalidOrder(format!("vertex {} appears twice", v)));
        }
    }
    Ok(())
}
