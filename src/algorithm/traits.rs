use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{EdgeId, Graph};

/// Direction of a relaxation sweep
///
/// A sweep is fully described by the value an unreached vertex starts with and by
/// the comparison that decides whether a candidate distance replaces the current one.
pub trait Extremum: Debug + Copy + Default {
    /// Human readable name, used in log output
    const NAME: &'static str;

    /// Distance held by vertices the source does not reach
    fn unreached<W: Float>() -> W;

    /// True if `candidate` should replace `current`
    fn improves<W: Float>(candidate: W, current: W) -> bool;
}

/// Sweep that keeps the minimum accumulated weight
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimize;

/// Sweep that keeps the maximum accumulated weight
#[derive(Debug, Clone, Copy, Default)]
pub struct Maximize;

impl Extremum for Minimize {
    const NAME: &'static str = "shortest";

    fn unreached<W: Float>() -> W {
        W::infinity()
    }

    fn improves<W: Float>(candidate: W, current: W) -> bool {
        candidate < current
    }
}

impl Extremum for Maximize {
    const NAME: &'static str = "longest";

    fn unreached<W: Float>() -> W {
        W::neg_infinity()
    }

    fn improves<W: Float>(candidate: W, current: W) -> bool {
        candidate > current
    }
}

/// Distances and predecessor edges produced by one sweep
#[derive(Debug, Clone)]
pub struct PathTree<W>
where
    W: Float + Debug,
{
    /// Extremal distance from the source to each vertex
    pub distances: Vec<W>,

    /// Last edge on the extremal path into each vertex
    pub predecessors: Vec<Option<EdgeId>>,

    /// Root of the tree
    pub source: usize,
}

impl<W> PathTree<W>
where
    W: Float + Debug,
{
    /// Creates a tree in which only `source` is reached, at distance zero
    pub fn rooted<E: Extremum>(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![E::unreached::<W>(); vertex_count];
        distances[source] = W::zero();
        PathTree {
            distances,
            predecessors: vec![None; vertex_count],
            source,
        }
    }

    /// True if some path from the source into `v` has been relaxed
    ///
    /// Reachability is tracked through predecessors rather than distances, since a
    /// reachable vertex may sit at an infinite distance once a sum overflows.
    pub fn is_reached(&self, v: usize) -> bool {
        v == self.source || self.predecessors[v].is_some()
    }

    /// Relaxes every edge leaving `v` in the direction given by `E`
    ///
    /// Callers must only pass vertices that are reachable from the source, so the
    /// unreached sentinel never takes part in arithmetic. The first edge to reach a
    /// vertex is always taken, even when an overflowed candidate equals the sentinel.
    /// Self-loops are skipped.
    pub fn relax<E, G>(&mut self, graph: &G, v: usize)
    where
        E: Extremum,
        G: Graph<W>,
    {
        let base = self.distances[v];
        for id in graph.outgoing_edges(v) {
            let edge = graph.edge(id);
            if edge.is_self_loop() {
                continue;
            }

            let w = edge.to();
            let candidate = base + edge.weight();
            if !self.is_reached(w) || E::improves(candidate, self.distances[w]) {
                log::trace!(
                    "{} sweep: {} -> {} improved to {:?}",
                    E::NAME,
                    v,
                    w,
                    candidate
                );
                self.distances[w] = candidate;
                self.predecessors[w] = Some(id);
            }
        }
    }
}
