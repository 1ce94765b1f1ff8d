use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{EdgeId, Graph};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// A topological order of a directed acyclic graph
///
/// Computed as the reverse postorder of a depth-first search. The search uses an
/// explicit stack, so long chains do not overflow the call stack, and it fails with
/// [`Error::CycleDetected`] when the graph is not acyclic (self-loops included).
#[derive(Debug, Clone)]
pub struct Topological {
    order: Vec<usize>,
    rank: Vec<usize>,
}

impl Topological {
    /// Computes a topological order of `graph`
    pub fn new<W, G>(graph: &G) -> Result<Self>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marks = vec![Mark::Unvisited; n];
        let mut postorder = Vec::with_capacity(n);
        let mut stack: Vec<(usize, Box<dyn Iterator<Item = EdgeId> + '_>)> = Vec::new();

        for root in 0..n {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::OnStack;
            stack.push((root, graph.outgoing_edges(root)));

            while let Some((v, edges)) = stack.last_mut() {
                let v = *v;
                match edges.next() {
                    Some(id) => {
                        let w = graph.edge(id).to();
                        match marks[w] {
                            Mark::Unvisited => {
                                marks[w] = Mark::OnStack;
                                stack.push((w, graph.outgoing_edges(w)));
                            }
                            Mark::OnStack => {
                                log::debug!("cycle detected: edge {} -> {} closes a cycle", v, w);
                                return Err(Error::CycleDetected { vertex: w });
                            }
                            Mark::Done => {}
                        }
                    }
                    None => {
                        marks[v] = Mark::Done;
                        postorder.push(v);
                        stack.pop();
                    }
                }
            }
        }

        postorder.reverse();
        let mut rank = vec![0; n];
        for (i, &v) in postorder.iter().enumerate() {
            rank[v] = i;
        }

        Ok(Topological {
            order: postorder,
            rank,
        })
    }

    /// The vertices in topological order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Iterates over the vertices in topological order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Position of `vertex` within the order
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn rank(&self, vertex: usize) -> usize {
        self.rank[vertex]
    }

    /// Number of vertices in the order
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the graph had no vertices
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Returns true if `order` is a permutation of the graph's vertices in which every
/// edge points forward
pub fn is_topological_order<W, G>(graph: &G, order: &[usize]) -> bool
where
    W: Float + Debug,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (i, &v) in order.iter().enumerate() {
        if v >= n || position[v] != usize::MAX {
            return false;
        }
        position[v] = i;
    }

    (0..n).all(|v| {
        graph
            .outgoing_edges(v)
            .all(|id| position[v] < position[graph.edge(id).to()])
    })
}
