use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::algorithm::acyclic::AcyclicSP;
use crate::graph::{DirectedEdge, Graph};

/// An edge of a reported path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Shortest and longest path from the source to one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub source: usize,
    pub target: usize,
    pub reachable: bool,
    /// `None` when the target is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_distance: Option<f64>,
    #[serde(default)]
    pub path: Vec<ReportEdge>,
    #[serde(default)]
    pub longest_path: Vec<ReportEdge>,
}

fn to_f64<W: Float>(value: W) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn convert<W>(edges: Option<Vec<&DirectedEdge<W>>>) -> Vec<ReportEdge>
where
    W: Float + Debug,
{
    edges
        .unwrap_or_default()
        .into_iter()
        .map(|e| ReportEdge {
            from: e.from(),
            to: e.to(),
            weight: to_f64(e.weight()),
        })
        .collect()
}

impl PathReport {
    /// Builds the report for a single target
    pub fn for_target<W, G>(engine: &AcyclicSP<'_, W, G>, target: usize) -> Self
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let reachable = engine.has_path_to(target);
        PathReport {
            source: engine.source(),
            target,
            reachable,
            distance: reachable.then(|| to_f64(engine.distance_to(target))),
            longest_distance: reachable.then(|| to_f64(engine.longest_distance_to(target))),
            path: convert(engine.path_to(target)),
            longest_path: convert(engine.longest_path_to(target)),
        }
    }

    /// Builds one report per vertex of the graph
    pub fn collect<W, G>(engine: &AcyclicSP<'_, W, G>) -> Vec<Self>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        (0..engine.vertex_count())
            .map(|target| Self::for_target(engine, target))
            .collect()
    }
}
