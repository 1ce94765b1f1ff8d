pub mod traits;
pub mod directed;
pub mod generators;
pub mod parse;
pub mod topological;

pub use traits::{DirectedEdge, EdgeId, Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use topological::{is_topological_order, Topological};
