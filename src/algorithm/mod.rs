pub mod traits;
pub mod acyclic;
pub mod report;

pub use traits::{Extremum, Maximize, Minimize, PathTree};
pub use acyclic::{solve_all_sources, AcyclicSP, CriticalPath};
