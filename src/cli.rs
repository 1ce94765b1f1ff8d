//! Command-line driver support: argument parsing and path printing

use std::fmt::{Debug, Write as _};
use std::path::PathBuf;

use num_traits::Float;

use crate::algorithm::{report::PathReport, AcyclicSP};
use crate::graph::{DirectedEdge, Graph};

/// Errors raised while reading command-line arguments
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing argument: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unexpected argument: {0}")]
    Unexpected(String),
}

/// Configuration for a single run of the driver
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub source: usize,
    pub json: bool,
    pub precision: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tinyEWDAG.txt"),
            source: 0,
            json: false,
            precision: 2,
        }
    }
}

pub const USAGE: &str = "usage: acyclic_sp <edge-list-file> <source> [--json] [--precision N]";

impl RunConfig {
    /// Parses `<edge-list-file> <source> [--json] [--precision N]`
    ///
    /// `args` must not include the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            if arg == "--json" {
                config.json = true;
            } else if arg == "--precision" {
                let value = args.next().ok_or(ConfigError::Missing("--precision"))?;
                config.precision = value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "--precision",
                    value,
                })?;
            } else if arg.starts_with("--") {
                return Err(ConfigError::Unexpected(arg));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        config.input = positional
            .next()
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("edge-list-file"))?;
        let source = positional.next().ok_or(ConfigError::Missing("source"))?;
        config.source = source.parse().map_err(|_| ConfigError::InvalidValue {
            name: "source",
            value: source,
        })?;
        if let Some(extra) = positional.next() {
            return Err(ConfigError::Unexpected(extra));
        }

        Ok(config)
    }
}

/// Renders every shortest path, then every longest path, one target per line
///
/// Lines look like `0 to 4 (3.00): 0->1  5.00   1->3  1.00   3->4 -3.00`.
pub fn render_text<W, G>(engine: &AcyclicSP<'_, W, G>, precision: usize) -> String
where
    W: Float + Debug,
    G: Graph<W>,
{
    let mut out = String::new();
    render_section(&mut out, engine, precision, |t| {
        (engine.distance_to(t), engine.path_to(t))
    });
    out.push_str("--------------------- longest paths ---------------------\n");
    render_section(&mut out, engine, precision, |t| {
        (engine.longest_distance_to(t), engine.longest_path_to(t))
    });
    out
}

fn render_section<'g, W, G, F>(
    out: &mut String,
    engine: &AcyclicSP<'g, W, G>,
    precision: usize,
    query: F,
) where
    W: Float + Debug + 'g,
    G: Graph<W>,
    F: Fn(usize) -> (W, Option<Vec<&'g DirectedEdge<W>>>),
{
    let s = engine.source();
    for t in 0..engine.vertex_count() {
        let (distance, path) = query(t);
        let distance = distance.to_f64().unwrap_or(f64::NAN);
        let _ = write!(out, "{} to {} ({:.*}): ", s, t, precision, distance);
        for edge in path.unwrap_or_default() {
            let _ = write!(out, "{}   ", edge);
        }
        out.push('\n');
    }
}

/// Renders one [`PathReport`] per target as a pretty-printed JSON array
pub fn render_json<W, G>(engine: &AcyclicSP<'_, W, G>) -> serde_json::Result<String>
where
    W: Float + Debug,
    G: Graph<W>,
{
    serde_json::to_string_pretty(&PathReport::collect(engine))
}
