//! Reader for the plain-text edge-list format:
//!
//! ```text
//! 8            <- vertex count
//! 13           <- edge count
//! 5 4 0.35     <- one `from to weight` triple per edge
//! ...
//! ```
//!
//! Tokens are whitespace separated and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_count(line: usize, text: &str, what: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|e| parse_error(line, format!("invalid {}: {:?} ({})", what, text.trim(), e)))
}

impl DirectedGraph<f64> {
    /// Reads a graph in edge-list format from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)))
            .filter(|line| match line {
                Ok((_, l)) => !l.trim().is_empty(),
                Err(_) => true,
            });

        let (line_no, text) = lines
            .next()
            .transpose()?
            .ok_or_else(|| parse_error(1, "missing vertex count"))?;
        let vertices = parse_count(line_no, &text, "vertex count")?;

        let (line_no, text) = lines
            .next()
            .transpose()?
            .ok_or_else(|| parse_error(line_no + 1, "missing edge count"))?;
        let expected_edges = parse_count(line_no, &text, "edge count")?;

        let mut graph = DirectedGraph::with_vertices(vertices);
        let mut last_line = line_no;
        for line in lines {
            let (line_no, text) = line?;
            last_line = line_no;

            let fields: Vec<&str> = text.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(parse_error(
                    line_no,
                    format!("expected `from to weight`, found {} field(s)", fields.len()),
                ));
            }
            let from = parse_count(line_no, fields[0], "tail vertex")?;
            let to = parse_count(line_no, fields[1], "head vertex")?;
            let weight = fields[2]
                .parse::<f64>()
                .map_err(|e| parse_error(line_no, format!("invalid weight {:?} ({})", fields[2], e)))?;

            graph.add_edge(from, to, weight).map_err(|e| parse_error(line_no, e.to_string()))?;
        }

        if graph.edges().count() != expected_edges {
            return Err(parse_error(
                last_line,
                format!(
                    "header declares {} edge(s) but {} were listed",
                    expected_edges,
                    graph.edges().count()
                ),
            ));
        }

        log::debug!(
            "parsed edge list: {} vertices, {} edges",
            vertices,
            expected_edges
        );
        Ok(graph)
    }

    /// Reads a graph in edge-list format from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl FromStr for DirectedGraph<f64> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}
