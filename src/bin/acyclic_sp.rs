use std::env;
use std::process;

use acyclic_sp::cli::{render_json, render_text, RunConfig, USAGE};
use acyclic_sp::{AcyclicSP, DirectedGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    log::info!("reading {} with source {}", config.input.display(), config.source);

    let graph = DirectedGraph::<f64>::from_path(&config.input)?;
    let engine = AcyclicSP::new(&graph, config.source)?;

    if config.json {
        println!("{}", render_json(&engine)?);
    } else {
        print!("{}", render_text(&engine, config.precision));
    }

    Ok(())
}
