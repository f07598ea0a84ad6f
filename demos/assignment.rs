//! Reads a graph in the `"1 2,2 3,3 1"` notation (comma-separated edges, each
//! edge a space-separated pair of integer vertex names) and prints its
//! strongly connected components.
//!
//! ```text
//! cargo run --example assignment -- "1 2,2 3,3 1,3 4,4 4"
//! ```

use std::{env, error::Error};

use kosaraju_scc::{compute_scc, Graph};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const DEFAULT_INPUT: &str = "1 2,2 3,3 1,3 4,4 4";

fn parse_edges(input: &str) -> Result<Vec<(i64, i64)>, Box<dyn Error>> {
    input
        .split(',')
        .filter(|edge| !edge.trim().is_empty())
        .map(|edge| -> Result<(i64, i64), Box<dyn Error>> {
            let mut tokens = edge.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(from), Some(to), None) => Ok((from.parse()?, to.parse()?)),
                _ => Err(format!("invalid edge `{edge}`").into()),
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let input = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_owned());
    let edges = parse_edges(&input)?;
    info!("parsed {} edges", edges.len());

    let graph = Graph::from_edges(edges);
    print!("{}", render(&compute_scc(&graph)));

    Ok(())
}

fn render(components: &[Vec<i64>]) -> String {
    let mut output = format!("SCC output\n\nNumber of SCC is {}\n", components.len());

    for (index, component) in components.iter().enumerate() {
        let members = component
            .iter()
            .map(|name| format!("x{name}"))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("Component number {} is : {{{members}}}\n", index + 1));
    }

    output
}
