// SPDX-License-Identifier: Apache-2.0

//! Parses a JSON object file and prints its node tree.
//!
//! Set `RUST_LOG=debug` to see the parser's own diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tinyjson::{parse_copy, Json, JsonValue, Node, ParseError};

#[derive(ClapParser, Debug)]
#[command(name = "tinyjson-dump", about = "Parse a JSON object and print its node tree")]
struct Args {
    /// JSON file holding a single top-level object
    path: PathBuf,

    /// Number of node slots in the pool
    #[arg(short, long, default_value_t = 64)]
    nodes: usize,

    /// Double the pool and retry while it runs out of slots
    #[arg(long)]
    grow: bool,

    /// Print only the top-level property with this name
    #[arg(long, value_name = "NAME")]
    get: Option<String>,
}

fn print_tree(value: JsonValue<'_>, depth: usize) {
    let indent = depth * 2;
    let label = value.name().unwrap_or("-");
    match value.value() {
        Some(literal) => println!("{:indent$}{} ({}) = {}", "", label, value.kind(), literal),
        None => println!("{:indent$}{} ({})", "", label, value.kind()),
    }
    for child in value.children() {
        print_tree(child, depth + 1);
    }
}

fn report(json: &Json<'_>, get: Option<&str>) -> ExitCode {
    let Some(name) = get else {
        print_tree(json.root(), 0);
        return ExitCode::SUCCESS;
    };
    match json.root().property(name) {
        Some(member) => {
            match member.value() {
                Some(literal) => println!("{}", literal),
                None => print_tree(member, 0),
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No property named '{}'", name);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match std::fs::read(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "Error: Could not read file '{}': {}",
                args.path.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    // parse_copy rewrites the scratch copy, so each retry starts from pristine input.
    let mut scratch = vec![0u8; source.len()];
    let mut capacity = args.nodes;
    loop {
        let mut nodes = vec![Node::EMPTY; capacity];
        match parse_copy(&source, &mut scratch, &mut nodes) {
            Ok(json) => {
                log::info!(
                    "Parsed {} nodes with a pool of {}",
                    json.nodes_used(),
                    capacity
                );
                return report(&json, args.get.as_deref());
            }
            Err(ParseError::PoolExhausted) if args.grow => {
                let grown = capacity.saturating_mul(2).max(1);
                log::info!("Pool of {} nodes exhausted, retrying with {}", capacity, grown);
                capacity = grown;
            }
            Err(err) => {
                eprintln!("Parse error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
}
