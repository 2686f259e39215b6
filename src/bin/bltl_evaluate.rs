//! Evaluates a BLTL formula over a recorded trace.
//!
//! ```text
//! bltl-evaluate <formula.json> <trace.json> [--node-description]
//! ```
//!
//! The formula file holds a serialized `FormulaDefinition`, or a node
//! description when `--node-description` is given. Exits with 0 when the
//! formula held on the whole evaluated trace, 1 on a violation and 2 on error.

use anyhow::{Context, Result, bail};
use bltl_monitor::bltl::evaluation::{Trace, evaluate_trace};
use bltl_monitor::bltl::{FormulaDefinition, parse_node_description};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: bltl-evaluate <formula.json> <trace.json> [--node-description]";

struct Args {
    formula_path: String,
    trace_path: String,
    node_description: bool,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut node_description = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--node-description" => node_description = true,
            "-h" | "--help" => bail!(USAGE),
            _ if arg.starts_with("--") => bail!("unknown option `{arg}`\n{USAGE}"),
            _ => positional.push(arg),
        }
    }
    let [formula_path, trace_path]: [String; 2] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!(USAGE))?;
    Ok(Args {
        formula_path,
        trace_path,
        node_description,
    })
}

fn read_formula(args: &Args) -> Result<FormulaDefinition> {
    let text = std::fs::read_to_string(&args.formula_path)
        .with_context(|| format!("reading formula from {}", args.formula_path))?;
    let formula = if args.node_description {
        parse_node_description(&text)?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("parsing formula from {}", args.formula_path))?
    };
    Ok(formula)
}

fn read_trace(path: &str) -> Result<Trace> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading trace from {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing trace from {path}"))
}

/// Returns whether the formula held.
fn run() -> Result<bool> {
    let args = parse_args()?;
    let formula = read_formula(&args)?;
    let trace = read_trace(&args.trace_path)?;
    info!(
        samples = trace.timestamps.len(),
        predicates = trace.predicates.len(),
        "trace loaded"
    );

    let monitor = evaluate_trace(&formula, &trace)?;

    println!("formula: {formula}");
    println!("look-ahead: {}", monitor.min_time());
    println!("violations of the formula:");
    println!("{}", monitor.formula_evaluation());
    let safe = monitor.check_safety();
    println!("{}", if safe { "SAFE" } else { "VIOLATED" });
    Ok(safe)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
