#![allow(dead_code)]

use bltl_monitor::bltl::FormulaDefinition;
use bltl_monitor::bltl::evaluation::Trace;
use bltl_monitor::signal::Signal;

pub fn intervals(signal: &Signal) -> Vec<(f64, f64)> {
    signal.intervals().map(|h| (h.left(), h.right())).collect()
}

pub fn domain(signal: &Signal) -> (f64, f64) {
    (signal.first(), signal.last())
}

/// Builds a trace sampled at `0, 1, ..., n - 1` from per-predicate columns.
pub fn unit_trace(columns: Vec<Vec<bool>>) -> Trace {
    let samples = columns.first().map_or(0, Vec::len);
    Trace {
        timestamps: (0..samples).map(|t| t as f64).collect(),
        predicates: columns,
    }
}

pub fn p(index: usize) -> Box<FormulaDefinition> {
    Box::new(FormulaDefinition::Predicate(index))
}

/// Truth of `formula` at the integer instant `k` of a unit-sampled trace,
/// where `cells[j]` is the predicate vector held on `[j, j + 1)`.
///
/// Only valid for integer horizons and `k + formula.min_time() < cells.len()`.
pub fn sampled_truth(formula: &FormulaDefinition, cells: &[Vec<bool>], k: usize) -> bool {
    match formula {
        FormulaDefinition::True => true,
        FormulaDefinition::False => false,
        FormulaDefinition::Predicate(index) => cells[k][*index],
        FormulaDefinition::Not(f) => !sampled_truth(f, cells, k),
        FormulaDefinition::And(f1, f2) => {
            sampled_truth(f1, cells, k) && sampled_truth(f2, cells, k)
        }
        FormulaDefinition::Or(f1, f2) => sampled_truth(f1, cells, k) || sampled_truth(f2, cells, k),
        FormulaDefinition::Implies(f1, f2) => {
            !sampled_truth(f1, cells, k) || sampled_truth(f2, cells, k)
        }
        FormulaDefinition::Future(horizon, f) => {
            (k..=k + *horizon as usize).any(|j| sampled_truth(f, cells, j))
        }
        FormulaDefinition::Globally(horizon, f) => {
            (k..=k + *horizon as usize).all(|j| sampled_truth(f, cells, j))
        }
        FormulaDefinition::Until(horizon, f1, f2) => (k..=k + *horizon as usize).any(|j| {
            sampled_truth(f2, cells, j) && (k..j).all(|i| sampled_truth(f1, cells, i))
        }),
    }
}
