//! Unary logical negation operator.
//!
//! [`NotNode`] wraps a single child and reports the complement of the child's
//! true-intervals over the same window.

use crate::bltl::core::{FormulaNode, NodeClock};
use crate::error::Result;
use crate::signal::Signal;
use std::fmt::Display;

/// Negation `¬φ`.
#[derive(Clone)]
pub struct NotNode {
    operand: Box<dyn FormulaNode>,
    clock: NodeClock,
    min_time: f64,
    predicate_count: usize,
    computed_values: Signal,
}

impl NotNode {
    /// Creates a new negation of `operand`. The look-ahead is the operand's.
    pub fn new(operand: Box<dyn FormulaNode>) -> Self {
        let min_time = operand.min_time();
        let predicate_count = operand.predicate_count();
        NotNode {
            operand,
            clock: NodeClock::default(),
            min_time,
            predicate_count,
            computed_values: Signal::default(),
        }
    }
}

impl FormulaNode for NotNode {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_start(ts, preds, self.predicate_count)?;
        self.operand.start(ts, preds)?;
        self.computed_values.reset(ts, ts)?;
        self.clock.start(ts);
        Ok(())
    }

    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_update(t, preds, self.predicate_count)?;
        self.operand.update(t, preds)?;
        self.clock.advance(t);

        complement(self.operand.values(), &mut self.computed_values)
    }

    fn values(&self) -> &Signal {
        &self.computed_values
    }

    fn min_time(&self) -> f64 {
        self.min_time
    }

    fn predicate_count(&self) -> usize {
        self.predicate_count
    }
}

/// Writes into `out` the gaps between the active intervals of `signal`.
fn complement(signal: &Signal, out: &mut Signal) -> Result<()> {
    out.reset(signal.first(), signal.last())?;

    let mut gap_start = signal.first();
    for h in signal.intervals() {
        out.insert_active(gap_start, h.left())?;
        gap_start = h.right();
    }
    out.insert_active(gap_start, signal.last())
}

impl Display for NotNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "¬({})", self.operand)
    }
}
