//! Logical disjunction.
//!
//! Children of an [`OrNode`] may have different look-ahead. The child with the
//! smaller look-ahead produces output further into the future, so its fragments
//! are accumulated in a buffer until the other child catches up.

use crate::bltl::core::{FormulaNode, NodeClock};
use crate::error::Result;
use crate::signal::Signal;
use std::fmt::Display;
use tracing::trace;

/// Disjunction `φ ∨ ψ`.
#[derive(Clone)]
pub struct OrNode {
    left: Box<dyn FormulaNode>,
    right: Box<dyn FormulaNode>,
    // true if `left` is the child with the smaller look-ahead
    buffer_left: bool,
    buffer: Signal,
    clock: NodeClock,
    min_time: f64,
    predicate_count: usize,
    computed_values: Signal,
}

impl OrNode {
    pub fn new(left: Box<dyn FormulaNode>, right: Box<dyn FormulaNode>) -> Self {
        let (left_time, right_time) = (left.min_time(), right.min_time());
        let predicate_count = left.predicate_count().max(right.predicate_count());
        OrNode {
            left,
            right,
            buffer_left: left_time <= right_time,
            buffer: Signal::default(),
            clock: NodeClock::default(),
            min_time: left_time.max(right_time),
            predicate_count,
            computed_values: Signal::default(),
        }
    }

    /// Output of the faster child that has not been combined yet.
    pub fn buffered(&self) -> &Signal {
        &self.buffer
    }

    /// Drops buffered history already covered by the last output.
    ///
    /// Keeps the buffer's left edge at `computed_values.last()`, which bounds
    /// the buffer by the look-ahead difference between the children.
    fn release_finalized(&mut self) -> Result<()> {
        let finalized = self.computed_values.last();
        self.buffer.truncate_domain_left(finalized)?;
        trace!(
            finalized,
            buffered = self.buffer.interval_count(),
            "or buffer trimmed"
        );
        Ok(())
    }
}

impl FormulaNode for OrNode {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_start(ts, preds, self.predicate_count)?;
        self.left.start(ts, preds)?;
        self.right.start(ts, preds)?;
        self.buffer.reset(ts, ts)?;
        self.computed_values.reset(ts, ts)?;
        self.clock.start(ts);
        Ok(())
    }

    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_update(t, preds, self.predicate_count)?;
        self.left.update(t, preds)?;
        self.right.update(t, preds)?;
        self.clock.advance(t);

        let (early, late) = if self.buffer_left {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };
        self.buffer.append(early.values())?;
        compute_union(&self.buffer, late.values(), &mut self.computed_values)?;

        self.release_finalized()
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

/// Union of two signals, restricted to the shorter of the two domains.
///
/// Both inputs hold ordered, gapped intervals, so a single left-to-right
/// merge by left limit emits intervals in the order `insert_active` requires.
pub(crate) fn compute_union(lhs: &Signal, rhs: &Signal, out: &mut Signal) -> Result<()> {
    let first = lhs.first().min(rhs.first());
    let last = lhs.last().min(rhs.last());
    out.reset(first, last)?;

    let mut lhs_iter = lhs.intervals().peekable();
    let mut rhs_iter = rhs.intervals().peekable();

    loop {
        let next = match (lhs_iter.peek(), rhs_iter.peek()) {
            (Some(l), Some(r)) if l.left() <= r.left() => lhs_iter.next(),
            (Some(_), Some(_)) => rhs_iter.next(),
            (Some(_), None) => lhs_iter.next(),
            (None, Some(_)) => rhs_iter.next(),
            (None, None) => None,
        };
        let Some(h) = next else {
            break;
        };

        if h.left() >= last {
            break;
        }
        out.insert_active(h.left(), h.right().min(last))?;
    }
    Ok(())
}

impl Display for OrNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) ∨ ({})", self.left, self.right)
    }
}
