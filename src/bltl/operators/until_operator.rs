//! Bounded temporal `Until`.
//!
//! `φ U[0,α] ψ` holds at `x` if `ψ` holds at some `x' ∈ [x, x + α]` and `φ`
//! holds on all of `[x, x')`. Future and Globally are expressed through it:
//! `F[0,α] ψ = true U[0,α] ψ` and `G[0,α] φ = ¬(true U[0,α] ¬φ)`.

use crate::bltl::core::{FormulaNode, NodeClock};
use crate::error::{MonitorError, Result};
use crate::signal::{Interval, Signal};
use std::fmt::Display;
use tracing::trace;

#[derive(Clone)]
pub struct UntilNode {
    left: Box<dyn FormulaNode>,
    right: Box<dyn FormulaNode>,
    horizon: f64,
    left_buffer: Signal,
    right_buffer: Signal,
    clock: NodeClock,
    children_time: f64,
    predicate_count: usize,
    computed_values: Signal,
}

impl UntilNode {
    /// Creates `left U[0,horizon] right`. Fails unless `horizon` is positive and finite.
    pub fn new(
        left: Box<dyn FormulaNode>,
        right: Box<dyn FormulaNode>,
        horizon: f64,
    ) -> Result<Self> {
        if !(horizon > 0.0 && horizon.is_finite()) {
            return Err(MonitorError::NonPositiveHorizon(horizon));
        }
        let children_time = left.min_time().max(right.min_time());
        let predicate_count = left.predicate_count().max(right.predicate_count());
        Ok(UntilNode {
            left,
            right,
            horizon,
            left_buffer: Signal::default(),
            right_buffer: Signal::default(),
            clock: NodeClock::default(),
            children_time,
            predicate_count,
            computed_values: Signal::default(),
        })
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Accumulated `(left, right)` child output not yet finalized.
    pub fn buffered(&self) -> (&Signal, &Signal) {
        (&self.left_buffer, &self.right_buffer)
    }

    /// Drops buffered history already covered by the last output, keeping
    /// both buffers' left edges at `computed_values.last()`.
    fn release_finalized(&mut self) -> Result<()> {
        let finalized = self.computed_values.last();
        self.left_buffer.truncate_domain_left(finalized)?;
        self.right_buffer.truncate_domain_left(finalized)?;
        trace!(
            finalized,
            left = self.left_buffer.interval_count(),
            right = self.right_buffer.interval_count(),
            "until buffers trimmed"
        );
        Ok(())
    }
}

impl FormulaNode for UntilNode {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_start(ts, preds, self.predicate_count)?;
        self.left.start(ts, preds)?;
        self.right.start(ts, preds)?;
        self.left_buffer.reset(ts, ts)?;
        self.right_buffer.reset(ts, ts)?;
        self.computed_values.reset(ts, ts)?;
        self.clock.start(ts);
        Ok(())
    }

    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_update(t, preds, self.predicate_count)?;
        self.left.update(t, preds)?;
        self.right.update(t, preds)?;
        self.clock.advance(t);

        self.left_buffer.append(self.left.values())?;
        self.right_buffer.append(self.right.values())?;
        compute_until(
            &self.left_buffer,
            &self.right_buffer,
            self.horizon,
            &mut self.computed_values,
        )?;

        self.release_finalized()
    }

    fn values(&self) -> &Signal {
        &self.computed_values
    }

    fn min_time(&self) -> f64 {
        self.children_time + self.horizon
    }

    fn predicate_count(&self) -> usize {
        self.predicate_count
    }
}

/// Until over a single pair of intervals `h1 = [a, b)` (for `φ`) and
/// `h2 = [c, d)` (for `ψ`).
///
/// If `φ` holds right up to `c` (`a < c <= b`), the result extends `h2` to
/// the left by at most `horizon`, but not before `a`. Otherwise it is `h2`.
fn unitary_until(h1: &Interval, h2: &Interval, horizon: f64) -> Result<Interval> {
    if h1.right() >= h2.left() && h1.left() < h2.left() {
        Interval::new((h2.left() - horizon).max(h1.left()), h2.right())
    } else {
        Ok(*h2)
    }
}

/// Evaluates `lhs U[0,horizon] rhs` on
/// `[min(firsts), max(min(firsts), min(lasts) - horizon))`.
///
/// A domain that is still too short for the horizon yields an empty result,
/// not an error.
fn compute_until(lhs: &Signal, rhs: &Signal, horizon: f64, out: &mut Signal) -> Result<()> {
    let first = lhs.first().min(rhs.first());
    let last = (lhs.last().min(rhs.last()) - horizon).max(first);
    out.reset(first, last)?;

    let mut lhs_iter = lhs.intervals().peekable();
    for h2 in rhs.intervals() {
        // intervals of `lhs` ending before `h2` cannot reach any later `h2` either
        while lhs_iter.next_if(|h1| h1.right() < h2.left()).is_some() {}

        let add = match lhs_iter.peek() {
            Some(h1) if h1.is_mergeable(h2) => unitary_until(h1, h2, horizon)?,
            _ => *h2,
        };

        // later intervals of `rhs` start even further right
        if add.left() >= last {
            break;
        }
        out.insert_active(add.left(), add.right().min(last))?;
    }
    Ok(())
}

impl Display for UntilNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) U[0, {}] ({})", self.left, self.horizon, self.right)
    }
}
