//! Leaves of the formula tree: boolean constants and predicates.

use crate::bltl::core::{FormulaNode, NodeClock};
use crate::error::Result;
use crate::signal::Signal;
use std::fmt::Display;

/// Constant `true` or `false`.
#[derive(Clone)]
pub struct BooleanNode {
    state: bool,
    clock: NodeClock,
    computed_values: Signal,
}

impl BooleanNode {
    pub fn new(state: bool) -> Self {
        BooleanNode {
            state,
            clock: NodeClock::default(),
            computed_values: Signal::default(),
        }
    }
}

impl FormulaNode for BooleanNode {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_start(ts, preds, 0)?;
        self.computed_values.reset(ts, ts)?;
        self.clock.start(ts);
        Ok(())
    }

    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_update(t, preds, 0)?;
        let (previous, current) = self.clock.advance(t);

        self.computed_values.reset(previous, current)?;
        if self.state {
            self.computed_values.insert_active(previous, current)?;
        }
        Ok(())
    }

    fn values(&self) -> &Signal {
        &self.computed_values
    }

    fn min_time(&self) -> f64 {
        0.0
    }

    fn predicate_count(&self) -> usize {
        0
    }
}

impl Display for BooleanNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.state {
            write!(f, "True")
        } else {
            write!(f, "False")
        }
    }
}

/// Atomic proposition `p<index>`, read from the predicate vector.
///
/// Samples are zero-order held: the value received at time `s` describes
/// `[s, next sample time)`.
#[derive(Clone)]
pub struct PredicateNode {
    index: usize,
    clock: NodeClock,
    held_value: bool,
    computed_values: Signal,
}

impl PredicateNode {
    pub fn new(index: usize) -> Self {
        PredicateNode {
            index,
            clock: NodeClock::default(),
            held_value: false,
            computed_values: Signal::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl FormulaNode for PredicateNode {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_start(ts, preds, self.predicate_count())?;
        self.held_value = preds[self.index];
        self.computed_values.reset(ts, ts)?;
        self.clock.start(ts);
        Ok(())
    }

    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        self.clock.check_update(t, preds, self.predicate_count())?;
        let (previous, current) = self.clock.advance(t);

        self.computed_values.reset(previous, current)?;
        if self.held_value {
            self.computed_values.insert_active(previous, current)?;
        }
        self.held_value = preds[self.index];
        Ok(())
    }

    fn values(&self) -> &Signal {
        &self.computed_values
    }

    fn min_time(&self) -> f64 {
        0.0
    }

    fn predicate_count(&self) -> usize {
        self.index.saturating_add(1)
    }
}

impl Display for PredicateNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.index)
    }
}
