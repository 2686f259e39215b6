use crate::error::{MonitorError, Result};
use crate::signal::Signal;
use dyn_clone::{DynClone, clone_trait_object};
use std::fmt::Display;

/// Incremental evaluation protocol shared by every BLTL operator.
///
/// A node is started once with [`start`](FormulaNode::start) and then fed
/// monotonically non-decreasing timestamps through
/// [`update`](FormulaNode::update). After each update,
/// [`values`](FormulaNode::values) holds the instants where the subformula is
/// true inside
///
/// ```text
/// [max(ts, t_prev - delta), max(ts, t_cur - delta))
/// ```
///
/// where `ts` is the start time and `delta` is [`min_time`](FormulaNode::min_time).
/// Output for an instant `x` is only produced once input up to `x + delta`
/// has been seen.
///
/// Both `start` and `update` validate the whole subtree before mutating
/// anything, so a failed call leaves the node as it was.
pub trait FormulaNode: DynClone + Display {
    fn start(&mut self, ts: f64, preds: &[bool]) -> Result<()>;
    fn update(&mut self, t: f64, preds: &[bool]) -> Result<()>;
    fn values(&self) -> &Signal;
    /// Look-ahead needed before an instant can be evaluated.
    fn min_time(&self) -> f64;
    /// Minimum predicate-vector length accepted by this subtree.
    fn predicate_count(&self) -> usize;
}

clone_trait_object!(FormulaNode);

/// Lifecycle of a node: `Unstarted -> Started`, then `Started` on every update.
/// `current` is the time of the latest `start` or `update`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NodeClock {
    #[default]
    Unstarted,
    Started { current: f64 },
}

impl NodeClock {
    pub fn check_start(&self, ts: f64, preds: &[bool], predicate_count: usize) -> Result<()> {
        if matches!(self, NodeClock::Started { .. }) {
            return Err(MonitorError::AlreadyStarted);
        }
        check_time(ts)?;
        check_predicates(preds, predicate_count)
    }

    pub fn check_update(&self, t: f64, preds: &[bool], predicate_count: usize) -> Result<()> {
        let NodeClock::Started { current } = *self else {
            return Err(MonitorError::NotStarted);
        };
        check_time(t)?;
        if t < current {
            return Err(MonitorError::TimeRegression {
                time: t,
                previous: current,
            });
        }
        check_predicates(preds, predicate_count)
    }

    pub fn start(&mut self, ts: f64) {
        *self = NodeClock::Started { current: ts };
    }

    /// Moves "now" to `t` and returns the `(previous, current)` update times.
    /// Callers run [`check_update`](NodeClock::check_update) first.
    pub fn advance(&mut self, t: f64) -> (f64, f64) {
        let previous = match *self {
            NodeClock::Started { current } => current,
            NodeClock::Unstarted => t,
        };
        *self = NodeClock::Started { current: t };
        (previous, t)
    }

    pub fn is_started(&self) -> bool {
        matches!(self, NodeClock::Started { .. })
    }
}

fn check_time(t: f64) -> Result<()> {
    if !t.is_finite() {
        return Err(MonitorError::NonFiniteTime(t));
    }
    Ok(())
}

fn check_predicates(preds: &[bool], predicate_count: usize) -> Result<()> {
    if preds.len() < predicate_count {
        return Err(MonitorError::MissingPredicate {
            index: predicate_count - 1,
            len: preds.len(),
        });
    }
    Ok(())
}
