//! Typed syntax tree for BLTL formulas.
//!
//! [`FormulaDefinition`] is the description handed to the monitor builder. It
//! carries the derived operators (`And`, `Implies`, `Future`, `Globally`) as
//! their own variants; they are only lowered to the primitive node kinds when
//! the executable tree is built.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A BLTL formula over boolean predicates `p0, p1, ...`.
///
/// Temporal horizons are relative to the current instant: `F[0, a] f` holds at
/// `x` if `f` holds somewhere in `[x, x + a]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FormulaDefinition {
    /// Boolean constant `True`.
    True,
    /// Boolean constant `False`.
    False,
    /// Predicate `p<index>` read from the sampled predicate vector.
    Predicate(usize),
    /// Boolean negation: `¬f`.
    Not(Box<FormulaDefinition>),
    /// Boolean conjunction: `lhs ∧ rhs`.
    And(Box<FormulaDefinition>, Box<FormulaDefinition>),
    /// Boolean disjunction: `lhs ∨ rhs`.
    Or(Box<FormulaDefinition>, Box<FormulaDefinition>),
    /// Boolean implication: `lhs → rhs`.
    Implies(Box<FormulaDefinition>, Box<FormulaDefinition>),
    /// Temporal eventually operator: `F[0,a] f`.
    Future(f64, Box<FormulaDefinition>),
    /// Temporal globally operator: `G[0,a] f`.
    Globally(f64, Box<FormulaDefinition>),
    /// Temporal until operator: `lhs U[0,a] rhs`.
    Until(f64, Box<FormulaDefinition>, Box<FormulaDefinition>),
}

impl Display for FormulaDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaDefinition::True => write!(f, "True"),
            FormulaDefinition::False => write!(f, "False"),
            FormulaDefinition::Predicate(index) => write!(f, "p{index}"),
            FormulaDefinition::Not(inner) => write!(f, "¬({inner})"),
            FormulaDefinition::And(f1, f2) => write!(f, "({f1}) ∧ ({f2})"),
            FormulaDefinition::Or(f1, f2) => write!(f, "({f1}) ∨ ({f2})"),
            FormulaDefinition::Implies(f1, f2) => write!(f, "({f1}) → ({f2})"),
            FormulaDefinition::Future(horizon, inner) => write!(f, "F[0, {horizon}]({inner})"),
            FormulaDefinition::Globally(horizon, inner) => write!(f, "G[0, {horizon}]({inner})"),
            FormulaDefinition::Until(horizon, f1, f2) => {
                write!(f, "({f1}) U[0, {horizon}] ({f2})")
            }
        }
    }
}

impl FormulaDefinition {
    /// Minimum predicate-vector length the formula can be evaluated on:
    /// one past the largest predicate index, or 0 if no predicate is used.
    /// Saturates at `usize::MAX`, which no predicate vector can satisfy.
    pub fn predicate_count(&self) -> usize {
        match self {
            FormulaDefinition::True | FormulaDefinition::False => 0,
            FormulaDefinition::Predicate(index) => index.saturating_add(1),
            FormulaDefinition::Not(f)
            | FormulaDefinition::Future(_, f)
            | FormulaDefinition::Globally(_, f) => f.predicate_count(),
            FormulaDefinition::And(f1, f2)
            | FormulaDefinition::Or(f1, f2)
            | FormulaDefinition::Implies(f1, f2)
            | FormulaDefinition::Until(_, f1, f2) => f1.predicate_count().max(f2.predicate_count()),
        }
    }

    /// Look-ahead the formula needs before an instant can be decided.
    ///
    /// This is the largest sum of horizons along any root-to-leaf path and
    /// equals [`FormulaNode::min_time`](crate::bltl::core::FormulaNode::min_time)
    /// of the built tree.
    pub fn min_time(&self) -> f64 {
        match self {
            FormulaDefinition::True
            | FormulaDefinition::False
            | FormulaDefinition::Predicate(_) => 0.0,
            FormulaDefinition::Not(f) => f.min_time(),
            FormulaDefinition::And(f1, f2)
            | FormulaDefinition::Or(f1, f2)
            | FormulaDefinition::Implies(f1, f2) => f1.min_time().max(f2.min_time()),
            FormulaDefinition::Future(horizon, f) | FormulaDefinition::Globally(horizon, f) => {
                f.min_time() + horizon
            }
            FormulaDefinition::Until(horizon, f1, f2) => f1.min_time().max(f2.min_time()) + horizon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(index: usize) -> Box<FormulaDefinition> {
        Box::new(FormulaDefinition::Predicate(index))
    }

    #[test]
    fn display_all_operators() {
        let formula = FormulaDefinition::Implies(
            Box::new(FormulaDefinition::And(p(0), Box::new(FormulaDefinition::Not(p(1))))),
            Box::new(FormulaDefinition::Or(
                Box::new(FormulaDefinition::Future(2.0, p(2))),
                Box::new(FormulaDefinition::Globally(0.5, p(3))),
            )),
        );
        assert_eq!(
            formula.to_string(),
            "((p0) ∧ (¬(p1))) → ((F[0, 2](p2)) ∨ (G[0, 0.5](p3)))"
        );
        assert_eq!(
            FormulaDefinition::Until(1.5, Box::new(FormulaDefinition::True), p(0)).to_string(),
            "(True) U[0, 1.5] (p0)"
        );
    }

    #[test]
    fn predicate_count_is_one_past_max_index() {
        assert_eq!(FormulaDefinition::True.predicate_count(), 0);
        assert_eq!(FormulaDefinition::Predicate(0).predicate_count(), 1);
        let formula = FormulaDefinition::Until(1.0, p(4), Box::new(FormulaDefinition::Not(p(2))));
        assert_eq!(formula.predicate_count(), 5);
        assert_eq!(FormulaDefinition::Predicate(usize::MAX).predicate_count(), usize::MAX);
    }

    #[test]
    fn min_time_follows_deepest_temporal_path() {
        // G[0,1](p0 ∨ F[0,2] p1) ∧ F[0,0.5] p2
        let formula = FormulaDefinition::And(
            Box::new(FormulaDefinition::Globally(
                1.0,
                Box::new(FormulaDefinition::Or(p(0), Box::new(FormulaDefinition::Future(2.0, p(1))))),
            )),
            Box::new(FormulaDefinition::Future(0.5, p(2))),
        );
        assert_eq!(formula.min_time(), 3.0);
        assert_eq!(FormulaDefinition::Not(p(0)).min_time(), 0.0);
    }

    #[test]
    fn serde_json_shape() {
        let formula = FormulaDefinition::Until(2.0, p(0), p(1));
        let json = serde_json::to_string(&formula).unwrap();
        assert_eq!(json, r#"{"Until":[2.0,{"Predicate":0},{"Predicate":1}]}"#);
        let back: FormulaDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, formula);

        let constant: FormulaDefinition = serde_json::from_str(r#""True""#).unwrap();
        assert_eq!(constant, FormulaDefinition::True);
    }
}
