//! Executable BLTL operator nodes.
//!
//! This module groups the concrete [`FormulaNode`](crate::bltl::core::FormulaNode)
//! implementations used by the monitor:
//! - [`atomic_operators`] for boolean constants and predicate leaves,
//! - [`not_operator`] for logical negation,
//! - [`or_operator`] for logical disjunction, and
//! - [`until_operator`] for bounded temporal `Until`.
//!
//! Conjunction, implication, `Future` and `Globally` are derived from these by
//! [`build_formula_node`](crate::bltl::monitor::build_formula_node).

pub mod atomic_operators;
pub mod not_operator;
pub mod or_operator;
pub mod until_operator;
