//! Error types shared by the signal algebra, the formula nodes and the monitor.

use crate::signal::Interval;
use thiserror::Error;

/// Violation of a precondition of an interval, signal, node or monitor operation.
///
/// Operations returning this error leave their receiver untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    #[error("interval [{left}, {right}) is empty or inverted")]
    EmptyInterval { left: f64, right: f64 },

    #[error("intervals {0} and {1} cannot be merged")]
    NotMergeable(Interval, Interval),

    #[error("domain [{first}, {last}) is inverted")]
    InvertedDomain { first: f64, last: f64 },

    #[error("cannot move the domain right limit back from {last} to {requested}")]
    DomainShrink { last: f64, requested: f64 },

    #[error("cannot move the domain left limit back from {first} to {requested}")]
    DomainRegrow { first: f64, requested: f64 },

    #[error("interval [{left}, {right}) is outside the domain [{first}, {last})")]
    OutsideDomain {
        left: f64,
        right: f64,
        first: f64,
        last: f64,
    },

    #[error("interval starting at {left} arrives before the last active interval starting at {last_left}")]
    OutOfOrderInterval { left: f64, last_left: f64 },

    #[error("appended domain [{other_first}, {other_last}) does not extend [{first}, {last})")]
    AppendBehind {
        first: f64,
        last: f64,
        other_first: f64,
        other_last: f64,
    },

    #[error("time {time} precedes the previous update time {previous}")]
    TimeRegression { time: f64, previous: f64 },

    #[error("time {0} is not a finite number")]
    NonFiniteTime(f64),

    #[error("predicate vector of length {len} has no value for predicate index {index}")]
    MissingPredicate { index: usize, len: usize },

    #[error("until horizon must be a positive finite number, got {0}")]
    NonPositiveHorizon(f64),

    #[error("already started")]
    AlreadyStarted,

    #[error("updated before start")]
    NotStarted,
}

/// Malformed formula description, detected before any node tree is handed out.
#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("formula definition is required")]
    MissingFormula,

    #[error("field `{field}` is not defined in the {node} node")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("node type {0} is not valid")]
    UnknownNodeType(f64),

    #[error("predicate index must be a non-negative integer, got {0}")]
    InvalidPredicateIndex(f64),

    #[error("horizon must be a positive finite number, got {0}")]
    InvalidHorizon(f64),

    #[error("predicate index {index} is not covered by a predicate vector of width {width}")]
    PredicateOutOfRange { index: usize, width: usize },

    #[error("malformed formula description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of the batch driver.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("trace has no samples")]
    EmptyTrace,

    #[error("predicate column {column} has {len} samples but the trace has {expected} timestamps")]
    ShortColumn {
        column: usize,
        len: usize,
        expected: usize,
    },

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
