//! # BLTL Monitor - Online Bounded Linear Temporal Logic
//!
//! `bltl_monitor` checks BLTL safety properties over streams of time-stamped
//! boolean predicate samples. Truth values are kept as half-open time
//! intervals, and every temporal operator delays its output only by the
//! look-ahead its horizon requires.
//!
//! It includes:
//! - the interval and signal algebra ([`signal`]),
//! - incremental formula nodes and a monitor builder ([`bltl`]), and
//! - a batch driver for recorded traces ([`bltl::evaluation`]).
//!
//! ## Simple usage
//!
//! ```no_run
//! use bltl_monitor::bltl::{BltlMonitor, FormulaDefinition};
//!
//! // G[0, 1](p0)
//! let formula = FormulaDefinition::Globally(1.0, Box::new(FormulaDefinition::Predicate(0)));
//! let mut monitor = BltlMonitor::builder()
//!     .formula(formula)
//!     .predicates(1)
//!     .build()
//!     .unwrap();
//!
//! monitor.initial_conditions(0.0, &[true]).unwrap();
//! monitor.extend_trace(1.0, &[true]).unwrap();
//! monitor.extend_trace(2.0, &[false]).unwrap();
//! monitor.extend_trace(3.0, &[true]).unwrap();
//!
//! assert!(!monitor.check_safety());
//! println!("{}", monitor.formula_evaluation());
//! ```

pub mod bltl;
pub mod error;
pub mod signal;
