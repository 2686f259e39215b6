//! Bounded Linear Temporal Logic (BLTL) public module.
//!
//! This namespace contains the building blocks for online monitoring:
//! - [`core`] the incremental node protocol,
//! - [`formula_definition`] the typed formula tree,
//! - [`description`] the external node-description format,
//! - [`operators`] incremental operator implementations,
//! - [`monitor`] the streaming safety monitor and its builder, and
//! - [`evaluation`] a synchronous batch driver over a recorded trace.

pub mod core;
pub mod description;
pub mod evaluation;
pub mod formula_definition;
pub mod monitor;
pub mod operators;

pub use description::{NodeDescription, parse_node_description};
pub use formula_definition::FormulaDefinition;
pub use monitor::{BltlMonitor, build_formula_node};
