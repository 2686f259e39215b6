//! Synchronous batch driver over a recorded trace.

use crate::bltl::formula_definition::FormulaDefinition;
use crate::bltl::monitor::BltlMonitor;
use crate::error::EvaluationError;
use serde::{Deserialize, Serialize};

/// A recorded trace: one column of samples per predicate, one entry per
/// timestamp.
///
/// ```json
/// { "timestamps": [0, 1, 2], "predicates": [[true, false, true]] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub timestamps: Vec<f64>,
    pub predicates: Vec<Vec<bool>>,
}

impl Trace {
    /// Predicate vector sampled at position `step`. Callers check column
    /// lengths first.
    fn sample(&self, step: usize) -> Vec<bool> {
        self.predicates.iter().map(|column| column[step]).collect()
    }

    fn validate(&self) -> Result<(), EvaluationError> {
        if self.timestamps.is_empty() {
            return Err(EvaluationError::EmptyTrace);
        }
        let expected = self.timestamps.len();
        if let Some((column, samples)) = self
            .predicates
            .iter()
            .enumerate()
            .find(|(_, samples)| samples.len() < expected)
        {
            return Err(EvaluationError::ShortColumn {
                column,
                len: samples.len(),
                expected,
            });
        }
        Ok(())
    }
}

/// Runs `formula` over the whole `trace` and returns the monitor for querying.
pub fn evaluate_trace(
    formula: &FormulaDefinition,
    trace: &Trace,
) -> Result<BltlMonitor, EvaluationError> {
    trace.validate()?;

    let mut monitor = BltlMonitor::builder()
        .formula(formula.clone())
        .predicates(trace.predicates.len())
        .build()?;

    for (step, &t) in trace.timestamps.iter().enumerate() {
        let preds = trace.sample(step);
        if step == 0 {
            monitor.initial_conditions(t, &preds)?;
        } else {
            monitor.extend_trace(t, &preds)?;
        }
    }
    Ok(monitor)
}
