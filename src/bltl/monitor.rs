use crate::bltl::core::FormulaNode;
use crate::bltl::formula_definition::FormulaDefinition;
use crate::bltl::operators::atomic_operators::{BooleanNode, PredicateNode};
use crate::bltl::operators::not_operator::NotNode;
use crate::bltl::operators::or_operator::OrNode;
use crate::bltl::operators::until_operator::UntilNode;
use crate::error::{FormulaError, MonitorError, Result};
use crate::signal::Signal;
use tracing::{debug, warn};

/// Online safety monitor for a BLTL formula.
///
/// The monitored tree is the negation of the user formula, so the formula
/// holds everywhere evaluated so far exactly when the accumulated evaluation
/// has no active interval.
#[derive(Clone)]
pub struct BltlMonitor {
    root: Box<dyn FormulaNode>,
    specification: String,
    evaluation: Signal,
    started: bool,
    violation_reported: bool,
}

impl BltlMonitor {
    /// Wraps an already built formula tree.
    pub fn new(formula: Box<dyn FormulaNode>) -> Self {
        let specification = formula.to_string();
        BltlMonitor {
            root: Box::new(NotNode::new(formula)),
            specification,
            evaluation: Signal::default(),
            started: false,
            violation_reported: false,
        }
    }

    /// Creates a new builder instance.
    pub fn builder() -> BltlMonitorBuilder {
        BltlMonitorBuilder::new()
    }

    /// Feeds the first sample. Can only be called once.
    pub fn initial_conditions(&mut self, ts: f64, preds: &[bool]) -> Result<()> {
        if self.started {
            return Err(MonitorError::AlreadyStarted);
        }
        self.root.start(ts, preds)?;
        self.evaluation.reset(ts, ts)?;
        self.started = true;
        debug!(time = ts, formula = %self.specification, "monitor started");
        Ok(())
    }

    /// Feeds the next sample and accumulates the newly decided part of the
    /// negated formula.
    ///
    /// A failed call leaves the monitor unchanged.
    pub fn extend_trace(&mut self, t: f64, preds: &[bool]) -> Result<()> {
        if !self.started {
            return Err(MonitorError::NotStarted);
        }
        self.root.update(t, preds)?;
        let fragment = self.root.values();
        self.evaluation.append(fragment)?;
        debug!(
            time = t,
            fragment_first = fragment.first(),
            fragment_last = fragment.last(),
            intervals = self.evaluation.interval_count(),
            "trace extended"
        );

        if !self.violation_reported && self.evaluation.interval_count() > 0 {
            self.violation_reported = true;
            if let Some(first) = self.evaluation.intervals().next() {
                warn!(
                    at = first.left(),
                    formula = %self.specification,
                    "formula violated"
                );
            }
        }
        Ok(())
    }

    /// `true` iff the formula has held on every instant evaluated so far.
    pub fn check_safety(&self) -> bool {
        self.evaluation.interval_count() == 0
    }

    /// Accumulated evaluation of the negated formula: the instants where the
    /// formula was false.
    pub fn formula_evaluation(&self) -> &Signal {
        &self.evaluation
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Delay between the latest sample and the latest decided instant.
    pub fn min_time(&self) -> f64 {
        self.root.min_time()
    }

    /// Returns the string representation of the monitored formula.
    pub fn specification_to_string(&self) -> String {
        self.specification.clone()
    }
}

/// The Builder pattern struct for BltlMonitor.
#[derive(Debug, Default)]
pub struct BltlMonitorBuilder {
    formula: Option<FormulaDefinition>,
    predicates: Option<usize>,
}

impl BltlMonitorBuilder {
    pub fn new() -> Self {
        BltlMonitorBuilder::default()
    }

    /// Sets the formula definition to be monitored.
    pub fn formula(mut self, formula: FormulaDefinition) -> Self {
        self.formula = Some(formula);
        self
    }

    /// Declares the width of the predicate vectors that will be fed.
    pub fn predicates(mut self, width: usize) -> Self {
        self.predicates = Some(width);
        self
    }

    /// Builds the monitor, checking the formula against the declared width.
    pub fn build(self) -> Result<BltlMonitor, FormulaError> {
        let formula = self.formula.ok_or(FormulaError::MissingFormula)?;
        let needed = formula.predicate_count();
        let root = build_formula_node(formula)?;

        if let Some(width) = self.predicates
            && needed > width
        {
            return Err(FormulaError::PredicateOutOfRange {
                index: needed - 1,
                width,
            });
        }
        Ok(BltlMonitor::new(root))
    }
}

/// Recursively builds the executable node tree, lowering derived operators:
///
/// ```text
/// x ∧ y      = ¬(¬x ∨ ¬y)
/// x → y      = ¬x ∨ y
/// F[0,a] x   = True U[0,a] x
/// G[0,a] x   = ¬(True U[0,a] ¬x)
/// ```
pub fn build_formula_node(
    formula: FormulaDefinition,
) -> Result<Box<dyn FormulaNode>, FormulaError> {
    let node: Box<dyn FormulaNode> = match formula {
        FormulaDefinition::True => Box::new(BooleanNode::new(true)),
        FormulaDefinition::False => Box::new(BooleanNode::new(false)),
        // no predicate vector can be long enough to hold this index
        FormulaDefinition::Predicate(usize::MAX) => {
            return Err(FormulaError::InvalidPredicateIndex(usize::MAX as f64));
        }
        FormulaDefinition::Predicate(index) => Box::new(PredicateNode::new(index)),

        FormulaDefinition::Not(op) => Box::new(NotNode::new(build_formula_node(*op)?)),

        FormulaDefinition::And(l, r) => {
            let not_left = Box::new(NotNode::new(build_formula_node(*l)?));
            let not_right = Box::new(NotNode::new(build_formula_node(*r)?));
            Box::new(NotNode::new(Box::new(OrNode::new(not_left, not_right))))
        }

        FormulaDefinition::Or(l, r) => {
            let left = build_formula_node(*l)?;
            let right = build_formula_node(*r)?;
            Box::new(OrNode::new(left, right))
        }

        FormulaDefinition::Implies(l, r) => {
            let not_left = Box::new(NotNode::new(build_formula_node(*l)?));
            let right = build_formula_node(*r)?;
            Box::new(OrNode::new(not_left, right))
        }

        FormulaDefinition::Future(horizon, op) => {
            let child = build_formula_node(*op)?;
            Box::new(until(Box::new(BooleanNode::new(true)), child, horizon)?)
        }

        FormulaDefinition::Globally(horizon, op) => {
            let not_child = Box::new(NotNode::new(build_formula_node(*op)?));
            let eventually_not = until(Box::new(BooleanNode::new(true)), not_child, horizon)?;
            Box::new(NotNode::new(Box::new(eventually_not)))
        }

        FormulaDefinition::Until(horizon, l, r) => {
            let left = build_formula_node(*l)?;
            let right = build_formula_node(*r)?;
            Box::new(until(left, right, horizon)?)
        }
    };
    Ok(node)
}

fn until(
    left: Box<dyn FormulaNode>,
    right: Box<dyn FormulaNode>,
    horizon: f64,
) -> Result<UntilNode, FormulaError> {
    UntilNode::new(left, right, horizon).map_err(|_| FormulaError::InvalidHorizon(horizon))
}
