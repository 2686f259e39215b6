#![allow(dead_code)]

use bltl_monitor::bltl::FormulaDefinition;
use rstest::fixture;

use crate::common::p;

// ---
// Formula Fixtures
// ---

#[fixture]
#[once]
pub fn predicate_0() -> FormulaDefinition {
    FormulaDefinition::Predicate(0)
}

#[fixture]
#[once]
pub fn eventually_p1() -> FormulaDefinition {
    // F[0,2] p1
    FormulaDefinition::Future(2.0, p(1))
}

#[fixture]
#[once]
pub fn globally_p0() -> FormulaDefinition {
    // G[0,1] p0
    FormulaDefinition::Globally(1.0, p(0))
}

#[fixture]
#[once]
pub fn p0_until_p1() -> FormulaDefinition {
    // p0 U[0,2] p1
    FormulaDefinition::Until(2.0, p(0), p(1))
}

#[fixture]
#[once]
pub fn response() -> FormulaDefinition {
    // G[0,1](p0 → F[0,2] p1)
    FormulaDefinition::Globally(
        1.0,
        Box::new(FormulaDefinition::Implies(
            p(0),
            Box::new(FormulaDefinition::Future(2.0, p(1))),
        )),
    )
}

#[fixture]
#[once]
pub fn response_alt() -> FormulaDefinition {
    // G[a](x) is equivalent to ¬(F[a](¬x)), and x → y to ¬x ∨ y
    FormulaDefinition::Not(Box::new(FormulaDefinition::Until(
        1.0,
        Box::new(FormulaDefinition::True),
        Box::new(FormulaDefinition::Not(Box::new(FormulaDefinition::Or(
            Box::new(FormulaDefinition::Not(p(0))),
            Box::new(FormulaDefinition::Until(2.0, Box::new(FormulaDefinition::True), p(1))),
        )))),
    )))
}
