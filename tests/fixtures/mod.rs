pub mod formulas;
pub mod traces;
