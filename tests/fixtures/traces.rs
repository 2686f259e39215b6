#![allow(dead_code)]

use bltl_monitor::bltl::evaluation::Trace;
use rstest::fixture;

use crate::common::unit_trace;

// ---
// Trace Fixtures
// ---

#[fixture]
#[once]
pub fn request_response_trace() -> Trace {
    unit_trace(vec![
        vec![true, true, true, true, true, false, false, true, false],
        vec![false, false, false, true, false, false, false, false, true],
    ])
}

#[fixture]
#[once]
pub fn always_true_trace() -> Trace {
    unit_trace(vec![vec![true; 4]])
}

/// p0 held on `[0, 5)`, p1 held on `[3, 4)`.
#[fixture]
#[once]
pub fn until_trace() -> Trace {
    unit_trace(vec![
        vec![true, true, true, true, true, false, false],
        vec![false, false, false, true, false, false, false],
    ])
}
