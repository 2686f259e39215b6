//! Half-open intervals and piecewise-constant boolean signals.
//!
//! A [`Signal`] represents a function `f: [first, last) -> {0, 1}` by the
//! ordered list of disjoint [`Interval`]s on which it is `1`. Signals are
//! written in an append-only fashion: new active intervals must arrive in
//! non-decreasing left-limit order, which keeps insertion amortized `O(1)`.

use crate::error::{MonitorError, Result};
use std::collections::VecDeque;
use std::fmt::Display;

/// Non-empty half-open interval `[left, right)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    /// Creates `[left, right)`, failing unless `left < right`.
    pub fn new(left: f64, right: f64) -> Result<Self> {
        // also rejects NaN limits
        if !(left < right) {
            return Err(MonitorError::EmptyInterval { left, right });
        }
        Ok(Interval { left, right })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns `true` if `left <= v < right`.
    pub fn contains(&self, v: f64) -> bool {
        self.left <= v && v < self.right
    }

    /// Returns `true` if the union of `self` and `other` is itself an interval,
    /// i.e. they overlap or touch.
    pub fn is_mergeable(&self, other: &Interval) -> bool {
        let (min, max) = if self.left <= other.left {
            (self, other)
        } else {
            (other, self)
        };
        min.right >= max.left
    }

    /// Union of two mergeable intervals.
    pub fn merge(&self, other: &Interval) -> Result<Interval> {
        if !self.is_mergeable(other) {
            return Err(MonitorError::NotMergeable(*self, *other));
        }
        Ok(Interval {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
        })
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}

/// Boolean function of time over the domain `[first, last)`.
///
/// Invariants:
/// - `first <= last`, and an empty domain holds no intervals;
/// - every active interval lies inside the domain;
/// - active intervals are strictly increasing and pairwise non-mergeable.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    first: f64,
    last: f64,
    intervals: VecDeque<Interval>,
}

impl Default for Signal {
    fn default() -> Self {
        Signal {
            first: 0.0,
            last: 0.0,
            intervals: VecDeque::new(),
        }
    }
}

impl Signal {
    /// Creates the always-0 function on `[first, last)`.
    pub fn new(first: f64, last: f64) -> Result<Self> {
        check_domain(first, last)?;
        Ok(Signal {
            first,
            last,
            intervals: VecDeque::new(),
        })
    }

    pub fn first(&self) -> f64 {
        self.first
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    /// Number of disjoint active intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty_domain(&self) -> bool {
        self.first == self.last
    }

    /// Active intervals, left to right.
    pub fn intervals(&self) -> std::collections::vec_deque::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Value of the function at `x`, or `None` if `x` is outside the domain.
    pub fn value_at(&self, x: f64) -> Option<bool> {
        if !(self.first <= x && x < self.last) {
            return None;
        }
        let idx = self.intervals.partition_point(|h| h.right <= x);
        Some(self.intervals.get(idx).is_some_and(|h| h.contains(x)))
    }

    /// Moves the right limit of the domain to `new_last`; the added region is 0.
    pub fn extend_domain_right(&mut self, new_last: f64) -> Result<()> {
        if new_last < self.last {
            return Err(MonitorError::DomainShrink {
                last: self.last,
                requested: new_last,
            });
        }
        self.last = new_last;
        Ok(())
    }

    /// Moves the left limit of the domain to `new_first`, dropping the
    /// content on its left and clipping the interval straddling it.
    ///
    /// If `new_first >= last` the domain collapses to `[new_first, new_first)`.
    pub fn truncate_domain_left(&mut self, new_first: f64) -> Result<()> {
        if new_first < self.first {
            return Err(MonitorError::DomainRegrow {
                first: self.first,
                requested: new_first,
            });
        }

        if new_first >= self.last {
            self.first = new_first;
            self.last = new_first;
            self.intervals.clear();
            return Ok(());
        }

        self.first = new_first;
        while self.intervals.front().is_some_and(|h| h.right <= new_first) {
            self.intervals.pop_front();
        }
        if let Some(front) = self.intervals.front_mut() {
            front.left = front.left.max(new_first);
        }
        Ok(())
    }

    /// Marks `[a, b)` as active. Empty intervals (`a >= b`) are ignored.
    ///
    /// Fails if `[a, b)` leaves the domain or if `a` is smaller than the left
    /// limit of the last active interval. Touching or overlapping the last
    /// interval merges into it.
    pub fn insert_active(&mut self, a: f64, b: f64) -> Result<()> {
        if !(a < b) {
            return Ok(());
        }
        self.check_insertion(a, b)?;

        let add = Interval::new(a, b)?;
        match self.intervals.back_mut() {
            Some(back) if back.is_mergeable(&add) => *back = back.merge(&add)?,
            _ => self.intervals.push_back(add),
        }
        Ok(())
    }

    /// Discards all content and sets the domain to `[first, last)`.
    pub fn reset(&mut self, first: f64, last: f64) -> Result<()> {
        check_domain(first, last)?;
        self.first = first;
        self.last = last;
        self.intervals.clear();
        Ok(())
    }

    /// Concatenates the next chunk `other` onto `self`.
    ///
    /// `other` must dominate the domain of `self` on both ends. The domain is
    /// extended to `other.last()` and every active interval of `other` is
    /// inserted.
    pub fn append(&mut self, other: &Signal) -> Result<()> {
        if other.last < self.last || other.first < self.first {
            return Err(MonitorError::AppendBehind {
                first: self.first,
                last: self.last,
                other_first: other.first,
                other_last: other.last,
            });
        }
        if let (Some(back), Some(front)) = (self.intervals.back(), other.intervals.front())
            && front.left < back.left
        {
            return Err(MonitorError::OutOfOrderInterval {
                left: front.left,
                last_left: back.left,
            });
        }

        self.last = other.last;
        for h in other.intervals() {
            self.insert_active(h.left, h.right)?;
        }
        Ok(())
    }

    fn check_insertion(&self, a: f64, b: f64) -> Result<()> {
        if a < self.first || b > self.last {
            return Err(MonitorError::OutsideDomain {
                left: a,
                right: b,
                first: self.first,
                last: self.last,
            });
        }
        if let Some(back) = self.intervals.back()
            && a < back.left
        {
            return Err(MonitorError::OutOfOrderInterval {
                left: a,
                last_left: back.left,
            });
        }
        Ok(())
    }
}

fn check_domain(first: f64, last: f64) -> Result<()> {
    if !(first <= last) {
        return Err(MonitorError::InvertedDomain { first, last });
    }
    Ok(())
}

/// Renders `function:[first, last) -> {0,1}` followed by `values: {...}`.
impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "function:[{}, {}) -> {{0,1}}", self.first, self.last)?;
        write!(f, "values: {{")?;
        for h in self.intervals() {
            write!(f, "{h} ")?;
        }
        write!(f, "}}")
    }
}
