//! # Composite Integration
//!
//! Splits an [`Interval`] into equal-width, contiguous subintervals and sums a
//! [`QuadratureRule`] estimate over them, left to right.

use std::num::NonZeroUsize;

use quadra_common::interval::Interval;

use crate::rule::QuadratureRule;

/// A subinterval produced by partitioning.
///
/// Unlike [`Interval`] it carries no domain guarantee: accumulated rounding can
/// move the last `hi` marginally past the parent's right border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub lo: f64,
    pub hi: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Iterator over the subintervals of an equal-width partition.
///
/// Each segment starts exactly where the previous one ended.
#[derive(Debug, Clone)]
pub struct Partition {
    next_lo: f64,
    step: f64,
    remaining: usize,
}

impl Partition {
    pub fn new(interval: Interval, parts: NonZeroUsize) -> Self {
        Self {
            next_lo: interval.left_border(),
            step: interval.width() / parts.get() as f64,
            remaining: parts.get(),
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for Partition {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.remaining == 0 {
            return None;
        }
        let lo: f64 = self.next_lo;
        let hi: f64 = lo + self.step;
        self.next_lo = hi;
        self.remaining -= 1;
        Some(Segment { lo, hi })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Partition {}

/// Composite estimate of the integral of `sin` over `interval` using `parts` subintervals.
pub fn integrate<R>(interval: Interval, parts: NonZeroUsize, rule: &R) -> f64
where
    R: QuadratureRule + ?Sized,
{
    Partition::new(interval, parts)
        .map(|segment| rule.estimate(segment.lo, segment.hi))
        .fold(0.0, |sum, estimate| sum + estimate)
}
