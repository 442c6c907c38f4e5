//! Quadrature rules estimating the integral of `sin` over a single subinterval.
//!
//! The composite integrator depends on the [`QuadratureRule`] abstraction only;
//! [`Rule`] is the tagged form used where the rule is chosen at runtime.

/// Estimates the integral of `sin` over `[lo, hi]`.
pub trait QuadratureRule {
    fn estimate(&self, lo: f64, hi: f64) -> f64;
}

/// Midpoint rule: `width * sin(midpoint)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

/// Simpson's rule: `width / 6 * (sin(lo) + 4 sin(mid) + sin(hi))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simpson;

impl QuadratureRule for Rectangle {
    fn estimate(&self, lo: f64, hi: f64) -> f64 {
        (hi - lo) * ((lo + hi) / 2.0).sin()
    }
}

impl QuadratureRule for Simpson {
    fn estimate(&self, lo: f64, hi: f64) -> f64 {
        let weight: f64 = (hi - lo) / 6.0;
        let samples: f64 = lo.sin() + 4.0 * ((lo + hi) / 2.0).sin() + hi.sin();
        weight * samples
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Rectangle,
    Simpson,
}

impl Rule {
    /// Rules in the order their estimates appear on a report line.
    pub const ALL: [Rule; 2] = [Rule::Rectangle, Rule::Simpson];
}

impl QuadratureRule for Rule {
    fn estimate(&self, lo: f64, hi: f64) -> f64 {
        match self {
            Rule::Rectangle => Rectangle.estimate(lo, hi),
            Rule::Simpson => Simpson.estimate(lo, hi),
        }
    }
}
