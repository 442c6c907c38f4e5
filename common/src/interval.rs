//! # Integration Interval
//!
//! The closed interval `[left_border, right_border]` the integrand is evaluated on.
//!
//! An [`Interval`] can only be obtained through validation, so holding one
//! guarantees `0 <= left_border <= right_border <= PI`.

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

/// Reasons a pair of borders is not accepted as an [`Interval`].
///
/// The messages are the diagnostics shown to the user on every rejected attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("Cannot read interval")]
    Malformed,
    #[error("Borders of the interval must be from 0 to PI")]
    OutOfDomain,
    #[error("Left border of the interval must be less than right")]
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left_border: f64,
    right_border: f64,
}

impl Interval {
    /// Validates the borders.
    ///
    /// The domain check runs before the ordering check, so `(-1.0, -2.0)`
    /// reports [`IntervalError::OutOfDomain`].
    pub fn new(left_border: f64, right_border: f64) -> Result<Self, IntervalError> {
        if left_border.is_nan() || right_border.is_nan() {
            return Err(IntervalError::Malformed);
        }
        if left_border < 0.0 || right_border > PI {
            return Err(IntervalError::OutOfDomain);
        }
        if left_border > right_border {
            return Err(IntervalError::Inverted);
        }
        Ok(Self {
            left_border,
            right_border,
        })
    }

    /// Parses a single border. Infinite values pass and are left to the domain check.
    pub fn parse_border(token: &str) -> Result<f64, IntervalError> {
        token
            .trim()
            .parse::<f64>()
            .map_err(|_| IntervalError::Malformed)
    }

    pub fn left_border(&self) -> f64 {
        self.left_border
    }

    pub fn right_border(&self) -> f64 {
        self.right_border
    }

    pub fn width(&self) -> f64 {
        self.right_border - self.left_border
    }

    /// Exact value of the integral of `sin` over the interval.
    pub fn exact_sine_integral(&self) -> f64 {
        self.left_border.cos() - self.right_border.cos()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left_border, self.right_border)
    }
}
