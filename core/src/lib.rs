//! # Quadra Core
//!
//! Composite quadrature of `sin(x)` and the pipeline around it.
//!
//! * **[`rule`]**: per-subinterval estimates (midpoint rectangle, Simpson).
//! * **[`integrate`]**: composite integration over an equal-width partition.
//! * **[`report`]**: one formatted line per partition count.
//! * **[`input`]**: reading and validating the interval from a stream.
//! * **[`output`]**: best-effort writing of report lines.
//! * **[`session`]**: the full read, compute, write cycle.

pub mod input;
pub mod integrate;
pub mod output;
pub mod report;
pub mod rule;
pub mod session;
