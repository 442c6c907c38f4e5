//! # Quadra Common
//!
//! Types shared by every crate of the workspace:
//! * **[`interval`]**: the validated integration interval and its validation errors.
//! * **[`config`]**: runtime settings and the fixed partition counts.

pub mod config;
pub mod interval;
