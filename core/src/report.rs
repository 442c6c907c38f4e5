//! # Report Generation
//!
//! Runs both rules for each partition count and renders one line per count:
//! `{count}\t{rectangle:.5}\t{simpson:.5}\n`.
//!
//! All buffers are reserved fallibly. A failed reservation aborts the whole
//! report; nothing partial is handed back.

use std::collections::TryReserveError;
use std::fmt;
use std::num::NonZeroUsize;

use quadra_common::interval::Interval;
use thiserror::Error;
use tracing::{debug, error};

use crate::integrate::integrate;
use crate::rule::Rule;

/// Initial capacity of a single report line.
const LINE_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot allocate results for {count} experiments")]
    Collection {
        count: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("Cannot write results to string in {experiment} experiment")]
    Allocation {
        experiment: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Both estimates for one partition count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub partitions: NonZeroUsize,
    pub rectangle: f64,
    pub simpson: f64,
}

impl Estimate {
    pub fn compute(interval: Interval, partitions: NonZeroUsize) -> Self {
        let [rectangle, simpson] = Rule::ALL.map(|rule| integrate(interval, partitions, &rule));
        Self {
            partitions,
            rectangle,
            simpson,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.5}\t{:.5}", self.partitions, self.rectangle, self.simpson)
    }
}

/// Builds the report lines for `counts`, in order, each terminated by `\n`.
pub fn generate(interval: Interval, counts: &[NonZeroUsize]) -> Result<Vec<String>, ReportError> {
    generate_with_line_capacity(interval, counts, LINE_CAPACITY)
}

fn generate_with_line_capacity(
    interval: Interval,
    counts: &[NonZeroUsize],
    line_capacity: usize,
) -> Result<Vec<String>, ReportError> {
    let lines: Vec<String> = reserve_lines(counts.len(), line_capacity).inspect_err(|err| {
        error!("{err}");
    })?;

    let lines: Vec<String> = lines
        .into_iter()
        .zip(counts)
        .map(|(mut line, &partitions)| {
            let estimate: Estimate = Estimate::compute(interval, partitions);
            debug!(
                partitions = partitions.get(),
                rectangle = estimate.rectangle,
                simpson = estimate.simpson,
                "estimated"
            );
            line.push_str(&estimate.to_string());
            line.push('\n');
            line
        })
        .collect();

    Ok(lines)
}

/// Reserves the collection and every line up front so a failure leaves nothing to print.
fn reserve_lines(count: usize, line_capacity: usize) -> Result<Vec<String>, ReportError> {
    let mut lines: Vec<String> = Vec::new();
    lines
        .try_reserve_exact(count)
        .map_err(|source| ReportError::Collection { count, source })?;

    for experiment in 0..count {
        let mut line: String = String::new();
        line.try_reserve_exact(line_capacity)
            .map_err(|source| ReportError::Allocation { experiment, source })?;
        lines.push(line);
    }
    Ok(lines)
}
