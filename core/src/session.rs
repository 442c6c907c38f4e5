//! # Session
//!
//! One full run: read the interval, compute the report, write it out.
//!
//! Only input termination is an error. An unallocatable report is logged and
//! treated as nothing to print; failed writes are counted.

use std::io::{BufRead, Write};

use anyhow::Context;
use quadra_common::config::{Config, PARTITION_COUNTS};
use quadra_common::interval::Interval;
use tracing::debug;

use crate::input;
use crate::output::{self, WriteOutcome};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub interval: Interval,
    /// `false` when the report could not be built.
    pub reported: bool,
    pub written: usize,
    pub failed: usize,
}

pub fn run<R, W>(reader: R, writer: &mut W, cfg: &Config) -> anyhow::Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let interval: Interval =
        input::read_interval(reader, cfg).context("no interval to integrate")?;

    let outcome: Option<WriteOutcome> = match report::generate(interval, &PARTITION_COUNTS) {
        Ok(lines) => Some(output::write_report(writer, &lines)),
        Err(_) => None,
    };

    let summary: Summary = Summary {
        interval,
        reported: outcome.is_some(),
        written: outcome.map_or(0, |o| o.written),
        failed: outcome.map_or(0, |o| o.failed),
    };
    debug!(
        %interval,
        reported = summary.reported,
        written = summary.written,
        failed = summary.failed,
        exact = interval.exact_sine_integral(),
        "session finished"
    );
    Ok(summary)
}
