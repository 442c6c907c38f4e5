use std::num::NonZeroUsize;

const fn partitions(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("partition count must be positive"),
    }
}

/// Subinterval counts every report is computed for, in output order.
pub const PARTITION_COUNTS: [NonZeroUsize; 6] = [
    partitions(5),
    partitions(10),
    partitions(20),
    partitions(100),
    partitions(500),
    partitions(1000),
];

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Silences diagnostics.
    ///
    /// `1` hides retry warnings, `2` and above hides errors too.
    pub quiet: u8,
    /// Logs per-count estimates and the run summary.
    pub verbose: bool,
    pub no_color: bool,
    /// Stops reading input after this many rejected intervals.
    ///
    /// `None` keeps retrying until the input ends.
    pub max_attempts: Option<NonZeroUsize>,
}
