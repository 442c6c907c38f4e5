use std::num::NonZeroUsize;

use clap::{ArgAction, Parser};
use quadra_common::config::Config;

#[derive(Parser)]
#[command(name = "quadra")]
#[command(version)]
#[command(about = "Integrates sin(x) over an interval read from stdin.")]
#[command(
    long_about = "Reads two numbers a and b (0 <= a <= b <= PI) from stdin and prints the \
                  midpoint and Simpson estimates of the integral of sin(x) over [a, b] \
                  for 5, 10, 20, 100, 500 and 1000 subintervals."
)]
pub struct CommandLine {
    /// Hide warnings (-q) or all diagnostics (-qq)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log every estimate and a run summary
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Give up after this many rejected intervals
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<NonZeroUsize>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
            max_attempts: self.max_attempts,
        }
    }
}
