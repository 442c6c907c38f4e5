//! # Interval Input
//!
//! Reads the integration interval as two whitespace-separated numbers.
//!
//! Rejected attempts are reported as warnings and reading resumes with the
//! next token; an unparsable token also discards the rest of its line. Reading stops with an error once the stream ends or the configured
//! attempt limit is reached.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use quadra_common::config::Config;
use quadra_common::interval::{Interval, IntervalError};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before a valid interval was read")]
    Exhausted,
    #[error("no valid interval after {attempts} attempts")]
    TooManyAttempts { attempts: usize },
    #[error("failed to read interval: {0}")]
    Io(#[from] io::Error),
}

/// Whitespace-separated tokens of a line-oriented stream.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, crossing line boundaries. `None` at end of stream.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Drops whatever is left of the current line.
    fn skip_line(&mut self) {
        self.pending.clear();
    }
}

/// Reads one pair of borders.
///
/// A border that fails to parse ends the attempt right away, so the token
/// after it is never consumed as its partner. `None` at end of stream.
fn next_attempt<R: BufRead>(
    tokens: &mut Tokens<R>,
) -> io::Result<Option<Result<Interval, IntervalError>>> {
    let Some(left) = tokens.next_token()? else {
        return Ok(None);
    };
    let left_border: f64 = match Interval::parse_border(&left) {
        Ok(border) => border,
        Err(err) => return Ok(Some(Err(err))),
    };

    let Some(right) = tokens.next_token()? else {
        warn!("{}", IntervalError::Malformed);
        return Ok(None);
    };
    let right_border: f64 = match Interval::parse_border(&right) {
        Ok(border) => border,
        Err(err) => return Ok(Some(Err(err))),
    };

    Ok(Some(Interval::new(left_border, right_border)))
}

/// Reads until a valid [`Interval`] is found.
pub fn read_interval<R: BufRead>(reader: R, cfg: &Config) -> Result<Interval, InputError> {
    let mut tokens: Tokens<R> = Tokens::new(reader);
    let mut rejected: usize = 0;

    loop {
        match next_attempt(&mut tokens)? {
            None => return Err(InputError::Exhausted),
            Some(Ok(interval)) => {
                debug!(%interval, rejected, "interval accepted");
                return Ok(interval);
            }
            Some(Err(err)) => {
                warn!("{err}");
                if err == IntervalError::Malformed {
                    tokens.skip_line();
                }
                rejected += 1;
            }
        }

        if let Some(max_attempts) = cfg.max_attempts {
            if rejected >= max_attempts.get() {
                return Err(InputError::TooManyAttempts { attempts: rejected });
            }
        }
    }
}
