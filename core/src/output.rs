use std::io::Write;

use tracing::error;

/// Lines written and lines lost by [`write_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub written: usize,
    pub failed: usize,
}

/// Writes every line, continuing past individual failures.
pub fn write_report<W, S>(writer: &mut W, lines: &[S]) -> WriteOutcome
where
    W: Write,
    S: AsRef<str>,
{
    let mut outcome: WriteOutcome = WriteOutcome::default();

    for (idx, line) in lines.iter().enumerate() {
        match writer.write_all(line.as_ref().as_bytes()) {
            Ok(()) => outcome.written += 1,
            Err(err) => {
                error!("Cannot write {idx} result to stdout: {err}");
                outcome.failed += 1;
            }
        }
    }

    if let Err(err) = writer.flush() {
        error!("Cannot flush results to stdout: {err}");
    }

    outcome
}
