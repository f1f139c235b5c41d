//! Core solver trait and the per-invocation diagnostic log

/// Diagnostic lines a solver accumulates during a single invocation.
///
/// The runner creates a fresh log for every part invocation and reads it back
/// after the call returns, so nothing is shared between invocations and no
/// synchronization is needed. Lines are printed by the runner with a distinct
/// prefix, before the answer line.
#[derive(Debug, Default)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic line.
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The accumulated lines, in insertion order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the log, yielding its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One day's puzzle, as seen by the runner.
///
/// `input` is the day's puzzle input with blank lines removed. A part returns
/// `Some(answer)` or `None` when no solution is implemented or found; both
/// part methods default to `None` so a day can be registered before either
/// part is written.
///
/// Solvers are treated as opaque synchronous calls. A part is free to fan out
/// internally (rayon and friends), and free to panic on malformed input; the
/// runner catches panics at the invocation boundary.
pub trait DaySolver: Sync {
    fn solve_part1(&self, input: &[String], log: &mut RunLog) -> Option<String> {
        let _ = (input, log);
        None
    }

    fn solve_part2(&self, input: &[String], log: &mut RunLog) -> Option<String> {
        let _ = (input, log);
        None
    }

    /// Optional supplementary diagnostic action, run best-effort after both
    /// parts. Output goes to the log; failures never affect answers.
    fn misc(&self, input: &[String], log: &mut RunLog) {
        let _ = (input, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unimplemented;
    impl DaySolver for Unimplemented {}

    #[test]
    fn default_parts_return_none() {
        let mut log = RunLog::new();
        let input = vec!["x".to_string()];
        assert_eq!(Unimplemented.solve_part1(&input, &mut log), None);
        assert_eq!(Unimplemented.solve_part2(&input, &mut log), None);
        assert!(log.is_empty());
    }

    #[test]
    fn log_preserves_insertion_order() {
        let mut log = RunLog::new();
        log.note("first");
        log.note(String::from("second"));
        assert_eq!(log.lines(), ["first", "second"]);
    }
}
