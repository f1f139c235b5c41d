//! Run controller: drives registry, input provider, knowledge store and
//! timing harness for one day or a whole-year sweep.
//!
//! The runner produces structured reports and never prints; rendering lives
//! in [`crate::output`]. Every solver invocation is treated as an opaque,
//! synchronous, blocking call, wrapped in `catch_unwind` so a crashing part
//! is reported instead of taking the process down.

use crate::bench::{BenchError, BenchLimits, RunStats, bench, panic_message};
use crate::error::RunError;
use crate::input::InputSource;
use crate::knowledge::{CheckResult, Knowledge};
use aoc_solver::{DaySolver, RunLog, SolverRegistry};
use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// What one part invocation produced
#[derive(Debug)]
pub enum PartOutcome {
    /// The solver returned an answer, checked against the knowledge store
    Solved { answer: String, check: CheckResult },
    /// The solver returned no answer (unimplemented or unsolved)
    NoSolution,
    /// The solver panicked; message attached
    Crashed { message: String },
}

/// Report for one part of one day
#[derive(Debug)]
pub struct PartReport {
    pub part: u8,
    /// Diagnostic lines the solver logged during the reported invocation
    pub log: Vec<String>,
    pub outcome: PartOutcome,
    /// Independent timing of the same part; errors are reported, not fatal
    pub timing: Result<RunStats, BenchError>,
}

/// Best-effort supplementary diagnostic output
#[derive(Debug)]
pub struct MiscReport {
    pub log: Vec<String>,
    pub error: Option<String>,
}

impl MiscReport {
    pub fn is_empty(&self) -> bool {
        self.log.is_empty() && self.error.is_none()
    }
}

/// Full report for one day
#[derive(Debug)]
pub struct DayReport {
    pub year: u16,
    pub day: u8,
    pub parts: Vec<PartReport>,
    pub misc: MiscReport,
}

/// One timed part in a `timeall` sweep
#[derive(Debug)]
pub struct TimedPart {
    pub day: u8,
    pub part: u8,
    pub stats: Result<RunStats, BenchError>,
}

/// Leaderboard numbers derived from a sweep (all in microseconds)
#[derive(Debug, PartialEq)]
pub struct TimingSummary {
    pub total_us: f64,
    pub worst_day: Option<(u8, f64)>,
    pub worst_part1: Option<(u8, f64)>,
    pub worst_part2: Option<(u8, f64)>,
    pub best_day: Option<(u8, f64)>,
}

/// Result of timing every registered day/part
#[derive(Debug)]
pub struct TimeAllReport {
    pub year: u16,
    pub entries: Vec<TimedPart>,
    /// Days skipped because no input was available
    pub skipped: Vec<u8>,
}

impl TimeAllReport {
    fn day_totals(&self) -> BTreeMap<u8, f64> {
        let mut totals = BTreeMap::new();
        for entry in &self.entries {
            if let Ok(stats) = &entry.stats {
                *totals.entry(entry.day).or_insert(0.0) += stats.average_us;
            }
        }
        totals
    }

    fn worst_part(&self, part: u8) -> Option<(u8, f64)> {
        self.entries
            .iter()
            .filter(|e| e.part == part)
            .filter_map(|e| e.stats.as_ref().ok().map(|s| (e.day, s.average_us)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn summary(&self) -> TimingSummary {
        let totals = self.day_totals();
        let total_us = totals.values().sum();
        let worst_day = totals
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(d, t)| (*d, *t));
        let best_day = totals
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(d, t)| (*d, *t));

        TimingSummary {
            total_us,
            worst_day,
            worst_part1: self.worst_part(1),
            worst_part2: self.worst_part(2),
            best_day,
        }
    }
}

/// Sequential driver over one year's registry. Days run one after another,
/// parts one after another, timing samples one after another; any
/// parallelism lives inside individual solvers and is invisible here.
pub struct Runner<'r, I: InputSource> {
    registry: &'r SolverRegistry,
    inputs: I,
    knowledge: Knowledge,
    limits: BenchLimits,
}

impl<'r, I: InputSource> Runner<'r, I> {
    pub fn new(
        registry: &'r SolverRegistry,
        inputs: I,
        knowledge: Knowledge,
        limits: BenchLimits,
    ) -> Self {
        Self {
            registry,
            inputs,
            knowledge,
            limits,
        }
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Run both parts of one day, then its misc action.
    ///
    /// # Errors
    /// * [`RunError::UnknownDay`] - no solver registered for `day`
    /// * [`RunError::NoInput`] - input neither cached nor fetchable
    /// * [`RunError::Knowledge`] - the attempted-marker could not be persisted
    pub fn run_day(&mut self, day: u8) -> Result<DayReport, RunError> {
        let year = self.registry.year();
        let solver = self.registry.get(day).ok_or(RunError::UnknownDay(day))?;
        let input = self.inputs.fetch(year, day).ok_or(RunError::NoInput(day))?;

        let mut parts = Vec::with_capacity(2);
        for part in 1..=2 {
            parts.push(self.run_part(solver, &input, day, part)?);
        }

        let misc = run_misc(solver, &input);

        Ok(DayReport {
            year,
            day,
            parts,
            misc,
        })
    }

    fn run_part(
        &mut self,
        solver: &'static dyn DaySolver,
        input: &[String],
        day: u8,
        part: u8,
    ) -> Result<PartReport, RunError> {
        let year = self.registry.year();
        let solve = |log: &mut RunLog| match part {
            1 => solver.solve_part1(input, log),
            _ => solver.solve_part2(input, log),
        };

        let mut log = RunLog::new();
        let outcome = match catch_unwind(AssertUnwindSafe(|| solve(&mut log))) {
            Ok(Some(answer)) => {
                let check = self.knowledge.check(year, day, part, &answer);
                PartOutcome::Solved { answer, check }
            }
            Ok(None) => PartOutcome::NoSolution,
            Err(payload) => PartOutcome::Crashed {
                message: panic_message(payload),
            },
        };

        self.knowledge.record_attempt(year, day, part)?;

        // Timed independently of the reported invocation; the log is
        // discarded per sample
        let timing = bench(self.limits, || {
            let mut scratch = RunLog::new();
            solve(&mut scratch)
        });

        Ok(PartReport {
            part,
            log: log.into_lines(),
            outcome,
            timing,
        })
    }

    /// Time every registered day/part. Days without input are skipped and
    /// listed in the report; nothing is recorded in the knowledge store.
    pub fn time_all(&mut self) -> Result<TimeAllReport, RunError> {
        let year = self.registry.year();
        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        let days: Vec<u8> = self.registry.days().collect();
        for day in days {
            let solver = self.registry.get(day).ok_or(RunError::UnknownDay(day))?;
            let Some(input) = self.inputs.fetch(year, day) else {
                skipped.push(day);
                continue;
            };

            for part in 1..=2 {
                let stats = bench(self.limits, || {
                    let mut scratch = RunLog::new();
                    match part {
                        1 => solver.solve_part1(&input, &mut scratch),
                        _ => solver.solve_part2(&input, &mut scratch),
                    }
                });
                entries.push(TimedPart { day, part, stats });
            }
        }

        Ok(TimeAllReport {
            year,
            entries,
            skipped,
        })
    }
}

fn run_misc(solver: &'static dyn DaySolver, input: &[String]) -> MiscReport {
    let mut log = RunLog::new();
    let error = catch_unwind(AssertUnwindSafe(|| solver.misc(input, &mut log)))
        .err()
        .map(panic_message);
    MiscReport {
        log: log.into_lines(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{KnowledgeUpdate, Recorded};
    use std::collections::BTreeMap;
    use std::time::Duration;
    use tempfile::TempDir;

    struct CountLines;
    impl DaySolver for CountLines {
        fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
            Some(input.len().to_string())
        }
    }

    struct Panicky;
    impl DaySolver for Panicky {
        fn solve_part1(&self, _input: &[String], _log: &mut RunLog) -> Option<String> {
            panic!("bad parse")
        }
        fn solve_part2(&self, _input: &[String], _log: &mut RunLog) -> Option<String> {
            Some("ok".to_string())
        }
    }

    struct Chatty;
    impl DaySolver for Chatty {
        fn solve_part1(&self, _input: &[String], log: &mut RunLog) -> Option<String> {
            log.note("considered 3 candidates");
            Some("7".to_string())
        }
        fn misc(&self, input: &[String], log: &mut RunLog) {
            log.note(format!("{} input lines", input.len()));
        }
    }

    static COUNT: CountLines = CountLines;
    static PANICKY: Panicky = Panicky;
    static CHATTY: Chatty = Chatty;

    struct StubInput(BTreeMap<u8, Vec<String>>);

    impl StubInput {
        fn with(day: u8, lines: &[&str]) -> Self {
            let mut map = BTreeMap::new();
            map.insert(day, lines.iter().map(|s| s.to_string()).collect());
            Self(map)
        }

        fn empty() -> Self {
            Self(BTreeMap::new())
        }
    }

    impl InputSource for StubInput {
        fn fetch(&self, _year: u16, day: u8) -> Option<Vec<String>> {
            self.0.get(&day).cloned()
        }
    }

    fn fast_limits() -> BenchLimits {
        BenchLimits {
            min_runs: 2,
            max_runs: 3,
            min_time_spent: Duration::ZERO,
        }
    }

    fn knowledge_in(temp: &TempDir) -> Knowledge {
        Knowledge::load(temp.path().join("knowledge.json")).unwrap()
    }

    #[test]
    fn end_to_end_line_count_day() {
        let temp = TempDir::new().unwrap();
        let registry =
            SolverRegistry::from_entries(2023, [(1, &COUNT as &dyn DaySolver)]).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::with(1, &["a", "b", "c", "d", "e"]),
            knowledge_in(&temp),
            fast_limits(),
        );

        let report = runner.run_day(1).unwrap();
        assert_eq!(report.day, 1);
        assert_eq!(report.parts.len(), 2);

        match &report.parts[0].outcome {
            PartOutcome::Solved { answer, check } => {
                assert_eq!(answer, "5");
                assert_eq!(*check, CheckResult::Unknown);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(matches!(report.parts[1].outcome, PartOutcome::NoSolution));

        let stats = report.parts[0].timing.as_ref().unwrap();
        assert!(stats.samples >= 2);

        // Both parts were marked attempted, without inventing answers
        let reloaded = knowledge_in(&temp);
        assert!(reloaded.contains(2023, 1, 1));
        assert!(reloaded.contains(2023, 1, 2));
        assert_eq!(reloaded.check(2023, 1, 1, "5"), CheckResult::Unknown);
    }

    #[test]
    fn recorded_solution_is_checked() {
        let temp = TempDir::new().unwrap();
        let mut knowledge = knowledge_in(&temp);
        knowledge
            .record(
                2023,
                1,
                1,
                KnowledgeUpdate {
                    solution: Some(Recorded::Int(5)),
                    ..Default::default()
                },
            )
            .unwrap();

        let registry =
            SolverRegistry::from_entries(2023, [(1, &COUNT as &dyn DaySolver)]).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::with(1, &["a", "b", "c", "d", "e"]),
            knowledge,
            fast_limits(),
        );

        let report = runner.run_day(1).unwrap();
        match &report.parts[0].outcome {
            PartOutcome::Solved { check, .. } => assert_eq!(*check, CheckResult::Correct),
            other => panic!("unexpected outcome: {other:?}"),
        }

        // The attempted-marker must not have nulled the recorded solution
        let reloaded = knowledge_in(&temp);
        assert_eq!(reloaded.check(2023, 1, 1, "5"), CheckResult::Correct);
    }

    #[test]
    fn absent_input_short_circuits_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let registry =
            SolverRegistry::from_entries(2023, [(1, &COUNT as &dyn DaySolver)]).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::empty(),
            knowledge_in(&temp),
            fast_limits(),
        );

        assert!(matches!(runner.run_day(1), Err(RunError::NoInput(1))));
        // Nothing was attempted, nothing was written
        assert!(!temp.path().join("knowledge.json").exists());
    }

    #[test]
    fn unknown_day_is_reported() {
        let temp = TempDir::new().unwrap();
        let registry = SolverRegistry::from_entries(2023, []).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::empty(),
            knowledge_in(&temp),
            fast_limits(),
        );
        assert!(matches!(runner.run_day(13), Err(RunError::UnknownDay(13))));
    }

    #[test]
    fn crashing_part_does_not_poison_the_day() {
        let temp = TempDir::new().unwrap();
        let registry =
            SolverRegistry::from_entries(2023, [(2, &PANICKY as &dyn DaySolver)]).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::with(2, &["x"]),
            knowledge_in(&temp),
            fast_limits(),
        );

        let report = runner.run_day(2).unwrap();
        match &report.parts[0].outcome {
            PartOutcome::Crashed { message } => assert!(message.contains("bad parse")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(report.parts[0].timing.is_err());

        match &report.parts[1].outcome {
            PartOutcome::Solved { answer, .. } => assert_eq!(answer, "ok"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(report.parts[1].timing.is_ok());
    }

    #[test]
    fn solver_log_and_misc_are_captured() {
        let temp = TempDir::new().unwrap();
        let registry =
            SolverRegistry::from_entries(2023, [(3, &CHATTY as &dyn DaySolver)]).unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::with(3, &["a", "b"]),
            knowledge_in(&temp),
            fast_limits(),
        );

        let report = runner.run_day(3).unwrap();
        assert_eq!(report.parts[0].log, ["considered 3 candidates"]);
        assert!(report.parts[1].log.is_empty());
        assert_eq!(report.misc.log, ["2 input lines"]);
        assert!(report.misc.error.is_none());
    }

    #[test]
    fn time_all_skips_missing_inputs_and_summarizes() {
        let temp = TempDir::new().unwrap();
        let registry = SolverRegistry::from_entries(
            2023,
            [(1, &COUNT as &dyn DaySolver), (2, &CHATTY as &dyn DaySolver)],
        )
        .unwrap();
        let mut runner = Runner::new(
            &registry,
            StubInput::with(1, &["a", "b"]),
            knowledge_in(&temp),
            fast_limits(),
        );

        let report = runner.time_all().unwrap();
        assert_eq!(report.skipped, vec![2]);
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|e| e.day == 1));

        let summary = report.summary();
        assert!(summary.total_us >= 0.0);
        assert_eq!(summary.worst_day.map(|(d, _)| d), Some(1));
        assert_eq!(summary.best_day.map(|(d, _)| d), Some(1));
        assert_eq!(summary.worst_part1.map(|(d, _)| d), Some(1));
        assert_eq!(summary.worst_part2.map(|(d, _)| d), Some(1));

        // timeall never records attempts
        assert!(!temp.path().join("knowledge.json").exists());
    }
}
