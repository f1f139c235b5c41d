//! Adaptive timing harness
//!
//! Solver parts range from microseconds to seconds, so a fixed iteration
//! count either wastes time on fast parts or never finishes on slow ones.
//! The stopping rule bounds both ends: keep sampling until at least
//! [`MIN_RUNS`] samples exist and at least [`MIN_TIME_SPENT`] has been spent
//! measuring, with [`MAX_RUNS`] as a hard ceiling that wins regardless of
//! elapsed time.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Minimum number of samples before the time floor can stop the loop
pub const MIN_RUNS: usize = 20;
/// Hard ceiling on samples, regardless of time spent
pub const MAX_RUNS: usize = 1000;
/// Minimum cumulative measured time before stopping
pub const MIN_TIME_SPENT: Duration = Duration::from_millis(500);

/// Stopping-rule constants, adjustable so tests do not spend half a second
/// per bench. The shape of the rule is the contract, not the numbers.
#[derive(Debug, Clone, Copy)]
pub struct BenchLimits {
    pub min_runs: usize,
    pub max_runs: usize,
    pub min_time_spent: Duration,
}

impl Default for BenchLimits {
    fn default() -> Self {
        Self {
            min_runs: MIN_RUNS,
            max_runs: MAX_RUNS,
            min_time_spent: MIN_TIME_SPENT,
        }
    }
}

/// Timing failed; no partial statistic is reported
#[derive(Error, Debug)]
pub enum BenchError {
    /// The measured call panicked during one of the samples
    #[error("solver panicked while being timed: {0}")]
    SolverPanic(String),
}

/// Aggregated cost distribution of one solver part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Mean wall-clock cost in microseconds
    pub average_us: f64,
    /// Population standard deviation in microseconds (divide by N, not N-1)
    pub std_dev_us: f64,
    /// Number of samples measured
    pub samples: usize,
}

impl RunStats {
    /// Aggregate a non-empty list of samples.
    pub fn from_samples(samples: &[Duration]) -> Self {
        let n = samples.len() as f64;
        let micros: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1e6).collect();
        let average = micros.iter().sum::<f64>() / n;
        let variance = micros.iter().map(|m| (m - average).powi(2)).sum::<f64>() / n;
        Self {
            average_us: average,
            std_dev_us: variance.sqrt(),
            samples: samples.len(),
        }
    }
}

/// Render a panic payload as text for reporting.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Repeatedly run `f` under the stopping rule and aggregate the wall-clock
/// samples. A panic in any sample aborts the whole measurement.
pub fn bench<F, T>(limits: BenchLimits, mut f: F) -> Result<RunStats, BenchError>
where
    F: FnMut() -> T,
{
    let mut samples: Vec<Duration> = Vec::new();
    let mut spent = Duration::ZERO;

    loop {
        let start = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(&mut f));
        let elapsed = start.elapsed();

        if let Err(payload) = outcome {
            return Err(BenchError::SolverPanic(panic_message(payload)));
        }

        samples.push(elapsed);
        spent += elapsed;

        let n = samples.len();
        if n >= limits.max_runs || (n >= limits.min_runs && spent >= limits.min_time_spent) {
            break;
        }
    }

    Ok(RunStats::from_samples(&samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_constant_samples_have_zero_deviation() {
        let samples = vec![Duration::from_micros(250); 8];
        let stats = RunStats::from_samples(&samples);
        assert_eq!(stats.samples, 8);
        assert!((stats.average_us - 250.0).abs() < 1e-9);
        assert!(stats.std_dev_us.abs() < 1e-9);
    }

    #[test]
    fn stats_use_population_deviation() {
        // 1ms and 3ms: mean 2000us, population sd 1000us (sample sd would be ~1414us)
        let samples = vec![Duration::from_millis(1), Duration::from_millis(3)];
        let stats = RunStats::from_samples(&samples);
        assert!((stats.average_us - 2000.0).abs() < 1e-6);
        assert!((stats.std_dev_us - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn min_runs_floor_decides_for_fast_calls() {
        let limits = BenchLimits {
            min_runs: 7,
            max_runs: 100,
            min_time_spent: Duration::ZERO,
        };
        let mut calls = 0usize;
        let stats = bench(limits, || calls += 1).unwrap();
        assert_eq!(stats.samples, 7);
        assert_eq!(calls, 7);
    }

    #[test]
    fn max_runs_cap_wins_over_the_time_floor() {
        let limits = BenchLimits {
            min_runs: 1,
            max_runs: 9,
            min_time_spent: Duration::from_secs(3600),
        };
        let stats = bench(limits, || ()).unwrap();
        assert_eq!(stats.samples, 9);
    }

    #[test]
    fn time_floor_extends_past_min_runs() {
        let limits = BenchLimits {
            min_runs: 3,
            max_runs: 1000,
            min_time_spent: Duration::from_millis(10),
        };
        let stats = bench(limits, || std::thread::sleep(Duration::from_millis(1))).unwrap();
        // Each sample costs at least 1ms, so 10 samples always satisfy the
        // floor; a slow sleep can only stop the loop earlier, never later.
        assert!(stats.samples >= 3);
        assert!(stats.samples <= 10);
        assert!(stats.average_us >= 1000.0);
    }

    #[test]
    fn panic_aborts_without_partial_stats() {
        let limits = BenchLimits {
            min_runs: 5,
            max_runs: 10,
            min_time_spent: Duration::ZERO,
        };
        let mut calls = 0usize;
        let err = bench(limits, || {
            calls += 1;
            if calls == 3 {
                panic!("boom on call {calls}");
            }
        })
        .unwrap_err();
        assert!(matches!(&err, BenchError::SolverPanic(m) if m.contains("boom")));
        assert_eq!(calls, 3);
    }
}
