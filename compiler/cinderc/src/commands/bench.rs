//! `cinder bench`: time repeated scans of one file.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use cinder_lexer::{tokenize_with, TransitionTable};

use super::read_source;
use crate::error::CommandError;
use crate::options::BenchOptions;

/// Timing of a benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchReport {
    /// Source size in bytes.
    pub size: u32,
    /// Tokens per scan, including EOF.
    pub tokens: usize,
    pub iterations: u32,
    /// Wall time for all iterations.
    pub elapsed: Duration,
}

impl BenchReport {
    /// Mean time per scan.
    pub fn per_iteration(&self) -> Duration {
        self.elapsed / self.iterations.max(1)
    }

    /// Scanned bytes per second, in MiB.
    #[allow(
        clippy::cast_precision_loss,
        reason = "throughput is a display figure; f64 is exact up to 2^53 bytes"
    )]
    pub fn throughput_mib(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        let bytes = u64::from(self.size) * u64::from(self.iterations);
        bytes as f64 / secs / (1024.0 * 1024.0)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size={} bytes", self.size)?;
        writeln!(f, "tokens={}", self.tokens)?;
        writeln!(f, "iterations={}", self.iterations)?;
        writeln!(
            f,
            "elapsed={:.3?} ({:.3?} per iteration)",
            self.elapsed,
            self.per_iteration()
        )?;
        write!(f, "throughput={:.2} MiB/s", self.throughput_mib())
    }
}

/// Tokenize the file `options.iterations` times and time the loop.
///
/// The source is read once; only scanning is timed. A scan error aborts the
/// run on the first iteration.
pub fn bench_file(options: &BenchOptions) -> Result<BenchReport, CommandError> {
    let source = read_source(&options.path)?;
    let table = TransitionTable::shared();

    let mut tokens = 0;
    let start = Instant::now();
    for _ in 0..options.iterations {
        let stream = tokenize_with(table, &source).map_err(|error| CommandError::Scan {
            path: options.path.display().to_string(),
            error,
        })?;
        tokens = stream.len();
        black_box(stream);
    }
    let elapsed = start.elapsed();

    let report = BenchReport {
        size: source.len(),
        tokens,
        iterations: options.iterations,
        elapsed,
    };
    tracing::info!(
        size = report.size,
        tokens = report.tokens,
        iterations = report.iterations,
        elapsed_ms = elapsed.as_millis(),
        "benchmark finished"
    );
    Ok(report)
}
