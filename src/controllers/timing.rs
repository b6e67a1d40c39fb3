use std::fmt;
use std::time::{Duration, Instant};

/// An elapsed interval split into whole seconds and a nanosecond remainder
/// in `0..1_000_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ElapsedTime {
    seconds: u64,
    nanos: u32,
}

impl ElapsedTime {
    /// Time from `start` to `end` on the monotonic clock; zero if `end` is
    /// earlier.
    #[must_use]
    pub fn between(start: Instant, end: Instant) -> Self {
        end.saturating_duration_since(start).into()
    }

    #[must_use]
    pub fn since(start: Instant) -> Self {
        Self::between(start, Instant::now())
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub fn nanos(&self) -> u32 {
        self.nanos
    }
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        Self {
            seconds: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }
}

impl From<ElapsedTime> for Duration {
    fn from(elapsed: ElapsedTime) -> Self {
        Duration::new(elapsed.seconds, elapsed.nanos)
    }
}

/// The single CSV line a benchmark run prints:
/// `problem,approach,size,processors,e2e_s,e2e_ns,alg_s,alg_ns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub problem: String,
    pub approach: String,
    pub size: u32,
    pub processors: usize,
    pub end_to_end: ElapsedTime,
    pub algorithm: ElapsedTime,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.problem,
            self.approach,
            self.size,
            self.processors,
            self.end_to_end.seconds(),
            self.end_to_end.nanos(),
            self.algorithm.seconds(),
            self.algorithm.nanos()
        )
    }
}
