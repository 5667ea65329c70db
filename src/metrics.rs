use std::fmt;
use std::time::{Duration, Instant};

/// Operation counters and wall-clock time of one algorithm run
///
/// Each engine owns one `Metrics` value. It is reset when a run begins,
/// mutated only by that engine while running and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Vertices discovered by depth-first search
    pub dfs_visits: u64,
    /// Edges examined
    pub edges_processed: u64,
    /// Successful distance improvements
    pub relaxations: u64,
    /// Queue insertions
    pub pushes: u64,
    /// Queue removals
    pub pops: u64,
    /// Elapsed time of the measured section in nanoseconds
    pub time_ns: u64,
    started: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every counter and the recorded time
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Marks the beginning of the measured section
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Records the time elapsed since [`start`](Self::start)
    ///
    /// Without a preceding `start` the recorded time is left untouched.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.time_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.time_ns)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.time_ns as f64 / 1e6
    }

    /// Adds another record's counters and time to this one
    pub fn merge(&mut self, other: &Metrics) {
        self.dfs_visits += other.dfs_visits;
        self.edges_processed += other.edges_processed;
        self.relaxations += other.relaxations;
        self.pushes += other.pushes;
        self.pops += other.pops;
        self.time_ns = self.time_ns.saturating_add(other.time_ns);
    }

    /// Counters without timing, for comparing runs
    pub fn counters(&self) -> [u64; 5] {
        [
            self.dfs_visits,
            self.edges_processed,
            self.relaxations,
            self.pushes,
            self.pops,
        ]
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {:.3} ms, DFS={}, edges={}, relax={}",
            self.elapsed_ms(),
            self.dfs_visits,
            self.edges_processed,
            self.relaxations
        )
    }
}
