//! Frame pacing
//!
//! Animations block between frames. The pacer decides whether that wait is
//! real time or only bookkeeping.

use std::thread;
use std::time::Duration;

pub trait FramePacer {
    /// Block for one inter-frame interval
    fn wait(&mut self, duration: Duration);
}

impl<T: FramePacer + ?Sized> FramePacer for &mut T {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration)
    }
}

/// Sleeps the calling thread; used by the real cabinet
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl FramePacer for SleepPacer {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Never sleeps; adds up the time the animation would have blocked for
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    total: Duration,
    count: usize,
    log: Option<Vec<Duration>>,
}

impl RecordingPacer {
    /// Keep every individual wait
    pub fn new() -> Self {
        Self {
            log: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Keep only the running total and count
    pub fn totals_only() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Individual waits, oldest first (empty for `totals_only`)
    pub fn waits(&self) -> &[Duration] {
        self.log.as_deref().unwrap_or(&[])
    }

    pub fn reset(&mut self) {
        self.total = Duration::ZERO;
        self.count = 0;
        if let Some(log) = self.log.as_mut() {
            log.clear();
        }
    }
}

impl FramePacer for RecordingPacer {
    fn wait(&mut self, duration: Duration) {
        self.total += duration;
        self.count += 1;
        if let Some(log) = self.log.as_mut() {
            log.push(duration);
        }
    }
}
