use std::time::{Duration, Instant};

use time::OffsetDateTime;

/// Number of detections seen in one processed frame
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: OffsetDateTime,
    pub count: usize,
}

/// Per-frame detection counts since start or the last reset
#[derive(Debug, Clone, Default)]
pub struct DetectionHistory {
    entries: Vec<HistoryEntry>,
}

impl DetectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, count: usize) {
        self.record_at(now_local(), count);
    }

    pub fn record_at(&mut self, timestamp: OffsetDateTime, count: usize) {
        self.entries.push(HistoryEntry { timestamp, count });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Frames recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all per-frame counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Mean detections per frame, `None` before the first frame
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.total() as f64 / self.entries.len() as f64)
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Frame rate measured over windows of just over a second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            window_start: start,
            frames: 0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Count a frame shown at `now` and return the current estimate
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed > FPS_WINDOW {
            self.fps = self.frames as f64 / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = now;
        }
        self.fps
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Restart the window; the last estimate stays on screen until the next one
    pub fn reset_at(&mut self, now: Instant) {
        self.frames = 0;
        self.window_start = now;
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Local wall-clock time, falling back to UTC when the offset is unknown
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
