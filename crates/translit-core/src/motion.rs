//! Pointer movement aggregation.
//!
//! A [`MotionTracker`] accumulates per-event deltas and hands out one
//! [`MotionReport`] per reporting interval, resetting its counters each
//! time. `travel` sums absolute deltas (how far the pointer moved), `net`
//! sums signed deltas (where it ended up).

use std::fmt;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("report interval must be positive")]
    ZeroInterval,
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("events span {windows} report windows, limit is {max}")]
    TooManyWindows { windows: u64, max: u64 },
}

/// Upper bound on reports produced by one [`replay`] call.
pub const MAX_REPLAY_WINDOWS: u64 = 1 << 20;

/// One pointer movement sample, `t_ms` milliseconds from an arbitrary origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    pub t_ms: u64,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionReport {
    pub interval_ms: u64,
    pub travel_x: u64,
    pub travel_y: u64,
    pub net_x: i64,
    pub net_y: i64,
    pub samples: u64,
}

impl MotionReport {
    fn per_second(&self, v: f64) -> f64 {
        v * 1000.0 / self.interval_ms as f64
    }

    pub fn speed_x(&self) -> f64 {
        self.per_second(self.travel_x as f64)
    }

    pub fn speed_y(&self) -> f64 {
        self.per_second(self.travel_y as f64)
    }

    pub fn velocity_x(&self) -> f64 {
        self.per_second(self.net_x as f64)
    }

    pub fn velocity_y(&self) -> f64 {
        self.per_second(self.net_y as f64)
    }
}

impl fmt::Display for MotionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speed X: {:.0}px/s, Y: {:.0}px/s; Movement X: {:.0}px/s, Y: {:.0}px/s",
            self.speed_x(),
            self.speed_y(),
            self.velocity_x(),
            self.velocity_y()
        )
    }
}

#[derive(Debug)]
pub struct MotionTracker {
    interval_ms: u64,
    travel_x: u64,
    travel_y: u64,
    net_x: i64,
    net_y: i64,
    samples: u64,
}

impl MotionTracker {
    pub fn new(interval_ms: u64) -> Result<Self, MotionError> {
        if interval_ms == 0 {
            return Err(MotionError::ZeroInterval);
        }
        Ok(Self {
            interval_ms,
            travel_x: 0,
            travel_y: 0,
            net_x: 0,
            net_y: 0,
            samples: 0,
        })
    }

    pub fn record(&mut self, dx: i32, dy: i32) {
        self.travel_x += u64::from(dx.unsigned_abs());
        self.travel_y += u64::from(dy.unsigned_abs());
        self.net_x += i64::from(dx);
        self.net_y += i64::from(dy);
        self.samples += 1;
    }

    /// Report everything recorded since the last call and reset the counters.
    pub fn take_report(&mut self) -> MotionReport {
        let report = MotionReport {
            interval_ms: self.interval_ms,
            travel_x: self.travel_x,
            travel_y: self.travel_y,
            net_x: self.net_x,
            net_y: self.net_y,
            samples: self.samples,
        };
        self.travel_x = 0;
        self.travel_y = 0;
        self.net_x = 0;
        self.net_y = 0;
        self.samples = 0;
        report
    }
}

/// Parse `t_ms dx dy` lines. Blank lines and `#` comments are skipped.
pub fn parse_motion_events(text: &str) -> Result<Vec<MotionEvent>, MotionError> {
    let mut events = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = |reason: String| MotionError::Malformed { line: i + 1, reason };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(malformed(format!("expected 3 fields, got {}", fields.len())));
        }
        let t_ms = fields[0]
            .parse::<u64>()
            .map_err(|e| malformed(format!("bad timestamp {:?}: {e}", fields[0])))?;
        let dx = fields[1]
            .parse::<i32>()
            .map_err(|e| malformed(format!("bad dx {:?}: {e}", fields[1])))?;
        let dy = fields[2]
            .parse::<i32>()
            .map_err(|e| malformed(format!("bad dy {:?}: {e}", fields[2])))?;
        events.push(MotionEvent { t_ms, dx, dy });
    }
    Ok(events)
}

/// Split events into consecutive `interval_ms` windows starting at the
/// earliest timestamp and report each window, empty ones included.
pub fn replay(events: &[MotionEvent], interval_ms: u64) -> Result<Vec<MotionReport>, MotionError> {
    let mut tracker = MotionTracker::new(interval_ms)?;
    let Some(start) = events.iter().map(|e| e.t_ms).min() else {
        return Ok(Vec::new());
    };

    let end = events.iter().map(|e| e.t_ms).max().unwrap_or(start);
    // Saturates at u64::MAX when interval_ms is 1 and the span is maximal.
    let windows = ((end - start) / interval_ms).saturating_add(1);
    if windows > MAX_REPLAY_WINDOWS {
        return Err(MotionError::TooManyWindows {
            windows,
            max: MAX_REPLAY_WINDOWS,
        });
    }
    let windows = windows as usize;

    let window_of = |e: &MotionEvent| ((e.t_ms - start) / interval_ms) as usize;
    let mut sorted: Vec<&MotionEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.t_ms);

    let mut reports = Vec::with_capacity(windows);
    let mut pending = sorted.into_iter().peekable();
    for w in 0..windows {
        while let Some(e) = pending.next_if(|e| window_of(*e) == w) {
            tracker.record(e.dx, e.dy);
        }
        reports.push(tracker.take_report());
    }

    debug!(events = events.len(), windows, interval_ms, "motion replayed");
    Ok(reports)
}
