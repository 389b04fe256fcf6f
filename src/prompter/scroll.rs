use std::time::{Duration, Instant};

/// Vertical offset of the text surface in toolkit scroll units.
///
/// Behaves like a scrollbar value: never below zero and, once the surface has
/// been laid out, never beyond the largest reachable offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    offset: f32,
    max_offset: Option<f32>,
}

impl ScrollPosition {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> Option<f32> {
        self.max_offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        let upper = self.max_offset.unwrap_or(f32::INFINITY);
        self.offset = offset.clamp(0.0, upper.max(0.0));
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.set_offset(self.offset + delta);
    }

    /// Adopt the offset and bounds reported by the toolkit after layout,
    /// which also picks up mouse-wheel scrolling done by the user.
    pub fn sync_from_view(&mut self, offset: f32, max_offset: f32) {
        self.max_offset = Some(max_offset.max(0.0));
        self.set_offset(offset);
    }
}

/// Fixed-period tick source for auto-scroll.
///
/// The reference instant advances by whole periods, so ticks never drift
/// regardless of how irregularly frames arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    period: Duration,
    next_due: Option<Instant>,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that elapsed up to `now`.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(next_due) = self.next_due else {
            return 0;
        };
        if now < next_due || self.period.is_zero() {
            return 0;
        }

        let behind = now.duration_since(next_due);
        let ticks = (behind.as_nanos() / self.period.as_nanos()) as u32 + 1;
        self.next_due = Some(next_due + self.period * ticks);
        ticks
    }

    /// Time until the next tick, used to schedule the next repaint.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(50);

    #[test]
    fn offset_is_clamped_like_a_scrollbar() {
        let mut pos = ScrollPosition::default();
        pos.scroll_by(-10.0);
        assert_eq!(pos.offset(), 0.0);

        pos.sync_from_view(0.0, 25.0);
        pos.scroll_by(10.0);
        pos.scroll_by(10.0);
        pos.scroll_by(10.0);
        assert_eq!(pos.offset(), 25.0);
    }

    #[test]
    fn unbounded_before_first_layout() {
        let mut pos = ScrollPosition::default();
        pos.scroll_by(1_000.0);
        assert_eq!(pos.offset(), 1_000.0);
        assert_eq!(pos.max_offset(), None);
    }

    #[test]
    fn stopped_clock_never_ticks() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD);
        assert_eq!(clock.due_ticks(start + PERIOD * 4), 0);
        assert_eq!(clock.until_next(start), None);
    }

    #[test]
    fn one_tick_per_period() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD);
        clock.start(start);

        assert_eq!(clock.due_ticks(start + Duration::from_millis(49)), 0);
        for n in 1..=5u32 {
            assert_eq!(clock.due_ticks(start + PERIOD * n), 1);
        }
    }

    #[test]
    fn late_frames_catch_up_without_drift() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD);
        clock.start(start);

        assert_eq!(clock.due_ticks(start + Duration::from_millis(130)), 2);
        assert_eq!(clock.due_ticks(start + Duration::from_millis(149)), 0);
        assert_eq!(clock.due_ticks(start + Duration::from_millis(150)), 1);
        assert_eq!(
            clock.until_next(start + Duration::from_millis(160)),
            Some(Duration::from_millis(40))
        );
    }
}
