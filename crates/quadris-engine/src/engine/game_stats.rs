use std::time::Duration;

/// Lines needed to advance one level.
const LINES_PER_LEVEL: usize = 10;
/// Points per cleared line, multiplied by the level at clear time.
const POINTS_PER_LINE: usize = 100;
/// Fall interval at level 1.
const BASE_FALL_MILLIS: u64 = 500;
/// Fall interval floor.
const MIN_FALL_MILLIS: u64 = 100;
/// Fall interval reduction per level.
const FALL_STEP_MILLIS: u64 = 40;

/// Score, cleared-line count, and the speed progression derived from them.
///
/// The level is `lines / 10 + 1`. The fall interval is
/// `max(100ms, 500ms - (level - 1) * 40ms)` and is recomputed exactly once
/// per line-clear event; between clears it holds its value.
///
/// # Example
///
/// ```
/// use quadris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_clear(2);
///
/// assert_eq!(stats.score(), 200);
/// assert_eq!(stats.level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    cleared_lines: usize,
    fall_interval: Duration,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates stats for a fresh game: zero score, zero lines, base speed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_lines: 0,
            fall_interval: Duration::from_millis(BASE_FALL_MILLIS),
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Returns the current level, starting at 1 and advancing every 10 lines.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.cleared_lines / LINES_PER_LEVEL + 1
    }

    /// Returns the time between gravity ticks at the current level.
    #[must_use]
    pub const fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Applies a successful line clear.
    ///
    /// Scoring uses the level in effect *before* the new lines are counted,
    /// then the level and fall interval are recomputed.
    pub fn record_clear(&mut self, cleared: usize) {
        debug_assert!(cleared > 0);
        self.score += cleared * POINTS_PER_LINE * self.level();
        self.cleared_lines += cleared;

        let level = self.level() as u64;
        let millis = BASE_FALL_MILLIS
            .saturating_sub((level - 1) * FALL_STEP_MILLIS)
            .max(MIN_FALL_MILLIS);
        self.fall_interval = Duration::from_millis(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_lines_times_hundred_times_level() {
        let mut stats = GameStats::new();
        stats.record_clear(1);
        assert_eq!(stats.score(), 100);
        stats.record_clear(4);
        assert_eq!(stats.score(), 500);
    }

    #[test]
    fn score_uses_the_level_before_the_recompute() {
        let mut stats = GameStats::new();
        for _ in 0..3 {
            stats.record_clear(3);
        }
        // 9 lines cleared, still level 1, score 900.
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.score(), 900);

        // The clear that crosses the threshold still scores at level 1.
        stats.record_clear(2);
        assert_eq!(stats.score(), 1100);
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn level_advances_every_ten_lines() {
        let mut stats = GameStats::new();
        assert_eq!(stats.level(), 1);
        for _ in 0..10 {
            stats.record_clear(1);
        }
        assert_eq!(stats.cleared_lines(), 10);
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn fall_interval_shrinks_forty_millis_per_level() {
        let mut stats = GameStats::new();
        assert_eq!(stats.fall_interval(), Duration::from_millis(500));
        for _ in 0..10 {
            stats.record_clear(1);
        }
        assert_eq!(stats.fall_interval(), Duration::from_millis(460));
    }

    #[test]
    fn fall_interval_only_changes_on_clear_events() {
        let mut stats = GameStats::new();
        stats.record_clear(9);
        // 9 lines: level still 1, interval recomputed to the same base value.
        assert_eq!(stats.fall_interval(), Duration::from_millis(500));
        stats.record_clear(1);
        assert_eq!(stats.fall_interval(), Duration::from_millis(460));
    }

    #[test]
    fn fall_interval_clamps_at_the_floor() {
        let mut stats = GameStats::new();
        // Level 11 would be 500 - 400 = 100; level 12 stays clamped.
        for _ in 0..110 {
            stats.record_clear(1);
        }
        assert_eq!(stats.level(), 12);
        assert_eq!(stats.fall_interval(), Duration::from_millis(100));
    }
}
