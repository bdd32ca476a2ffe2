use std::time::{Duration, Instant};

use crossterm::event;

use super::event::TuiEvent;

/// Multiplexes terminal input with a periodic tick.
///
/// The tick interval is re-read before every wait, so callers can retune the
/// cadence between firings. `None` disables the tick entirely and the loop
/// blocks on input alone.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true,
        }
    }

    pub(super) fn set_tick_interval(&mut self, tick_interval: Option<Duration>) {
        self.tick_interval = tick_interval;
    }

    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }
            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }
            if let Some(timeout) = self.next_tick_timeout(now)
                && !event::poll(timeout)?
            {
                // The tick came due while we were polling.
                continue;
            }
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn next_tick_timeout(&self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        Some((self.last_tick + interval).saturating_duration_since(now))
    }
}
