use std::time::Duration;

use super::{App, event::TuiEvent, event_loop::EventLoop};

/// Owns the terminal for the lifetime of one [`App`] run.
#[derive(Debug, Default)]
pub(crate) struct Tui {
    event_loop: EventLoop,
}

impl Tui {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reschedules the periodic tick; `None` stops it.
    pub(crate) fn set_tick_interval(&mut self, tick_interval: Option<Duration>) {
        self.event_loop.set_tick_interval(tick_interval);
    }

    pub(crate) fn run(mut self, app: &mut impl App) -> anyhow::Result<()> {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.event_loop.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
