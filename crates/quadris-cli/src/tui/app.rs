use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// A screen driven by the [`Tui`] runner.
///
/// The runner calls [`Self::init`] once, then loops: input events go to
/// [`Self::handle_event`], elapsed tick intervals to [`Self::update`], and
/// the frame is redrawn through [`Self::draw`] whenever state may have
/// changed. The loop exits as soon as [`Self::should_exit`] returns true.
pub(crate) trait App {
    fn init(&mut self, tui: &mut Tui);
    fn should_exit(&self) -> bool;
    fn handle_event(&mut self, tui: &mut Tui, event: Event);
    fn update(&mut self, tui: &mut Tui);
    fn draw(&self, frame: &mut Frame);
}
