use crossterm::event::{Event, KeyCode};
use quadris_engine::GameState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    ui::widgets::GameDisplay,
};

#[derive(Debug)]
pub(crate) struct PlayApp {
    game: GameState,
    show_ghost: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(game: GameState, show_ghost: bool) -> Self {
        Self {
            game,
            show_ghost,
            is_exiting: false,
        }
    }

    fn is_playing(&self) -> bool {
        !self.game.is_game_over() && !self.game.is_paused()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(self.game.fall_interval()));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        let is_playing = self.is_playing();
        let can_toggle_pause = !self.game.is_game_over();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_playing => _ = self.game.try_move_left(),
                KeyCode::Right if is_playing => _ = self.game.try_move_right(),
                KeyCode::Down if is_playing => self.game.soft_drop(),
                KeyCode::Up if is_playing => _ = self.game.try_rotate(),
                KeyCode::Char(' ') if is_playing => self.game.hard_drop(),
                KeyCode::Char('p') if can_toggle_pause => self.game.toggle_pause(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self, tui: &mut Tui) {
        self.game.tick();
        // A cleared line may have changed the level, so the cadence is
        // re-read after every gravity step. The tick stops for good once the
        // game is over.
        if self.game.is_game_over() {
            tui.set_tick_interval(None);
        } else {
            tui.set_tick_interval(Some(self.game.fall_interval()));
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_display = GameDisplay::new(&self.game).show_ghost(self.show_ghost);
        let help_text = if self.game.is_game_over() {
            "Controls: Q (Quit)"
        } else if self.game.is_paused() {
            "Controls: P (Resume) | Q (Quit)"
        } else {
            "Controls: ← → (Move) | ↑ (Rotate) | ↓ (Soft Drop) | Space (Hard Drop) | P (Pause) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
