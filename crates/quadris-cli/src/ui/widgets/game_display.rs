use quadris_engine::GameState;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// The full play screen: stats panel, board, and next-piece preview, with a
/// popup over the board while paused or after game over.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a GameState,
    show_ghost: bool,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self {
            game,
            show_ghost: true,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }

    pub fn show_ghost(self, show_ghost: bool) -> Self {
        Self { show_ghost, ..self }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = if self.game.is_game_over() {
            color::RED
        } else if self.game.is_paused() {
            color::YELLOW
        } else {
            color::WHITE
        };

        let game_board = {
            let widget = BoardDisplay::new(self.game.board())
                .falling_piece(*self.game.active_piece())
                .block(Block::bordered().border_style(border_style).style(style));
            if self.show_ghost {
                widget.ghost(self.game.drop_position())
            } else {
                widget
            }
        };
        let next_panel = PieceDisplay::new(self.game.next_kind()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );
        let stats_panel = StatsDisplay::new(self.game.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats_panel.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_panel.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let game_board_width = game_board.width();
        stats_panel.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);

        let popup = if self.game.is_game_over() {
            let text = Text::from(vec![
                Line::from("GAME OVER"),
                Line::from(format!("SCORE {}", self.game.stats().score())),
            ]);
            Some((text, Style::new().fg(color::WHITE).bg(color::RED)))
        } else if self.game.is_paused() {
            Some((
                Text::from("PAUSED"),
                Style::new().fg(color::BLACK).bg(color::YELLOW),
            ))
        } else {
            None
        };

        if let Some((text, style)) = popup {
            let text = text.style(style).centered();
            let text_height = u16::try_from(text.height()).unwrap_or(1);
            let block = Block::new().style(style);
            let area = board_area.centered(
                Constraint::Length(game_board_width),
                Constraint::Length(text_height + 2),
            );
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(
                inner.centered_vertically(Constraint::Length(text_height)),
                buf,
            );
        }
    }
}
