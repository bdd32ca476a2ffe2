use quadris_engine::{Block, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// How one board cell is painted: a style plus an optional symbol, spanning
/// two terminal columns so cells come out roughly square.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_block(block: Block, show_dots: bool) -> Self {
        match block {
            Block::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            Block::Ghost => Self::new(style::GHOST, "[]"),
            Block::Piece(kind) => {
                let style = match kind {
                    ShapeKind::I => style::I_BLOCK,
                    ShapeKind::O => style::O_BLOCK,
                    ShapeKind::S => style::S_BLOCK,
                    ShapeKind::Z => style::Z_BLOCK,
                    ShapeKind::T => style::T_BLOCK,
                    ShapeKind::L => style::L_BLOCK,
                    ShapeKind::J => style::J_BLOCK,
                };
                Self::new(style, "")
            }
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_kind_gets_a_distinct_style() {
        let kinds = [
            ShapeKind::I,
            ShapeKind::O,
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::T,
            ShapeKind::L,
            ShapeKind::J,
        ];
        let styles = kinds.map(|kind| BlockDisplay::from_block(Block::Piece(kind), false).style);
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn ghost_is_an_outline_not_a_fill() {
        let ghost = BlockDisplay::from_block(Block::Ghost, false);
        assert_eq!(ghost.symbol, "[]");
        let empty = BlockDisplay::from_block(Block::Empty, true);
        assert_eq!(empty.symbol, ".");
    }
}
