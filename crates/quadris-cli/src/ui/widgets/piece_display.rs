use quadris_engine::{Block, ShapeKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// A single shape in its spawn orientation, centered in the panel. Used for
/// the next-piece preview.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    kind: ShapeKind,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let grid = self.kind.spawn_grid();
        let piece_cols = u16::try_from(grid.width()).unwrap_or(0);
        let piece_rows = u16::try_from(grid.height()).unwrap_or(0);
        let piece_area = area.centered(
            Constraint::Length(piece_cols * BlockDisplay::width()),
            Constraint::Length(piece_rows * BlockDisplay::height()),
        );

        let col_constraints = (0..piece_cols).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..piece_rows).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let empty_block = BlockDisplay::from_block(Block::Empty, false);
        let occupied_block = BlockDisplay::from_block(Block::Piece(self.kind), false);

        for (row, grid_row) in grid_rows.enumerate() {
            for (col, grid_cell) in grid_row.into_iter().enumerate() {
                if grid.is_occupied(row, col) {
                    Widget::render(&occupied_block, grid_cell, buf);
                } else {
                    Widget::render(&empty_block, grid_cell, buf);
                }
            }
        }
    }
}
