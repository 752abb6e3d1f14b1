//! Stateless rendering of the board screen.

use crate::config::{Rgb, Theme};
use crate::view::BoardView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{BOARD_SIZE, Cell, Coord};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_LINE: u16 = 1;
const BOARD_WIDTH: u16 = 3 * CELL_WIDTH + 2 * GRID_LINE;
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + 2 * GRID_LINE;
const RESET_LABEL: &str = "Reset Game";
const RESET_WIDTH: u16 = 16;
const HELP: &str = "Click or arrows+Enter / 1-9 to play | R: reset | Q: quit";

/// Something clickable on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Coord),
    /// The reset button.
    Reset,
}

/// Screen regions for one terminal size.
///
/// Drawing and mouse hit-testing use the same layout, so a click lands on
/// exactly what was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    frame: Rect,
    status: Rect,
    board: Rect,
    cells: [[Rect; BOARD_SIZE]; BOARD_SIZE],
    reset: Rect,
    help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen inside `area`.
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Reset button
                Constraint::Length(1),            // Help
            ])
            .split(inner);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let mut cells = [[Rect::default(); BOARD_SIZE]; BOARD_SIZE];
        for coord in Coord::ALL {
            let cell = Rect::new(
                board.x + coord.col() as u16 * (CELL_WIDTH + GRID_LINE),
                board.y + coord.row() as u16 * (CELL_HEIGHT + GRID_LINE),
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            cells[coord.row()][coord.col()] = cell.intersection(board);
        }

        Self {
            frame: area,
            status: chunks[0],
            board,
            cells,
            reset: center_rect(chunks[2], RESET_WIDTH, 3),
            help: chunks[3],
        }
    }

    /// Screen area of a board cell.
    pub fn cell(&self, coord: Coord) -> Rect {
        self.cells[coord.row()][coord.col()]
    }

    /// Screen area of the reset button.
    pub fn reset_button(&self) -> Rect {
        self.reset
    }

    /// What sits at terminal position (`column`, `row`), if clickable.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(self.reset, column, row) {
            return Some(Hit::Reset);
        }
        Coord::ALL
            .into_iter()
            .find(|coord| contains(self.cell(*coord), column, row))
            .map(Hit::Cell)
    }
}

/// Draws the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Coord, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    let window = Block::default()
        .borders(Borders::ALL)
        .title(" Tic Tac Toe ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(rgb(theme.background())).fg(Color::White));
    frame.render_widget(window, layout.frame);

    let status = Paragraph::new(Text::from(vec![Line::default(), Line::from(view.message())]))
        .style(
            Style::default()
                .fg(rgb(theme.status()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(status, layout.status);

    // Grid lines show through the gaps between cells.
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::White)),
        layout.board,
    );
    for coord in Coord::ALL {
        draw_cell(frame, layout.cell(coord), view, coord, cursor, theme);
    }

    let reset = Paragraph::new(Text::from(vec![Line::default(), Line::from(RESET_LABEL)]))
        .style(Style::default().bg(rgb(theme.button())).fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    coord: Coord,
    cursor: Coord,
    theme: &Theme,
) {
    let enabled = view.input_enabled();
    let symbol = match view.cell(coord) {
        Cell::Occupied(player) => player.mark().to_string(),
        Cell::Empty if enabled => (coord.index() + 1).to_string(),
        Cell::Empty => String::new(),
    };

    let mut style = Style::default()
        .bg(rgb(theme.cell()))
        .fg(rgb(theme.mark()))
        .add_modifier(Modifier::BOLD);
    if view.cell(coord) == Cell::Empty {
        style = style.fg(Color::DarkGray).remove_modifier(Modifier::BOLD);
    }
    if view.is_winning_cell(coord) {
        style = style.bg(rgb(theme.button())).fg(Color::White);
    } else if !enabled {
        style = style.fg(Color::DarkGray);
    }
    if enabled && coord == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Text::from(vec![Line::default(), Line::from(symbol)]))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn rgb(color: &Rgb) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
