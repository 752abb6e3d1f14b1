//! Board screen state.

use super::input::{Action, key_action};
use super::ui::{Hit, ScreenLayout};
use crate::controller::Controller;
use crossterm::event::KeyCode;
use tictactoe_core::Coord;
use tracing::debug;

/// Main application state: the controller plus purely visual state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    cursor: Coord,
    should_quit: bool,
}

impl App {
    /// Creates the application around a controller.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            cursor: Coord::ALL[4],
            should_quit: false,
        }
    }

    /// The controller driving the game.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = key_action(self.cursor, key) {
            self.apply(action);
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`).
    pub fn handle_click(&mut self, layout: &ScreenLayout, column: u16, row: u16) {
        match layout.hit_test(column, row) {
            Some(Hit::Cell(coord)) => self.apply(Action::Activate(coord)),
            Some(Hit::Reset) => self.apply(Action::Reset),
            None => {}
        }
    }

    fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        match action {
            Action::MoveCursor(coord) => self.cursor = coord,
            Action::Activate(coord) => {
                self.cursor = coord;
                self.controller.on_cell_activated(coord.row(), coord.col());
            }
            Action::Reset => self.controller.on_reset_requested(),
            Action::Quit => self.should_quit = true,
        }
    }
}
