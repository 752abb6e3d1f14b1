//! Tests for the controller and the views it produces.

use tictactoe::{CellActivation, Controller};
use tictactoe_core::{Cell, Coord, GameState, GameStatus, MoveError, Player};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_activation_places_mark() {
    let mut controller = Controller::default();

    assert_eq!(
        controller.on_cell_activated(1, 1),
        CellActivation::Placed(GameStatus::InProgress)
    );

    let view = controller.view();
    assert_eq!(view.cell(at(1, 1)), Cell::Occupied(Player::X));
    assert_eq!(view.message(), "O's Turn");
}

#[test]
fn test_occupied_click_is_ignored() {
    let mut controller = Controller::default();
    controller.on_cell_activated(0, 0);
    let before = controller.view();

    assert_eq!(
        controller.on_cell_activated(0, 0),
        CellActivation::Ignored(MoveError::CellOccupied { row: 0, col: 0 })
    );
    assert_eq!(controller.view(), before);
}

#[test]
fn test_off_board_click_is_ignored() {
    let mut controller = Controller::default();

    assert_eq!(
        controller.on_cell_activated(0, 9),
        CellActivation::Ignored(MoveError::InvalidCoordinate { row: 0, col: 9 })
    );
    assert_eq!(controller.game(), &GameState::new());
}

#[test]
fn test_win_disables_input() {
    let mut controller = Controller::default();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        controller.on_cell_activated(row, col);
    }

    let view = controller.view();
    assert_eq!(view.message(), "X Wins!");
    assert!(!view.input_enabled());
    assert!(view.is_winning_cell(at(0, 1)));
    assert!(!view.is_winning_cell(at(1, 1)));

    assert_eq!(
        controller.on_cell_activated(2, 2),
        CellActivation::Ignored(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_draw_message() {
    let mut controller = Controller::default();
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        controller.on_cell_activated(row, col);
    }

    let view = controller.view();
    assert_eq!(view.message(), "Draw!");
    assert!(!view.input_enabled());
    assert_eq!(view.board_text(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
}

#[test]
fn test_reset_restores_fresh_view() {
    let mut controller = Controller::default();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        controller.on_cell_activated(row, col);
    }

    controller.on_reset_requested();

    let view = controller.view();
    assert_eq!(view.message(), "X's Turn");
    assert!(view.input_enabled());
    assert!(Coord::ALL.iter().all(|c| view.cell(*c) == Cell::Empty));
}

#[test]
fn test_controller_takes_existing_game() {
    let mut game = GameState::new();
    game.apply_move(2, 2).unwrap();

    let controller = Controller::new(game);
    assert_eq!(controller.view().message(), "O's Turn");
}
