//! Full-game scenarios through the engine state machine.

use gridgames::{
    Catalog, Cell, Coord, GameEngine, GameKind, GridError, MarkId, MoveDisposition, Status,
};

fn engine_for(kind: GameKind) -> GameEngine {
    Catalog::builtin()
        .get(kind)
        .expect("built-in game")
        .engine()
        .expect("built-in config is valid")
}

fn apply(engine: &mut GameEngine, x: usize, y: usize) -> MoveDisposition {
    engine.apply_move(Coord { x, y }).expect("in-bounds move")
}

#[test]
fn test_tictactoe_diagonal_win() {
    let mut engine = engine_for(GameKind::TicTacToe);

    assert_eq!(apply(&mut engine, 0, 0), MoveDisposition::Applied); // P1
    assert_eq!(apply(&mut engine, 1, 0), MoveDisposition::Applied); // P2
    assert_eq!(apply(&mut engine, 1, 1), MoveDisposition::Applied); // P1
    assert_eq!(apply(&mut engine, 2, 0), MoveDisposition::Applied); // P2
    assert_eq!(engine.state().status(), Status::InProgress);

    // P1 completes the (0,0)-(1,1)-(2,2) diagonal.
    assert_eq!(apply(&mut engine, 2, 2), MoveDisposition::Applied);
    assert_eq!(engine.state().status(), Status::Won(MarkId(1)));
    assert_eq!(engine.winner().map(|p| p.name()), Some("Player 1"));
}

#[test]
fn test_turn_alternation() {
    let mut engine = engine_for(GameKind::TicTacToe);
    assert_eq!(engine.state().to_move(), 0);

    apply(&mut engine, 0, 0);
    assert_eq!(engine.state().to_move(), 1);

    apply(&mut engine, 1, 0);
    assert_eq!(engine.state().to_move(), 0);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut engine = engine_for(GameKind::TicTacToe);
    apply(&mut engine, 0, 0);

    let before = engine.state().clone();
    assert_eq!(apply(&mut engine, 0, 0), MoveDisposition::Rejected);
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_terminal_state_ignores_further_moves() {
    let mut engine = engine_for(GameKind::TicTacToe);
    // P1 wins the top row.
    apply(&mut engine, 0, 0);
    apply(&mut engine, 0, 1);
    apply(&mut engine, 1, 0);
    apply(&mut engine, 1, 1);
    apply(&mut engine, 2, 0);
    assert_eq!(engine.state().status(), Status::Won(MarkId(1)));

    let decided = engine.state().clone();
    assert_eq!(apply(&mut engine, 2, 2), MoveDisposition::Ignored);
    assert_eq!(engine.state(), &decided);
}

#[test]
fn test_reset_restores_initial_state() {
    let fresh = engine_for(GameKind::TicTacToe);
    let mut engine = engine_for(GameKind::TicTacToe);

    apply(&mut engine, 0, 0);
    apply(&mut engine, 1, 1);
    engine.reset();

    assert_eq!(engine.state(), fresh.state());
}

#[test]
fn test_occupied_ledger_matches_marked_cells() {
    let mut engine = engine_for(GameKind::TicTacToe);
    apply(&mut engine, 0, 0);
    apply(&mut engine, 1, 1);
    apply(&mut engine, 2, 0);

    let grid = engine.state().grid();
    let mut marked = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(Coord { x, y }).unwrap() != Cell::Empty {
                marked += 1;
            }
        }
    }
    assert_eq!(grid.occupied().len(), marked);
    assert_eq!(marked, 3);
}

#[test]
fn test_out_of_bounds_move_fails_loudly() {
    let mut engine = engine_for(GameKind::TicTacToe);
    let result = engine.apply_move(Coord { x: 5, y: 5 });
    assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
}

#[test]
fn test_connect_four_column_fills_without_win() {
    let mut engine = engine_for(GameKind::ConnectFour);
    let column = Coord { x: 3, y: 0 };

    // Alternating drops stack P1/P2/P1/P2/P1/P2; no four of a kind.
    for _ in 0..6 {
        assert_eq!(
            engine.apply_move(column).unwrap(),
            MoveDisposition::Applied
        );
        assert_eq!(engine.state().status(), Status::InProgress);
    }

    // Exactly `height` drops fit; the next one is turned away.
    assert_eq!(engine.apply_move(column).unwrap(), MoveDisposition::Rejected);
    assert_eq!(engine.state().status(), Status::InProgress);
}

#[test]
fn test_connect_four_pieces_stack_from_the_floor() {
    let mut engine = engine_for(GameKind::ConnectFour);
    engine.apply_move(Coord { x: 2, y: 0 }).unwrap();
    engine.apply_move(Coord { x: 2, y: 0 }).unwrap();

    let grid = engine.state().grid();
    assert_eq!(grid.get(Coord { x: 2, y: 5 }).unwrap(), Cell::Mark(MarkId(1)));
    assert_eq!(grid.get(Coord { x: 2, y: 4 }).unwrap(), Cell::Mark(MarkId(2)));
    assert_eq!(grid.get(Coord { x: 2, y: 3 }).unwrap(), Cell::Empty);
}

#[test]
fn test_connect_four_horizontal_win() {
    let mut engine = engine_for(GameKind::ConnectFour);
    let drop = |engine: &mut GameEngine, x: usize| {
        engine.apply_move(Coord { x, y: 0 }).unwrap()
    };

    drop(&mut engine, 0); // P1
    drop(&mut engine, 6); // P2
    drop(&mut engine, 1); // P1
    drop(&mut engine, 6); // P2
    drop(&mut engine, 2); // P1
    drop(&mut engine, 6); // P2
    drop(&mut engine, 3); // P1 connects four along the floor

    assert_eq!(engine.state().status(), Status::Won(MarkId(1)));
}

#[test]
fn test_tictactoe_tie() {
    let mut engine = engine_for(GameKind::TicTacToe);
    // Final board, no three in a row for either player:
    //   X O X
    //   X O O
    //   O X X
    let moves = [
        (0, 0), // X
        (1, 0), // O
        (2, 0), // X
        (1, 1), // O
        (0, 1), // X
        (2, 1), // O
        (1, 2), // X
        (0, 2), // O
        (2, 2), // X
    ];
    for (x, y) in moves {
        assert_eq!(apply(&mut engine, x, y), MoveDisposition::Applied);
    }

    assert_eq!(engine.state().status(), Status::Tied);
    assert!(engine.winner().is_none());
}

#[test]
fn test_gomoku_needs_five() {
    let mut engine = engine_for(GameKind::Gomoku);
    // P1 builds a row along y=0 at x=0..4; P2 answers along y=14.
    for x in 0..4 {
        apply(&mut engine, x, 0);
        apply(&mut engine, x, 14);
    }
    assert_eq!(engine.state().status(), Status::InProgress);

    apply(&mut engine, 4, 0);
    assert_eq!(engine.state().status(), Status::Won(MarkId(1)));
}
