//! Catalog loading and lookup.

use gridgames::{Catalog, GameKind, PlacementPolicy};
use std::io::Write;

#[test]
fn test_builtin_catalog_covers_all_games() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.games().len(), 3);

    let ttt = catalog.get(GameKind::TicTacToe).unwrap();
    assert_eq!(ttt.config().width(), 3);
    assert_eq!(ttt.config().height(), 3);
    assert_eq!(ttt.config().connect_n(), 3);
    assert_eq!(ttt.config().policy(), PlacementPolicy::Direct);

    let c4 = catalog.get(GameKind::ConnectFour).unwrap();
    assert_eq!(c4.config().width(), 7);
    assert_eq!(c4.config().height(), 6);
    assert_eq!(c4.config().connect_n(), 4);
    assert_eq!(c4.config().policy(), PlacementPolicy::GravityDrop);

    let gomoku = catalog.get(GameKind::Gomoku).unwrap();
    assert_eq!(gomoku.config().width(), 15);
    assert_eq!(gomoku.config().connect_n(), 5);
}

#[test]
fn test_entry_builds_two_players_with_distinct_marks() {
    let catalog = Catalog::builtin();
    let players = catalog.get(GameKind::ConnectFour).unwrap().players();
    assert_eq!(players.len(), 2);
    assert_ne!(players[0].mark(), players[1].mark());
    assert_eq!(players[0].symbol(), 'R');
    assert_eq!(players[1].symbol(), 'Y');
}

#[test]
fn test_catalog_loads_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "games": [
                {{
                    "id": "tic-tac-toe",
                    "name": "Mini Gomoku",
                    "description": "Four in a row on a 5x5 board",
                    "config": {{
                        "width": 5,
                        "height": 5,
                        "connect_n": 4,
                        "policy": "direct"
                    }},
                    "symbols": ["X", "O"]
                }}
            ]
        }}"#
    )
    .unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.games().len(), 1);

    let entry = catalog.get(GameKind::TicTacToe).unwrap();
    assert_eq!(entry.name(), "Mini Gomoku");
    assert_eq!(entry.config().connect_n(), 4);
    assert!(entry.engine().is_ok());
}

#[test]
fn test_empty_catalog_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "games": [] }}"#).unwrap();
    assert!(Catalog::from_path(file.path()).is_err());
}

fn catalog_json_with_symbols(symbols: &[&str]) -> String {
    let symbols = symbols
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{
            "games": [
                {{
                    "id": "tic-tac-toe",
                    "name": "Crowded",
                    "description": "Too many (or too few) players",
                    "config": {{
                        "width": 3,
                        "height": 3,
                        "connect_n": 3,
                        "policy": "direct"
                    }},
                    "symbols": [{symbols}]
                }}
            ]
        }}"#
    )
}

#[test]
fn test_catalog_rejects_oversized_roster() {
    let symbols = vec!["x"; 300];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", catalog_json_with_symbols(&symbols)).unwrap();
    assert!(Catalog::from_path(file.path()).is_err());
}

#[test]
fn test_catalog_rejects_single_player_roster() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", catalog_json_with_symbols(&["X"])).unwrap();
    assert!(Catalog::from_path(file.path()).is_err());
}

#[test]
fn test_malformed_catalog_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();
    assert!(Catalog::from_path(file.path()).is_err());
}
