//! Session tests - serialized game access and observations

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use blockfall::core::{Board, EngineState, Piece, KIND_O};
use blockfall::session::{Observation, Session};
use blockfall::types::{Cell, Command, GameConfig, Point};

#[test]
fn test_session_drives_a_game_to_a_landing() {
    let session = Session::new(42);

    let mut landed = None;
    for _ in 0..25 {
        if let Some(event) = session.tick() {
            landed = Some(event);
            break;
        }
    }

    let event = landed.unwrap();
    assert_eq!(event.rows_cleared, 0);
    assert!(!event.reset);

    let observation = session.observe();
    assert_eq!(observation.board.len(), 4);
    assert_eq!(observation.active.cells.len(), 4);
}

#[test]
fn test_session_surfaces_the_reset_event() {
    // Row 4 fully settled with the piece stuck inside the spawn buffer.
    let cells: Vec<Cell> = (0..9).map(|x| Cell::new(1, Point::new(x, 4))).collect();
    let board = Board::with_cells(9, 20, cells);
    let stuck = Piece::new(KIND_O, 2, Point::new(3, 2), 0).unwrap();
    let session = Session::from_state(EngineState::from_parts(
        GameConfig::default(),
        board,
        stuck,
        13,
    ));

    let event = session.tick().unwrap();
    assert!(event.reset);

    let observation = session.observe();
    assert!(observation.board.is_empty());
    assert_eq!(observation.active.x, 3);
    assert_eq!(observation.active.y, 0);
}

#[test]
fn test_observation_serializes_with_stable_field_names() {
    let session = Session::new(7);
    session.command(Command::Rotate);

    let json = serde_json::to_string(&session.observe()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["cols"], 9);
    assert_eq!(value["rows"], 20);
    assert!(value["board"].is_array());
    assert_eq!(value["active"]["rotation"], 1);
    assert_eq!(value["active"]["cells"].as_array().unwrap().len(), 4);

    let back: Observation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session.observe());
}

#[test]
fn test_session_serializes_concurrent_drivers() {
    let session = Arc::new(Session::new(100));
    let mut handles = Vec::new();

    // One timer thread and two input threads hammer the same session.
    {
        let session = Arc::clone(&session);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                session.tick();
            }
        }));
    }
    for command in [Command::Left, Command::Rotate] {
        let session = Arc::clone(&session);
        handles.push(thread::spawn(move || {
            for _ in 0..150 {
                session.command(command);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // The final observation is one coherent snapshot.
    let observation = session.observe();
    let mut positions = HashSet::new();
    for cell in &observation.board {
        assert!(cell.x >= 0 && (cell.x as u8) < observation.cols);
        assert!(cell.y >= 0 && (cell.y as u8) < observation.rows);
        assert!(positions.insert((cell.x, cell.y)));
    }
    assert_eq!(observation.active.cells.len(), 4);
}
