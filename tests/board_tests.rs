use knight_paths::{Board, BoardError, Cell};

#[test]
fn test_notation_examples() {
    let board = Board::new(8);
    assert_eq!(board.from_notation("a1").unwrap(), Cell::new(7, 0));
    assert_eq!(board.from_notation("h8").unwrap(), Cell::new(0, 7));
    assert_eq!(board.from_notation("b3").unwrap(), Cell::new(5, 1));
    assert_eq!(board.to_notation(Cell::new(7, 0)), "a1");
    assert_eq!(board.to_notation(Cell::new(0, 7)), "h8");
}

#[test]
fn test_notation_rejects_malformed_input() {
    let board = Board::new(8);
    for bad in ["", "z9", "a0", "a9", "i1", "A1", "1a", "b33", "a01", "b-2", "b3 "] {
        let err = board.from_notation(bad).unwrap_err();
        assert!(
            matches!(err, BoardError::InvalidNotation { .. }),
            "expected InvalidNotation for {:?}, got {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_notation_scales_with_board_size() {
    let board = Board::new(5);
    // "f1" is valid on size 6+ but off a 5x5 board.
    assert!(board.from_notation("f1").is_err());
    assert!(board.from_notation("a6").is_err());
    assert_eq!(board.from_notation("e5").unwrap(), Cell::new(0, 4));
}

#[test]
fn test_corner_has_two_moves() {
    let board = Board::new(8);
    let a1 = board.from_notation("a1").unwrap();
    let moves = board.valid_moves(a1);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&board.from_notation("b3").unwrap()));
    assert!(moves.contains(&board.from_notation("c2").unwrap()));
}

#[test]
fn test_center_has_eight_moves() {
    let board = Board::new(8);
    let center = Cell::new(4, 4);
    assert_eq!(board.valid_moves(center).len(), 8);
}

#[test]
fn test_moves_are_deterministic() {
    let board = Board::new(8);
    let cell = Cell::new(3, 3);
    assert_eq!(board.valid_moves(cell), board.valid_moves(cell));
}

#[test]
fn test_tiny_board_has_no_moves() {
    let board = Board::new(2);
    for row in 0..2 {
        for col in 0..2 {
            assert!(board.valid_moves(Cell::new(row, col)).is_empty());
        }
    }
}

#[test]
fn test_cell_bounds_check() {
    let board = Board::new(8);
    assert!(board.cell(7, 7).is_ok());
    assert_eq!(
        board.cell(8, 0).unwrap_err(),
        BoardError::OutOfBounds {
            row: 8,
            col: 0,
            size: 8
        }
    );
}
