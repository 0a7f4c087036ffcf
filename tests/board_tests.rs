use seabattle::{Board, BoardError, CellState, Coordinate, Orientation, Ship, ShotResult, BOARD_SIZE};

fn ship(length: usize, row: i32, col: i32, orientation: Orientation) -> Ship {
    Ship::new(length, Coordinate::new(row, col), orientation)
}

#[test]
fn test_out_of_bounds() {
    let board = Board::new(6);
    assert!(!board.is_out_of_bounds(Coordinate::new(0, 0)));
    assert!(!board.is_out_of_bounds(Coordinate::new(5, 5)));
    assert!(board.is_out_of_bounds(Coordinate::new(6, 0)));
    assert!(board.is_out_of_bounds(Coordinate::new(0, 6)));
    assert!(board.is_out_of_bounds(Coordinate::new(-1, 3)));
    assert_eq!(Board::default().size(), BOARD_SIZE);
}

#[test]
fn test_fire_boundary() {
    let mut board = Board::new(6);
    let last = Coordinate::new(5, 5);
    assert_eq!(board.fire(last).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(last), Some(CellState::Miss));
    assert_eq!(
        board.fire(Coordinate::new(6, 0)).unwrap_err(),
        BoardError::OutOfBoundsFire(Coordinate::new(6, 0))
    );
}

#[test]
fn test_single_cell_ship_sinks_in_one_shot() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    board.begin_match();

    assert_eq!(board.fire(Coordinate::new(0, 0)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(board.live_ship_count(), 0);
    assert!(board.all_sunk());
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(CellState::Hit));
    // in-bounds margin around a corner ship
    for c in [(0, 1), (1, 0), (1, 1)] {
        let c = Coordinate::new(c.0, c.1);
        assert_eq!(board.cell(c), Some(CellState::Margin));
        assert!(board.is_targeted(c));
    }
}

#[test]
fn test_hit_then_sink_reveals_margin() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Horizontal)).unwrap();
    board.begin_match();

    assert_eq!(board.fire(Coordinate::new(2, 2)).unwrap(), ShotResult::Hit);
    assert_eq!(board.ships()[0].remaining_segments(), 1);
    assert_eq!(board.cell(Coordinate::new(1, 1)), Some(CellState::Empty));

    assert_eq!(board.fire(Coordinate::new(2, 3)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.ships()[0].remaining_segments(), 0);

    for row in 1..=3 {
        for col in 1..=4 {
            let c = Coordinate::new(row, col);
            let expected = if row == 2 && (col == 2 || col == 3) {
                CellState::Hit
            } else {
                CellState::Margin
            };
            assert_eq!(board.cell(c), Some(expected), "cell {:?}", c);
            assert!(board.is_targeted(c));
        }
    }
    assert_eq!(board.targeted_count(), 12);
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(CellState::Empty));
}

#[test]
fn test_margin_keeps_earlier_misses() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 3, 3, Orientation::Vertical)).unwrap();
    board.begin_match();
    assert_eq!(board.fire(Coordinate::new(2, 2)).unwrap(), ShotResult::Miss);
    assert_eq!(board.fire(Coordinate::new(3, 3)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.cell(Coordinate::new(2, 2)), Some(CellState::Miss));
    assert_eq!(board.cell(Coordinate::new(4, 4)), Some(CellState::Margin));
}

#[test]
fn test_placement_conflicts() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Horizontal)).unwrap();

    // overlapping
    assert!(matches!(
        board.add_ship(ship(1, 2, 2, Orientation::Horizontal)),
        Err(BoardError::ShipPlacementConflict(_))
    ));
    // touching diagonally
    assert!(matches!(
        board.add_ship(ship(1, 1, 1, Orientation::Horizontal)),
        Err(BoardError::ShipPlacementConflict(_))
    ));
    // running off the edge
    assert_eq!(
        board.add_ship(ship(3, 0, 4, Orientation::Horizontal)),
        Err(BoardError::ShipPlacementConflict(Coordinate::new(0, 6)))
    );
    // clear of the buffer
    board.add_ship(ship(1, 4, 4, Orientation::Vertical)).unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_conflict_after_sinking() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Horizontal)).unwrap();
    board.begin_match();
    board.fire(Coordinate::new(2, 2)).unwrap();
    board.fire(Coordinate::new(2, 3)).unwrap();
    assert!(matches!(
        board.add_ship(ship(2, 2, 1, Orientation::Horizontal)),
        Err(BoardError::ShipPlacementConflict(_))
    ));
}

#[test]
fn test_failed_placement_leaves_board_untouched() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 3, 4, Orientation::Horizontal)).unwrap();
    let before = board.clone();

    // (3,0)..(3,2) are free, (3,3) is in the buffer of the first ship
    assert_eq!(
        board.add_ship(ship(4, 3, 0, Orientation::Horizontal)),
        Err(BoardError::ShipPlacementConflict(Coordinate::new(3, 3)))
    );
    assert_eq!(board, before);
    assert_eq!(board.cell(Coordinate::new(3, 0)), Some(CellState::Empty));
    assert!(!board.is_targeted(Coordinate::new(3, 0)));
}

#[test]
fn test_placement_buffer_is_not_fired_upon() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    assert!(board.is_targeted(Coordinate::new(1, 1)));
    assert_eq!(board.cell(Coordinate::new(1, 1)), Some(CellState::Empty));

    board.begin_match();
    assert_eq!(board.targeted_count(), 0);
    assert_eq!(board.fire(Coordinate::new(1, 1)).unwrap(), ShotResult::Miss);
}

#[test]
fn test_repeated_shot_is_rejected() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 0, 0, Orientation::Vertical)).unwrap();
    board.begin_match();

    for c in [Coordinate::new(0, 0), Coordinate::new(4, 4)] {
        board.fire(c).unwrap();
        let before = board.clone();
        assert_eq!(board.fire(c).unwrap_err(), BoardError::AlreadyTargeted(c));
        assert_eq!(board, before);
    }
    assert_eq!(board.ships()[0].remaining_segments(), 1);
}

#[test]
fn test_sunk_ship_cells_cannot_be_hit_again() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 5, 5, Orientation::Horizontal)).unwrap();
    board.begin_match();
    board.fire(Coordinate::new(5, 5)).unwrap();
    assert_eq!(
        board.fire(Coordinate::new(5, 5)).unwrap_err(),
        BoardError::AlreadyTargeted(Coordinate::new(5, 5))
    );
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn test_all_sunk_needs_a_fleet() {
    let board = Board::new(6);
    assert!(!board.all_sunk());
    assert_eq!(board.live_ship_count(), 0);
}

#[test]
fn test_rows_and_concealment_flag() {
    let mut board = Board::new(6);
    assert_eq!(board.rows().count(), 6);
    assert!(board.rows().all(|r| r.len() == 6));
    assert!(!board.is_concealed());
    board.set_concealed(true);
    assert!(board.is_concealed());
    assert_eq!(board.cell(Coordinate::new(6, 6)), None);
}

#[test]
fn test_begin_match_keeps_shot_history() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Horizontal)).unwrap();
    board.begin_match();
    assert_eq!(board.fire(Coordinate::new(2, 2)).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire(Coordinate::new(0, 0)).unwrap(), ShotResult::Miss);

    board.begin_match();
    let before = board.clone();
    assert_eq!(
        board.fire(Coordinate::new(2, 2)).unwrap_err(),
        BoardError::AlreadyTargeted(Coordinate::new(2, 2))
    );
    assert_eq!(
        board.fire(Coordinate::new(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted(Coordinate::new(0, 0))
    );
    assert_eq!(board, before);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.ships()[0].remaining_segments(), 1);
    assert_eq!(board.cell(Coordinate::new(2, 3)), Some(CellState::Ship));
}

#[test]
fn test_begin_match_keeps_sunk_margin() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    board.add_ship(ship(1, 4, 4, Orientation::Horizontal)).unwrap();
    board.begin_match();
    assert_eq!(board.fire(Coordinate::new(0, 0)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.targeted_count(), 4);

    board.begin_match();
    assert_eq!(board.targeted_count(), 4);
    assert_eq!(
        board.fire(Coordinate::new(1, 1)).unwrap_err(),
        BoardError::AlreadyTargeted(Coordinate::new(1, 1))
    );
    // the second ship's reserved cells were released by the first call
    assert_eq!(board.fire(Coordinate::new(3, 3)).unwrap(), ShotResult::Miss);
    assert_eq!(board.fire(Coordinate::new(4, 4)).unwrap(), ShotResult::Sunk);
}
