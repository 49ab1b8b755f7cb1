use battleships::{CellStatus, Coordinate, Grid, GridError};

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(10);
    assert_eq!(grid.size(), 10);
    assert_eq!(grid.count(CellStatus::Empty), 100);
    assert!(grid.iter().all(|(_, s)| s == CellStatus::Empty));
}

#[test]
fn set_overwrites_unconditionally() -> Result<(), GridError> {
    let mut grid = Grid::new(4);
    let c = Coordinate::new(1, 3);
    grid.set(c, CellStatus::Ship)?;
    assert_eq!(grid.get(c)?, CellStatus::Ship);
    grid.set(c, CellStatus::Miss)?;
    assert_eq!(grid.get(c)?, CellStatus::Miss);
    grid.set(c, CellStatus::Empty)?;
    assert_eq!(grid.get(c)?, CellStatus::Empty);
    Ok(())
}

#[test]
fn out_of_bounds_access_fails() {
    let mut grid = Grid::new(10);
    let err = grid.get(Coordinate::new(10, 10)).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfBounds {
            x: 10,
            y: 10,
            size: 10
        }
    );
    assert!(grid.get(Coordinate::new(0, 10)).is_err());
    assert!(grid.get(Coordinate::new(10, 0)).is_err());
    assert!(grid.set(Coordinate::new(11, 2), CellStatus::Ship).is_err());
    assert_eq!(grid.count(CellStatus::Ship), 0);
}

#[test]
fn iter_is_row_major() {
    let mut grid = Grid::new(3);
    grid.set(Coordinate::new(2, 0), CellStatus::Hit).unwrap();
    let cells: Vec<_> = grid.iter().map(|(c, _)| (c.x, c.y)).take(4).collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    assert_eq!(grid.row(0).unwrap()[2], CellStatus::Hit);
    assert!(grid.row(3).is_err());
}

#[test]
fn clear_checks_full_neighbourhood() {
    let mut grid = Grid::new(5);
    grid.set(Coordinate::new(2, 2), CellStatus::Ship).unwrap();
    for y in 1..=3 {
        for x in 1..=3 {
            assert!(!grid.is_clear(Coordinate::new(x, y)), "({x}, {y}) touches the ship");
        }
    }
    assert!(grid.is_clear(Coordinate::new(0, 0)));
    assert!(grid.is_clear(Coordinate::new(4, 2)));
    assert!(grid.is_clear(Coordinate::new(2, 4)));
    // Hit segments no longer block.
    grid.set(Coordinate::new(2, 2), CellStatus::Hit).unwrap();
    assert!(grid.is_clear(Coordinate::new(2, 2)));
}

#[test]
fn corner_clear_ignores_off_grid_neighbours() {
    let mut grid = Grid::new(3);
    assert!(grid.is_clear(Coordinate::new(0, 0)));
    assert!(grid.is_clear(Coordinate::new(2, 2)));
    grid.set(Coordinate::new(1, 1), CellStatus::Ship).unwrap();
    assert!(!grid.is_clear(Coordinate::new(0, 0)));
    assert!(!grid.is_clear(Coordinate::new(2, 2)));
    assert!(!grid.is_clear(Coordinate::new(3, 3)));
}
