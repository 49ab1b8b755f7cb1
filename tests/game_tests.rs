use battleships::{
    CellStatus, Coordinate, Fleet, FleetBuilder, GameSession, Grid, GridError, RenderOptions,
    ShotResult,
};
use rand::{rngs::SmallRng, SeedableRng};

fn standard_game(seed: u64) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let builder = FleetBuilder::new(10).with_ships([5, 4, 4, 2]);
    GameSession::new(&builder, &mut rng).unwrap()
}

fn water_cell(game: &GameSession) -> Coordinate {
    game.grid()
        .iter()
        .find(|&(_, s)| s == CellStatus::Empty)
        .map(|(c, _)| c)
        .unwrap()
}

#[test]
fn miss_then_invalid() {
    let mut game = GameSession::from_parts(Grid::new(10), Fleet::default());
    let origin = Coordinate::new(0, 0);
    assert_eq!(game.shoot(origin).unwrap(), ShotResult::Miss);
    assert_eq!(game.grid().get(origin).unwrap(), CellStatus::Miss);
    assert_eq!(game.shoot(origin).unwrap(), ShotResult::Invalid);
    assert_eq!(game.grid().get(origin).unwrap(), CellStatus::Miss);
}

#[test]
fn hit_then_invalid_keeps_grid() {
    let mut game = standard_game(11);
    let target = game.fleet().ships()[0].cells()[0];
    assert_eq!(game.shoot(target).unwrap(), ShotResult::Hit);
    let after_first = game.grid().clone();
    for _ in 0..3 {
        assert_eq!(game.shoot(target).unwrap(), ShotResult::Invalid);
        assert_eq!(game.grid(), &after_first);
    }
}

#[test]
fn two_cell_ship_sinks_on_second_hit() {
    let mut game = standard_game(21);
    assert_eq!(game.remaining_ships(), 4);
    let destroyer = game
        .fleet()
        .ships()
        .iter()
        .find(|s| s.len() == 2)
        .unwrap()
        .clone();
    assert_eq!(game.shoot(destroyer.cells()[0]).unwrap(), ShotResult::Hit);
    assert_eq!(game.remaining_ships(), 4);
    assert_eq!(game.shoot(destroyer.cells()[1]).unwrap(), ShotResult::Hit);
    assert_eq!(game.remaining_ships(), 3);
}

#[test]
fn out_of_bounds_read_and_shot() {
    let mut game = standard_game(5);
    let target = Coordinate::new(10, 10);
    let expected = GridError::OutOfBounds {
        x: 10,
        y: 10,
        size: 10,
    };
    assert_eq!(game.grid().get(target).unwrap_err(), expected);
    assert_eq!(game.shoot(target).unwrap_err(), expected);
}

#[test]
fn misses_do_not_change_remaining() {
    let mut game = standard_game(8);
    let water = water_cell(&game);
    assert_eq!(game.shoot(water).unwrap(), ShotResult::Miss);
    assert_eq!(game.remaining_ships(), 4);
}

#[test]
fn sinking_everything_ends_game() {
    let mut game = standard_game(99);
    assert!(!game.is_over());
    let targets: Vec<Coordinate> = game
        .fleet()
        .ships()
        .iter()
        .flat_map(|s| s.cells().iter().copied())
        .collect();
    for t in targets {
        assert_eq!(game.shoot(t).unwrap(), ShotResult::Hit);
    }
    assert_eq!(game.remaining_ships(), 0);
    assert!(game.is_over());
    assert_eq!(game.grid().count(CellStatus::Ship), 0);
    assert_eq!(game.grid().count(CellStatus::Hit), 15);
}

#[test]
fn empty_fleet_is_over_immediately() {
    let mut rng = SmallRng::seed_from_u64(0);
    let game = GameSession::new(&FleetBuilder::new(2).add_ship(5), &mut rng).unwrap();
    assert_eq!(game.remaining_ships(), 0);
    assert!(game.is_over());
}

#[test]
fn render_hides_ships_until_revealed() {
    let mut game = standard_game(3);
    let ship_cell = game.fleet().ships()[0].cells()[1];
    let hidden = game.render(RenderOptions::HIDDEN);
    assert!(!hidden.contains('#'));
    let revealed = game.render(RenderOptions::REVEAL);
    assert_eq!(revealed.matches('#').count(), 15);

    game.shoot(ship_cell).unwrap();
    let revealed = game.render(RenderOptions::REVEAL);
    assert_eq!(revealed.matches('#').count(), 14);
    assert_eq!(revealed.matches('X').count(), 1);
}
