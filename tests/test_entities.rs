use bug_crossing::entities::*;
use bug_crossing::geometry::*;

#[test]
fn grid_to_pixel_mapping() {
    let start = PLAYER_START;
    assert_eq!(start.pixel_x(), 202.0);
    assert_eq!(start.pixel_y(), 373.5);

    let water = GridPosition::new(0, 0);
    assert_eq!(water.pixel_x(), 0.0);
    assert_eq!(water.pixel_y(), -41.5);
}

#[test]
fn grid_bounds() {
    assert!(GridPosition::new(0, 0).in_bounds());
    assert!(GridPosition::new(NUM_ROWS - 1, NUM_COLS - 1).in_bounds());
    assert!(!GridPosition::new(NUM_ROWS, 0).in_bounds());
    assert!(!GridPosition::new(0, -1).in_bounds());
}

#[test]
fn player_pixels_follow_grid() {
    let mut p = Player { pos: PLAYER_START, lives: 6, lives_max: 6 };
    p.pos = GridPosition::new(2, 4);
    assert_eq!(p.x(), 404.0);
    assert_eq!(p.y(), 124.5);
}

#[test]
fn enemy_y_from_lane() {
    let e = Enemy { x: 12.5, row: 1, speed: 200.0 };
    assert_eq!(e.y(), 41.5);
}

#[test]
fn gem_point_tiers() {
    assert_eq!(GemKind::Blue.points(), 150);
    assert_eq!(GemKind::Green.points(), 200);
    assert_eq!(GemKind::Orange.points(), 350);
    let g = Gem { pos: GridPosition::new(1, 1), kind: GemKind::Green };
    assert_eq!(g.points(), 200);
}

#[test]
fn direction_offsets() {
    assert_eq!(Direction::Left.offset(), (0, -1));
    assert_eq!(Direction::Right.offset(), (0, 1));
    assert_eq!(Direction::Up.offset(), (-1, 0));
    assert_eq!(Direction::Down.offset(), (1, 0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { pos: PLAYER_START, lives: 6, lives_max: 6 },
        enemies: Vec::new(),
        rock: Rock { pos: GridPosition::new(0, 1), visible: true },
        gems: Vec::new(),
        label: None,
        score: 0,
        level: 1,
        status: GameStatus::Playing,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos = GridPosition::new(1, 1);
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, row: 2, speed: 120.0 });

    assert_eq!(original.player.pos, PLAYER_START);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
