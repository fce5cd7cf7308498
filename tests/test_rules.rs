use bug_crossing::entities::*;
use bug_crossing::geometry::GridPosition;
use bug_crossing::rules::*;

fn player_at(row: i32, column: i32) -> Player {
    Player {
        pos: GridPosition::new(row, column),
        lives: 3,
        lives_max: 6,
    }
}

fn enemy(x: f32, row: i32) -> Enemy {
    Enemy { x, row, speed: 100.0 }
}

// ── is_collided ───────────────────────────────────────────────────────────────

#[test]
fn collides_in_same_lane_with_overlap() {
    let p = player_at(2, 0); // x = 0
    assert!(is_collided(&p, &enemy(40.0, 2)));
}

#[test]
fn no_collision_in_different_lane() {
    let p = player_at(2, 0);
    for x in [-50.0, 0.0, 40.0, 300.0] {
        assert!(!is_collided(&p, &enemy(x, 1)));
    }
}

#[test]
fn hitbox_is_asymmetric() {
    let p = player_at(2, 0);
    // Left reach: enemy x must exceed -75.5
    assert!(!is_collided(&p, &enemy(-75.5, 2)));
    assert!(is_collided(&p, &enemy(-75.0, 2)));
    // Right reach: enemy x must stay below 55.5
    assert!(is_collided(&p, &enemy(55.0, 2)));
    assert!(!is_collided(&p, &enemy(55.5, 2)));
}

#[test]
fn hitbox_follows_player_column() {
    let p = player_at(1, 3); // x = 303
    assert!(is_collided(&p, &enemy(300.0, 1)));
    assert!(!is_collided(&p, &enemy(40.0, 1)));
}

// ── is_past_field ─────────────────────────────────────────────────────────────

#[test]
fn past_field_threshold() {
    // 101 × (5 + 1)
    assert!(!is_past_field(&enemy(606.0, 1)));
    assert!(is_past_field(&enemy(606.5, 1)));
    assert!(!is_past_field(&enemy(ENEMY_START_X, 1)));
}

// ── blocks ────────────────────────────────────────────────────────────────────

#[test]
fn only_visible_rock_blocks_its_own_cell() {
    let cell = GridPosition::new(0, 2);
    let shown = Rock { pos: cell, visible: true };
    let hidden = Rock { pos: cell, visible: false };
    assert!(blocks(&shown, cell));
    assert!(!blocks(&hidden, cell));
    assert!(!blocks(&shown, GridPosition::new(0, 3)));
}

// ── add_points ────────────────────────────────────────────────────────────────

#[test]
fn add_points_normal() {
    assert_eq!(add_points(0, 100), 100);
    assert_eq!(add_points(150, 350), 500);
}

#[test]
fn add_points_saturates_at_cap() {
    assert_eq!(add_points(9_999_950, 100), 9_999_999);
    assert_eq!(add_points(SCORE_CAP, 1), SCORE_CAP);
    assert_eq!(add_points(u32::MAX - 1, 10), SCORE_CAP);
}

// ── gems & labels ─────────────────────────────────────────────────────────────

#[test]
fn gem_picked_up_on_exact_cell_only() {
    let p = player_at(4, 1);
    let here = Gem { pos: GridPosition::new(4, 1), kind: GemKind::Orange };
    let next_door = Gem { pos: GridPosition::new(4, 2), kind: GemKind::Orange };
    assert!(is_picked_up(&p, &here));
    assert!(!is_picked_up(&p, &next_door));
}

#[test]
fn label_expiry_and_opacity() {
    let fresh = ScoreLabel { points: 150, x: 0.0, spawn_y: 100.0, y: 100.0 };
    assert!(!label_expired(&fresh));
    assert_eq!(label_opacity(&fresh), 1.0);

    let half = ScoreLabel { y: 70.0, ..fresh.clone() };
    assert_eq!(label_rise(&half), 30.0);
    assert_eq!(label_opacity(&half), 0.5);

    let done = ScoreLabel { y: 40.0, ..fresh };
    assert!(label_expired(&done));
    assert_eq!(label_opacity(&done), 0.0);
}
