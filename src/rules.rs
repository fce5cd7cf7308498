/// Collision and scoring rules — pure predicates over entities and counters.

use crate::entities::{Enemy, Gem, Player, Rock, ScoreLabel, SCORE_CAP};
use crate::geometry::{GridPosition, NUM_COLS, SECTION_WIDTH};

/// Left and right reach of the player's sprite footprint around its x.
const HITBOX_LEFT: f32 = 25.0;
const HITBOX_RIGHT: f32 = 5.0;

/// Enemies spawn one lane-width left of the field.
pub const ENEMY_START_X: f32 = -SECTION_WIDTH;

pub const ENEMY_SPEED_MIN: f32 = 100.0;
pub const ENEMY_SPEED_MAX: f32 = 450.0;

pub const CROSSING_BONUS: u32 = 100;

/// Label rise rate (px/s) and the rise after which it disappears.
pub const LABEL_RISE_SPEED: f32 = 65.0;
pub const LABEL_RISE_LIMIT: f32 = 60.0;

/// Same lane, and the enemy's half-lane box overlaps the player's
/// asymmetric footprint.
pub fn is_collided(player: &Player, enemy: &Enemy) -> bool {
    let px = player.x();
    enemy.row == player.pos.row
        && px - HITBOX_LEFT < enemy.x + SECTION_WIDTH / 2.0
        && px + HITBOX_RIGHT > enemy.x - SECTION_WIDTH / 2.0
}

pub fn is_past_field(enemy: &Enemy) -> bool {
    enemy.x > SECTION_WIDTH * (NUM_COLS + 1) as f32
}

pub fn blocks(rock: &Rock, pos: GridPosition) -> bool {
    rock.visible && rock.pos == pos
}

/// Saturates at `SCORE_CAP`.
pub fn add_points(score: u32, points: u32) -> u32 {
    score.saturating_add(points).min(SCORE_CAP)
}

pub fn is_picked_up(player: &Player, gem: &Gem) -> bool {
    player.pos == gem.pos
}

pub fn label_rise(label: &ScoreLabel) -> f32 {
    label.spawn_y - label.y
}

pub fn label_expired(label: &ScoreLabel) -> bool {
    label_rise(label) >= LABEL_RISE_LIMIT
}

/// 1.0 at spawn down to 0.0 at the rise limit.
pub fn label_opacity(label: &ScoreLabel) -> f32 {
    (1.0 - label_rise(label) / LABEL_RISE_LIMIT).clamp(0.0, 1.0)
}
