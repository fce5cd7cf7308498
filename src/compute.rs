/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState` together with the events the transition produced.  Side
/// effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Direction, Enemy, GameEvent, GameState, GameStatus, Gem, GemKind, Player, Rock, ScoreLabel,
};
use crate::geometry::{GridPosition, NUM_COLS, NUM_ROWS, PLAYER_START};
use crate::rules::{
    add_points, blocks, is_collided, is_past_field, is_picked_up, label_expired, CROSSING_BONUS,
    ENEMY_SPEED_MAX, ENEMY_SPEED_MIN, ENEMY_START_X, LABEL_RISE_SPEED,
};

pub const ENEMY_COUNT: usize = 3;
pub const MAX_GEMS_PER_LEVEL: usize = 2;

/// Rocks only ever appear in the leftmost four columns of the far bank.
const ROCK_COLUMNS: i32 = 4;

// ── Entity helpers ────────────────────────────────────────────────────────────

/// A fresh enemy waiting just off the left edge on a random stone lane.
/// Also used to recycle enemies that ran off the right edge; nothing stops
/// a recycled enemy drawing the same lane again.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: ENEMY_START_X,
        row: rng.gen_range(1..=3),
        speed: rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
    }
}

pub fn advance_enemy(enemy: &Enemy, dt: f32) -> Enemy {
    Enemy {
        x: enemy.x + enemy.speed * dt,
        ..enemy.clone()
    }
}

pub fn generate_rock(rng: &mut impl Rng) -> Rock {
    Rock {
        visible: rng.gen_bool(0.5),
        pos: GridPosition::new(0, rng.gen_range(0..ROCK_COLUMNS)),
    }
}

fn random_cell(rng: &mut impl Rng) -> GridPosition {
    GridPosition::new(rng.gen_range(0..NUM_ROWS), rng.gen_range(0..NUM_COLS))
}

/// Pick a gem cell from `draw`.  A cell on the rock or on `player_pos` is
/// drawn once more and the second draw is kept as-is.
pub fn place_gem(
    rock: &Rock,
    player_pos: GridPosition,
    mut draw: impl FnMut() -> GridPosition,
) -> GridPosition {
    let pos = draw();
    if pos == rock.pos || pos == player_pos {
        draw()
    } else {
        pos
    }
}

/// Zero to two gems for a new level, placed with [`place_gem`].
pub fn generate_gems(rock: &Rock, player_pos: GridPosition, rng: &mut impl Rng) -> Vec<Gem> {
    let count = rng.gen_range(0..=MAX_GEMS_PER_LEVEL);
    (0..count)
        .map(|_| {
            let pos = place_gem(rock, player_pos, || random_cell(rng));
            let kind = GemKind::ALL[rng.gen_range(0..GemKind::ALL.len())];
            Gem { pos, kind }
        })
        .collect()
}

pub fn spawn_label(gem: &Gem) -> ScoreLabel {
    let y = gem.pos.pixel_y();
    ScoreLabel {
        points: gem.points(),
        x: gem.pos.pixel_x(),
        spawn_y: y,
        y,
    }
}

/// Rise for one frame; `None` once it has risen past the limit.
pub fn advance_label(label: &ScoreLabel, dt: f32) -> Option<ScoreLabel> {
    let next = ScoreLabel {
        y: label.y - LABEL_RISE_SPEED * dt,
        ..label.clone()
    };
    if label_expired(&next) {
        None
    } else {
        Some(next)
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a new game.  `lives_max` below one is raised to one.
pub fn init_state(lives_max: u32, rng: &mut impl Rng) -> GameState {
    let lives_max = lives_max.max(1);
    let enemies = (0..ENEMY_COUNT).map(|_| spawn_enemy(rng)).collect();
    let rock = generate_rock(rng);
    let gems = generate_gems(&rock, PLAYER_START, rng);
    GameState {
        player: Player {
            pos: PLAYER_START,
            lives: lives_max,
            lives_max,
        },
        enemies,
        rock,
        gems,
        label: None,
        score: 0,
        level: 1,
        status: GameStatus::Playing,
    }
}

/// Full reinitialisation, as at construction.  Only `lives_max` carries over.
pub fn reset_state(state: &GameState, rng: &mut impl Rng) -> GameState {
    init_state(state.player.lives_max, rng)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step one cell in `direction`, clamped to the grid and refused if a
/// visible rock sits in the target cell.  Reaching the far bank starts the
/// next level.  Ignored entirely once the game is over.
pub fn move_player(
    state: &GameState,
    direction: Direction,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    if state.status != GameStatus::Playing {
        return (state.clone(), Vec::new());
    }

    let (d_row, d_col) = direction.offset();
    let from = state.player.pos;
    let target = GridPosition::new(
        (from.row + d_row).clamp(0, NUM_ROWS - 1),
        (from.column + d_col).clamp(0, NUM_COLS - 1),
    );
    if target == from || blocks(&state.rock, target) {
        return (state.clone(), Vec::new());
    }

    let moved = GameState {
        player: Player {
            pos: target,
            ..state.player.clone()
        },
        ..state.clone()
    };

    if target.row == 0 {
        complete_level(&moved, rng)
    } else {
        (moved, Vec::new())
    }
}

fn complete_level(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    let level = state.level + 1;
    let rock = generate_rock(rng);
    let gems = generate_gems(&rock, PLAYER_START, rng);
    let next = GameState {
        player: Player {
            pos: PLAYER_START,
            ..state.player.clone()
        },
        rock,
        gems,
        score: add_points(state.score, CROSSING_BONUS),
        level,
        ..state.clone()
    };
    (next, vec![GameEvent::LevelComplete { level }])
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    let mut events = Vec::new();
    let mut player = state.player.clone();
    let mut status = state.status;

    // ── 1. Enemies: move, hit-test, recycle ──────────────────────────────────
    let mut enemies = Vec::with_capacity(state.enemies.len());
    for enemy in &state.enemies {
        let moved = advance_enemy(enemy, dt);

        if status == GameStatus::Playing && is_collided(&player, &moved) {
            player.lives = player.lives.saturating_sub(1);
            player.pos = PLAYER_START;
            events.push(GameEvent::LifeLost {
                lives_left: player.lives,
            });
            if player.lives == 0 {
                status = GameStatus::GameOver;
                events.push(GameEvent::GameOver { score: state.score });
            }
        }

        enemies.push(if is_past_field(&moved) {
            spawn_enemy(rng)
        } else {
            moved
        });
    }

    // ── 2. Score label ───────────────────────────────────────────────────────
    let mut label = state.label.as_ref().and_then(|l| advance_label(l, dt));

    // ── 3. Gem pickups ───────────────────────────────────────────────────────
    let mut score = state.score;
    let mut gems = state.gems.clone();
    if status == GameStatus::Playing {
        let (picked, remaining): (Vec<Gem>, Vec<Gem>) =
            gems.into_iter().partition(|g| is_picked_up(&player, g));
        for gem in &picked {
            score = add_points(score, gem.points());
            label = Some(spawn_label(gem));
            events.push(GameEvent::GemCollected {
                kind: gem.kind,
                points: gem.points(),
            });
        }
        gems = remaining;
    }

    let next = GameState {
        player,
        enemies,
        gems,
        label,
        score,
        status,
        ..state.clone()
    };
    (next, events)
}
