/// All game entity types — pure data, plus the computed pixel accessors.

use crate::geometry::{row_to_y, GridPosition};

pub const LIVES_MAX: u32 = 6;
pub const SCORE_CAP: u32 = 9_999_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting input, running collisions and scoring.
    Playing,
    /// Out of lives.  Input is ignored until the game is reset.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// One-cell offset as `(d_row, d_column)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// A bug crossing a lane.  `x` is continuous and ignores the column grid;
/// `row` is always one of the three stone lanes.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub row: i32,
    /// Pixels per second.
    pub speed: f32,
}

impl Enemy {
    pub fn y(&self) -> f32 {
        row_to_y(self.row)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: GridPosition,
    pub lives: u32,
    pub lives_max: u32,
}

impl Player {
    pub fn x(&self) -> f32 {
        self.pos.pixel_x()
    }

    pub fn y(&self) -> f32 {
        self.pos.pixel_y()
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// Rock on the far bank.  Only blocks movement while visible.
#[derive(Clone, Debug, PartialEq)]
pub struct Rock {
    pub pos: GridPosition,
    pub visible: bool,
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GemKind {
    Blue,
    Green,
    Orange,
}

impl GemKind {
    pub const ALL: [GemKind; 3] = [GemKind::Blue, GemKind::Green, GemKind::Orange];

    pub fn points(self) -> u32 {
        match self {
            GemKind::Blue => 150,
            GemKind::Green => 200,
            GemKind::Orange => 350,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gem {
    pub pos: GridPosition,
    pub kind: GemKind,
}

impl Gem {
    pub fn points(&self) -> u32 {
        self.kind.points()
    }
}

/// Floating "+N" shown after a gem is picked up.  Rises from where it
/// spawned and fades out.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreLabel {
    pub points: u32,
    pub x: f32,
    pub spawn_y: f32,
    pub y: f32,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Things the host may want to react to, returned from every transition.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    LifeLost { lives_left: u32 },
    GameOver { score: u32 },
    LevelComplete { level: u32 },
    GemCollected { kind: GemKind, points: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Always exactly three; recycled, never removed.
    pub enemies: Vec<Enemy>,
    pub rock: Rock,
    pub gems: Vec<Gem>,
    /// In-flight score label, if any.  A new pickup replaces it.
    pub label: Option<ScoreLabel>,
    pub score: u32,
    /// Starts at 1, bumped on every crossing.
    pub level: u32,
    pub status: GameStatus,
}
