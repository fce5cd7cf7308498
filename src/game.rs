/// The game controller: one owned `GameState` plus the RNG that drives it.
///
/// The frame driver calls [`Game::update`] once per frame and forwards
/// directions to [`Game::handle_input`]; the renderer reads [`Game::state`]
/// afterwards.  Both return the events that happened so the host can show
/// a game-over screen.

use rand::Rng;

use crate::compute::{init_state, move_player, reset_state, tick};
use crate::entities::{Direction, GameEvent, GameState, GameStatus};

pub struct Game<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(lives_max: u32, mut rng: R) -> Self {
        let state = init_state(lives_max, &mut rng);
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }

    /// Advance every entity by `dt` seconds.  No clamping is applied.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let (next, events) = tick(&self.state, dt, &mut self.rng);
        self.state = next;
        events
    }

    pub fn handle_input(&mut self, direction: Direction) -> Vec<GameEvent> {
        let (next, events) = move_player(&self.state, direction, &mut self.rng);
        self.state = next;
        events
    }

    /// Back to a fresh game with full lives and zero score.
    pub fn reset(&mut self) {
        self.state = reset_state(&self.state, &mut self.rng);
    }
}
