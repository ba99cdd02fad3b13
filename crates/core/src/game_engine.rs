//! Game engine module - owns the road and runs the rules
//!
//! One tick is `advance_obstacles` followed by `increase_score`, then at most one
//! `move_player`. The engine has two states, running and game over; the only way
//! into game over is an obstacle meeting the car, and nothing leaves it. Once the
//! game is over every mutator is a no-op.

use crate::board::Board;
use crate::config::GameConfig;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{speed_display, GameSnapshot};
use crate::types::{
    CellKind, Direction, INITIAL_SPEED_MS, MAX_DIFFICULTY, POINTS_PER_RAMP, SPAWN_ODDS_BASE,
    SPEED_FLOOR_MS, SPEED_STEP_MS,
};

/// Denominator of the per-tick spawn chance at `difficulty`.
pub fn spawn_odds(difficulty: u32) -> u32 {
    SPAWN_ODDS_BASE - difficulty.min(MAX_DIFFICULTY)
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameEngine<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    rng: R,
    player_x: u16,
    score: u32,
    speed_ms: u32,
    difficulty: u32,
    game_over: bool,
}

impl GameEngine<SimpleRng> {
    /// Default 20x15 road driven by a seeded LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Paint the walls and park the car at the center of the bottom row
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut board = Board::new(&config);
        let player_x = config.start_column();
        board.set(player_x, config.bottom_row(), CellKind::Player);

        Self {
            config,
            board,
            rng,
            player_x,
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            difficulty: 0,
            game_over: false,
        }
    }

    /// Shift every obstacle one row down and maybe spawn a new one at the top
    ///
    /// Target rows are walked bottom to top so each row reads its upper
    /// neighbour before that neighbour is overwritten. An obstacle about to land
    /// on the car ends the game and abandons the rest of the shift.
    pub fn advance_obstacles(&mut self) {
        if self.game_over {
            return;
        }

        let bottom = self.config.bottom_row();
        for y in (1..=bottom).rev() {
            for x in self.board.playable_columns() {
                if y == bottom && x == self.player_x && self.board.is_obstacle(x, y - 1) {
                    self.crash("obstacle fell onto the car");
                    return;
                }
                self.board.pull_down(x, y);
            }
        }

        // The shift rolled the cell above over the car.
        self.board.set(self.player_x, bottom, CellKind::Player);

        self.board.clear_row(0);
        if self.rng.next_below(spawn_odds(self.difficulty)) == 0 {
            let lanes = self.board.playable_columns();
            let offset = self.rng.next_below((lanes.end - lanes.start) as u32) as u16;
            self.board
                .set(lanes.start + offset, 0, CellKind::Obstacle);
        }
    }

    /// Steer the car one column, stopping at the walls
    pub fn move_player(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }

        let bottom = self.config.bottom_row();
        self.board.set(self.player_x, bottom, CellKind::Empty);

        let lanes = self.board.playable_columns();
        match direction {
            Direction::Left if self.player_x > lanes.start => self.player_x -= 1,
            Direction::Right if self.player_x + 1 < lanes.end => self.player_x += 1,
            _ => {}
        }

        if self.board.is_obstacle(self.player_x, bottom) {
            self.crash("car drove into an obstacle");
            return;
        }

        self.board.set(self.player_x, bottom, CellKind::Player);
    }

    /// Award one point; every `POINTS_PER_RAMP` points the game speeds up
    ///
    /// Difficulty only climbs alongside a speed step, so once the delay hits
    /// its floor the spawn rate stops climbing as well.
    pub fn increase_score(&mut self) {
        if self.game_over {
            return;
        }

        self.score += 1;

        if self.score % POINTS_PER_RAMP == 0 && self.speed_ms > SPEED_FLOOR_MS {
            self.speed_ms = self
                .speed_ms
                .saturating_sub(SPEED_STEP_MS)
                .max(SPEED_FLOOR_MS);
            if self.difficulty < MAX_DIFFICULTY {
                self.difficulty += 1;
            }
            tracing::debug!(
                score = self.score,
                speed_ms = self.speed_ms,
                difficulty = self.difficulty,
                "speed ramp"
            );
        }
    }

    /// Advance, score, then apply an optional steering input
    pub fn tick(&mut self, input: Option<Direction>) {
        self.advance_obstacles();
        self.increase_score();
        if let Some(direction) = input {
            self.move_player(direction);
        }
    }

    fn crash(&mut self, cause: &'static str) {
        self.game_over = true;
        tracing::info!(score = self.score, column = self.player_x, cause, "game over");
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick delay in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Speedometer reading shown in the status line
    pub fn speed_display(&self) -> u32 {
        speed_display(self.speed_ms)
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn player_column(&self) -> u16 {
        self.player_x
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Borrowed view for rendering
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            board: &self.board,
            score: self.score,
            speed_ms: self.speed_ms,
            difficulty: self.difficulty,
            player_column: self.player_x,
            game_over: self.game_over,
        }
    }

    /// Place a cell directly (test setup only)
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
