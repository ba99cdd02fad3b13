//! The tick loop: welcome screen, play, final screen.
//!
//! One tick is render, advance obstacles, increase score, a non-blocking poll
//! for one key, at most one move, then a sleep equal to the current speed.
//! Terminal failures are logged and the loop carries on.

use std::fmt::Write as _;
use std::time::Duration;

use arrayvec::ArrayString;

use crate::core::{speed_display, GameEngine, RandomSource};
use crate::input::KeySource;
use crate::pacer::Pacer;
use crate::term::Screen;
use crate::types::{Direction, GameAction};

pub const WELCOME: [&str; 3] = [
    "Welcome to the Terminal Racing Game!",
    "Avoid obstacles (X) by moving your car (A) left and right.",
    "Press any key to start...",
];

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    Quit,
}

/// Final numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub score: u32,
    pub speed_ms: u32,
    pub ticks: u32,
}

impl SessionSummary {
    pub fn speed_display(&self) -> u32 {
        speed_display(self.speed_ms)
    }
}

pub struct GameLoop<R, K, S, P> {
    engine: GameEngine<R>,
    keys: K,
    screen: S,
    pacer: P,
    ticks: u32,
}

impl<R, K, S, P> GameLoop<R, K, S, P>
where
    R: RandomSource,
    K: KeySource,
    S: Screen,
    P: Pacer,
{
    pub fn new(engine: GameEngine<R>, keys: K, screen: S, pacer: P) -> Self {
        Self {
            engine,
            keys,
            screen,
            pacer,
            ticks: 0,
        }
    }

    /// Play a whole session and return its summary.
    pub fn run(&mut self) -> SessionSummary {
        self.welcome();
        let outcome = self.play();
        let summary = self.summary(outcome);
        tracing::info!(
            ?outcome,
            score = summary.score,
            ticks = summary.ticks,
            "session finished"
        );
        self.farewell(&summary);
        summary
    }

    /// Show the instructions and wait for any key.
    pub fn welcome(&mut self) {
        tracing::debug!("showing welcome screen");
        report(self.screen.show_message(&WELCOME), "draw welcome screen");
        self.wait_for_key();
    }

    /// Tick until the car crashes or the player quits.
    pub fn play(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Run one tick; returns the outcome once the run is over.
    pub fn step(&mut self) -> Option<Outcome> {
        if self.engine.is_game_over() {
            return Some(Outcome::Crashed);
        }

        report(
            self.screen.show_game(&self.engine.snapshot()),
            "draw frame",
        );
        self.engine.advance_obstacles();
        self.engine.increase_score();
        self.ticks += 1;

        let mut quit = false;
        // A crashed car cannot steer; leave any typed key for the final screen.
        if !self.engine.is_game_over() {
            if let Some(ch) = self.poll_key() {
                match GameAction::from_char(ch) {
                    Some(GameAction::Quit) => {
                        tracing::debug!(score = self.engine.score(), "quit requested");
                        quit = true;
                    }
                    Some(action) => {
                        tracing::trace!(action = action.as_str(), "steer");
                        self.engine.move_player(action.direction());
                    }
                    None => self.engine.move_player(Direction::None),
                }
            }
        }

        self.pacer
            .wait(Duration::from_millis(self.engine.speed_ms() as u64));

        if quit {
            Some(Outcome::Quit)
        } else if self.engine.is_game_over() {
            Some(Outcome::Crashed)
        } else {
            None
        }
    }

    /// Show the final score and wait for any key.
    pub fn farewell(&mut self, summary: &SessionSummary) {
        let mut score = ArrayString::<32>::new();
        let _ = write!(score, "Final Score: {}", summary.score);
        let mut speed = ArrayString::<32>::new();
        let _ = write!(speed, "Final Speed: {}mph", summary.speed_display());

        let lines = [
            "Game Over!",
            score.as_str(),
            speed.as_str(),
            "Press any key to exit...",
        ];
        report(self.screen.show_message(&lines), "draw final screen");
        self.wait_for_key();
    }

    pub fn summary(&self, outcome: Outcome) -> SessionSummary {
        SessionSummary {
            outcome,
            score: self.engine.score(),
            speed_ms: self.engine.speed_ms(),
            ticks: self.ticks,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    fn poll_key(&mut self) -> Option<char> {
        match self.keys.poll_pending() {
            Ok(true) => match self.keys.read_char() {
                Ok(ch) => Some(ch),
                Err(err) => {
                    tracing::warn!(%err, "failed to read key");
                    None
                }
            },
            Ok(false) => None,
            Err(err) => {
                tracing::warn!(%err, "failed to poll keyboard");
                None
            }
        }
    }

    fn wait_for_key(&mut self) {
        // A broken keyboard must not hang the game on a "press any key" screen.
        if let Err(err) = self.keys.read_char() {
            tracing::warn!(%err, "failed to read key, continuing");
        }
    }
}

fn report(result: anyhow::Result<()>, what: &'static str) {
    if let Err(err) = result {
        tracing::warn!(%err, what, "terminal output failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SequenceRng};
    use crate::input::{KeyStep, ScriptedKeys};
    use crate::pacer::RecordingPacer;
    use crate::term::RecordingScreen;

    type TestLoop = GameLoop<SequenceRng, ScriptedKeys, RecordingScreen, RecordingPacer>;

    fn quiet_loop(keys: ScriptedKeys) -> TestLoop {
        GameLoop::new(
            GameEngine::new(GameConfig::default(), SequenceRng::never_spawn()),
            keys,
            RecordingScreen::default(),
            RecordingPacer::default(),
        )
    }

    #[test]
    fn step_renders_before_advancing() {
        let mut game = quiet_loop(ScriptedKeys::typed(""));
        assert_eq!(game.step(), None);
        assert_eq!(game.screen().frames.len(), 1);
        assert!(game.screen().frames[0].starts_with("Score: 0 |"));
        assert_eq!(game.engine().score(), 1);
        assert_eq!(game.pacer().delays, vec![Duration::from_millis(100)]);
    }

    #[test]
    fn one_poll_per_tick() {
        let mut game = quiet_loop(ScriptedKeys::typed("..."));
        for _ in 0..5 {
            assert_eq!(game.step(), None);
        }
        assert_eq!(game.keys().polls(), 5);
    }

    #[test]
    fn steering_keys_move_the_car() {
        let mut game = quiet_loop(ScriptedKeys::typed("aAd.D"));
        for _ in 0..5 {
            game.step();
        }
        // left, left, right, idle, right
        assert_eq!(game.engine().player_column(), 10);

        let mut game = quiet_loop(ScriptedKeys::typed("aaz"));
        for _ in 0..3 {
            game.step();
        }
        assert_eq!(game.engine().player_column(), 8);
    }

    #[test]
    fn quit_key_stops_after_the_tick() {
        let mut game = quiet_loop(ScriptedKeys::typed(".Q"));
        assert_eq!(game.step(), None);
        assert_eq!(game.step(), Some(Outcome::Quit));
        assert_eq!(game.engine().score(), 2);
        assert_eq!(game.pacer().delays.len(), 2);
    }

    #[test]
    fn keyboard_failures_are_not_fatal() {
        let mut game = quiet_loop(ScriptedKeys::new([
            KeyStep::Fail,
            KeyStep::Press('a'),
            KeyStep::Fail,
        ]));
        for _ in 0..3 {
            assert_eq!(game.step(), None);
        }
        assert_eq!(game.engine().score(), 3);
        assert_eq!(game.engine().player_column(), 9);
    }

    #[test]
    fn crash_ends_play() {
        // Spawn at column 10 every tick.
        let mut game = GameLoop::new(
            GameEngine::new(GameConfig::default(), SequenceRng::new(vec![0, 4])),
            ScriptedKeys::typed(""),
            RecordingScreen::default(),
            RecordingPacer::default(),
        );
        assert_eq!(game.play(), Outcome::Crashed);
        assert_eq!(game.ticks(), 15);
        assert_eq!(game.engine().score(), 14);
        assert_eq!(game.engine().speed_ms(), 95);
        // Once over, further steps do nothing.
        assert_eq!(game.step(), Some(Outcome::Crashed));
        assert_eq!(game.ticks(), 15);
    }

    #[test]
    fn farewell_lists_final_numbers() {
        let mut game = quiet_loop(ScriptedKeys::typed("x"));
        let summary = SessionSummary {
            outcome: Outcome::Quit,
            score: 37,
            speed_ms: 85,
            ticks: 37,
        };
        game.farewell(&summary);
        assert_eq!(
            game.screen().messages[0],
            vec![
                "Game Over!",
                "Final Score: 37",
                "Final Speed: 25mph",
                "Press any key to exit...",
            ]
        );
        assert_eq!(game.keys().remaining(), 0);
    }
}
