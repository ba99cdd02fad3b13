//! Whole sessions driven headless: scripted keys, recorded screens, no sleeping

use std::time::Duration;

use tui_racer::core::{GameConfig, GameEngine, SequenceRng};
use tui_racer::input::ScriptedKeys;
use tui_racer::runner::{GameLoop, Outcome, RecordingPacer, WELCOME};
use tui_racer::term::RecordingScreen;

fn engine(rolls: Vec<u32>) -> GameEngine<SequenceRng> {
    GameEngine::new(GameConfig::default(), SequenceRng::new(rolls))
}

#[test]
fn quit_session_shows_welcome_play_and_final_screen() {
    let mut screen = RecordingScreen::default();
    let mut pacer = RecordingPacer::default();

    // Space starts the game, then: left, four idle ticks, quit.
    let summary = GameLoop::new(
        engine(vec![1]),
        ScriptedKeys::typed(" a....q"),
        &mut screen,
        &mut pacer,
    )
    .run();

    assert_eq!(summary.outcome, Outcome::Quit);
    assert_eq!(summary.score, 6);
    assert_eq!(summary.ticks, 6);
    assert_eq!(summary.speed_display(), 10);

    assert_eq!(screen.messages.len(), 2);
    assert_eq!(screen.messages[0], WELCOME.to_vec());
    assert_eq!(
        screen.messages[1],
        vec![
            "Game Over!",
            "Final Score: 6",
            "Final Speed: 10mph",
            "Press any key to exit...",
        ]
    );

    assert_eq!(screen.frames.len(), 6);
    let last = screen.last_frame().unwrap();
    assert!(last.starts_with("Score: 5 | Speed: 10mph\n"));
    // Car already moved one column left before the last frame.
    assert!(last.contains("\n     |   A     |    \n"));
    assert!(last.ends_with("Controls: A (left), D (right), Q (quit)\n"));

    assert_eq!(pacer.delays, vec![Duration::from_millis(100); 6]);
}

#[test]
fn crash_session_reports_final_numbers() {
    let mut screen = RecordingScreen::default();
    let mut pacer = RecordingPacer::default();

    // Every tick spawns an obstacle straight above the car; the keyboard
    // script is empty so both "press any key" waits fail and carry on.
    let summary = GameLoop::new(
        engine(vec![0, 4]),
        ScriptedKeys::typed(""),
        &mut screen,
        &mut pacer,
    )
    .run();

    assert_eq!(summary.outcome, Outcome::Crashed);
    assert_eq!(summary.ticks, 15);
    assert_eq!(summary.score, 14);
    assert_eq!(summary.speed_ms, 95);

    assert_eq!(screen.frames.len(), 15);
    assert_eq!(
        screen.messages.last().unwrap(),
        &vec![
            "Game Over!".to_string(),
            "Final Score: 14".to_string(),
            "Final Speed: 15mph".to_string(),
            "Press any key to exit...".to_string(),
        ]
    );

    let mut expected = vec![Duration::from_millis(100); 9];
    expected.extend([Duration::from_millis(95); 6]);
    assert_eq!(pacer.delays, expected);
}

#[test]
fn keys_typed_after_a_crash_wait_for_the_final_screen() {
    // Car crashes on tick 15; the 'x' typed for that tick must be left for the
    // "press any key to exit" wait rather than consumed by the tick.
    let script = format!(" {}x", ".".repeat(14));
    let mut game = GameLoop::new(
        engine(vec![0, 4]),
        ScriptedKeys::typed(&script),
        RecordingScreen::default(),
        RecordingPacer::default(),
    );

    let summary = game.run();
    assert_eq!(summary.outcome, Outcome::Crashed);
    assert_eq!(game.keys().polls(), 14);
    assert_eq!(game.keys().remaining(), 0);
}

#[test]
fn non_steering_keys_keep_the_car_in_place() {
    let mut game = GameLoop::new(
        engine(vec![1]),
        ScriptedKeys::typed("\0zx1 "),
        RecordingScreen::default(),
        RecordingPacer::default(),
    );

    for _ in 0..4 {
        assert_eq!(game.step(), None);
    }
    assert_eq!(game.engine().player_column(), 10);
    assert_eq!(game.engine().score(), 4);
}
