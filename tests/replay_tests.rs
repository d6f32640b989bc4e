// Integration tests for trace playback

use bracketty::evaluate;
use bracketty::replay::{Replay, ReplayError};

#[test]
fn test_full_playback_of_unclosed_input() {
    let mut replay = Replay::new(evaluate("(()"));
    assert_eq!(replay.total(), 4);

    let mut indices = Vec::new();
    while let Ok(step) = replay.step_forward() {
        indices.push(step.index);
    }
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(replay.is_finished());
    assert_eq!(replay.revealed().len(), 4);
    assert_eq!(replay.current().unwrap().ch, None);
}

#[test]
fn test_rewind_and_jump() {
    let mut replay = Replay::new(evaluate("{()}[]"));
    replay.jump_to_end();
    assert_eq!(replay.position(), 6);
    assert_eq!(replay.step_forward().unwrap_err(), ReplayError::AtEnd);

    replay.rewind_to_start();
    assert!(replay.current().is_none());
    assert_eq!(replay.step_backward(), Err(ReplayError::AtStart));
}

#[test]
fn test_current_tracks_cursor() {
    let mut replay = Replay::new(evaluate("[x]"));
    replay.step_forward_by(2);
    let current = replay.current().unwrap();
    assert_eq!(current.ch, Some('x'));
    assert_eq!(current.stack_snapshot, vec!['[']);

    replay.step_backward().unwrap();
    assert_eq!(replay.current().unwrap().ch, Some('['));
}

#[test]
fn test_replay_errors_display() {
    assert_eq!(
        ReplayError::AtEnd.to_string(),
        "Already at the end of the trace"
    );
    assert_eq!(
        ReplayError::AtStart.to_string(),
        "Already at the beginning of the trace"
    );
}
