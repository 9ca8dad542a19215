use std::time::{Duration, Instant};

use stepviz_playback::{
    PlayState, Playback, DEFAULT_STEP_INTERVAL, MAX_STEP_INTERVAL, MIN_STEP_INTERVAL,
};

#[test]
fn cursor_clamps_at_both_boundaries() {
    let mut pb = Playback::new(vec!["a", "b", "c"]);
    assert_eq!(pb.cursor(), 0);
    assert_eq!(pb.state(), PlayState::Idle);

    assert!(!pb.previous());
    assert_eq!(pb.cursor(), 0);

    assert!(pb.next());
    assert!(pb.next());
    assert_eq!(pb.cursor(), 2);
    assert!(pb.at_end());

    assert!(!pb.next());
    assert_eq!(pb.cursor(), 2);

    assert!(pb.previous());
    assert_eq!(pb.cursor(), 1);
    assert_eq!(pb.current(), Some(&"b"));
}

#[test]
fn reset_returns_to_idle_at_zero() {
    let mut pb = Playback::new(vec![1, 2, 3]);
    pb.next();
    pb.play(Instant::now());
    pb.reset();
    assert_eq!(pb.cursor(), 0);
    assert_eq!(pb.state(), PlayState::Idle);
}

#[test]
fn play_on_single_step_sequence_parks_paused() {
    let mut pb = Playback::new(vec![42]);
    pb.play(Instant::now());
    assert_eq!(pb.state(), PlayState::Paused);
    assert_eq!(pb.cursor(), 0);
    // No deadline was scheduled, so a later poll does nothing.
    assert!(!pb.poll(Instant::now() + Duration::from_secs(5)));
}

#[test]
fn play_at_end_parks_paused() {
    let mut pb = Playback::new(vec![1, 2]);
    pb.next();
    assert!(pb.at_end());
    pb.play(Instant::now());
    assert_eq!(pb.state(), PlayState::Paused);
}

#[test]
fn poll_advances_on_the_deadline_and_pauses_at_the_end() {
    let t0 = Instant::now();
    let mut pb = Playback::with_interval(vec![1, 2, 3], Duration::from_millis(200));
    pb.play(t0);
    assert_eq!(pb.state(), PlayState::Playing);

    // Early ticks are no-ops.
    assert!(!pb.poll(t0));
    assert!(!pb.poll(t0 + Duration::from_millis(199)));
    assert_eq!(pb.cursor(), 0);

    // One advance per elapsed interval, one per call.
    assert!(pb.poll(t0 + Duration::from_millis(200)));
    assert_eq!(pb.cursor(), 1);
    assert_eq!(pb.state(), PlayState::Playing);

    assert!(pb.poll(t0 + Duration::from_millis(400)));
    assert_eq!(pb.cursor(), 2);
    // Terminal: reaching the last index pauses instead of looping.
    assert_eq!(pb.state(), PlayState::Paused);
    assert!(!pb.poll(t0 + Duration::from_millis(600)));
    assert_eq!(pb.cursor(), 2);
}

#[test]
fn pause_preserves_the_cursor_and_stops_ticks() {
    let t0 = Instant::now();
    let mut pb = Playback::with_interval(vec![1, 2, 3], Duration::from_millis(100));
    pb.play(t0);
    assert!(pb.poll(t0 + Duration::from_millis(100)));
    pb.pause();
    assert_eq!(pb.state(), PlayState::Paused);
    assert!(!pb.poll(t0 + Duration::from_secs(10)));
    assert_eq!(pb.cursor(), 1);
}

#[test]
fn interval_is_clamped_to_the_supported_range() {
    let pb = Playback::<u32>::with_interval(vec![1], Duration::from_millis(1));
    assert_eq!(pb.interval(), MIN_STEP_INTERVAL);

    let mut pb = Playback::new(vec![1, 2]);
    assert_eq!(pb.interval(), DEFAULT_STEP_INTERVAL);
    pb.set_interval(Duration::from_secs(60));
    assert_eq!(pb.interval(), MAX_STEP_INTERVAL);
    pb.set_interval(Duration::from_millis(250));
    assert_eq!(pb.interval(), Duration::from_millis(250));
}

#[test]
fn empty_sequence_is_inert() {
    let mut pb = Playback::<u32>::new(Vec::new());
    assert!(pb.is_empty());
    assert_eq!(pb.current(), None);
    assert!(!pb.next());
    assert!(!pb.previous());
    pb.play(Instant::now());
    assert_eq!(pb.state(), PlayState::Paused);
}
