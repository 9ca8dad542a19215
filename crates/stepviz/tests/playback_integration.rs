//! A scene's trace driven through the playback controller, the way the UI
//! wires the two together.

use std::time::{Duration, Instant};

use stepviz::{AvlScene, Phase, PlayState, Playback};

#[test]
fn a_recorded_operation_plays_back_to_its_terminal_step() {
    let mut scene = AvlScene::new();
    let steps = scene.insert(10);
    let total = steps.len();

    let t0 = Instant::now();
    let mut pb = Playback::with_interval(steps, Duration::from_millis(100));
    assert_eq!(pb.current().unwrap().phase, Phase::Start);

    pb.play(t0);
    let mut now = t0;
    for _ in 0..total * 2 {
        now += Duration::from_millis(100);
        pb.poll(now);
    }

    assert_eq!(pb.state(), PlayState::Paused);
    assert_eq!(pb.cursor(), total - 1);
    assert_eq!(pb.current().unwrap().phase, Phase::Done);

    // Scrub back and forth over the frozen sequence.
    assert!(pb.previous());
    assert!(pb.next());
    assert!(!pb.next());

    pb.reset();
    assert_eq!(pb.current().unwrap().phase, Phase::Start);
    assert_eq!(pb.state(), PlayState::Idle);
}
