// tests/unit_animator.rs
//! Playback state machine, step clamping, and timer-run supersession.

use graphscout_core::animator::{highlight, Animator, PlaybackState};
use graphscout_core::model::{Edge, EntityKind, Node, RelationKind};
use graphscout_core::paths::PathResult;

fn chain_path(ids: &[&str]) -> PathResult {
    let path: Vec<String> = ids.iter().map(ToString::to_string).collect();
    let nodes = ids
        .iter()
        .map(|id| Node::new(*id, id.to_string(), EntityKind::Drug))
        .collect();
    let edges = ids
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Edge::new(format!("PE{i}"), pair[0], pair[1], RelationKind::Interacts))
        .collect();
    PathResult::from_walk(path, nodes, edges)
}

#[test]
fn test_load_with_results_is_ready_at_step_zero() {
    // Two candidate paths of lengths 3 and 4: first is selected by default.
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C", "D"]), chain_path(&["A", "X", "Y", "Z", "B"])]);
    assert_eq!(a.state(), PlaybackState::Ready);
    assert_eq!(a.selected_index(), 0);
    assert_eq!(a.current_step(), 0);
    assert_eq!(a.selected_path().map(|p| p.length), Some(3));
}

#[test]
fn test_load_empty_stays_idle() {
    let mut a = Animator::new(100);
    a.load(vec![]);
    assert_eq!(a.state(), PlaybackState::Idle);
    assert!(a.current_highlight().is_none());
}

#[test]
fn test_play_on_single_node_path_completes_immediately() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A"])]);
    let token = a.play();
    assert!(token.is_none(), "no timer run should start");
    assert_eq!(a.state(), PlaybackState::Complete);
}

#[test]
fn test_tick_advances_to_complete() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C"])]);
    let token = a.play().expect("playable");
    assert_eq!(a.state(), PlaybackState::Playing);

    assert!(a.tick(token), "one hop remains after the first tick");
    assert_eq!(a.current_step(), 1);

    assert!(!a.tick(token), "reaching the final step ends the run");
    assert_eq!(a.current_step(), 2);
    assert_eq!(a.state(), PlaybackState::Complete);

    assert!(!a.tick(token), "ticks after completion are no-ops");
    assert_eq!(a.current_step(), 2);
}

#[test]
fn test_pause_and_resume() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C", "D"])]);
    let token = a.play().expect("playable");
    a.tick(token);
    a.pause();
    assert_eq!(a.state(), PlaybackState::Paused);
    assert_eq!(a.current_step(), 1);

    let resumed = a.play().expect("resumable from paused");
    assert!(a.tick(resumed));
    assert_eq!(a.current_step(), 2);
}

#[test]
fn test_stale_token_is_ignored() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C", "D"])]);
    let old = a.play().expect("playable");
    a.pause();
    let fresh = a.play().expect("playable again");

    assert!(!a.tick(old), "a tick from the superseded run advances nothing");
    assert_eq!(a.current_step(), 0);

    assert!(a.tick(fresh));
    assert_eq!(a.current_step(), 1);
}

#[test]
fn test_go_to_step_clamps_into_bounds() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C", "D"])]);

    a.go_to_step(-5);
    assert_eq!(a.current_step(), 0);
    assert_eq!(a.state(), PlaybackState::Paused);

    a.go_to_step(99);
    assert_eq!(a.current_step(), 3, "clamped to the final step");
    assert_eq!(a.state(), PlaybackState::Complete);

    a.go_to_step(1);
    assert_eq!(a.current_step(), 1);
    assert_eq!(a.state(), PlaybackState::Paused);
}

#[test]
fn test_go_to_step_cancels_a_running_timer() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C", "D"])]);
    let token = a.play().expect("playable");

    a.go_to_step(2);
    assert!(!a.tick(token), "seek supersedes the running timer");
    assert_eq!(a.current_step(), 2);
}

#[test]
fn test_select_path_rewinds_to_ready() {
    let mut a = Animator::new(100);
    a.load(vec![chain_path(&["A", "B", "C"]), chain_path(&["A", "X", "B"])]);
    let token = a.play().expect("playable");
    a.tick(token);

    a.select_path(1);
    assert_eq!(a.selected_index(), 1);
    assert_eq!(a.current_step(), 0);
    assert_eq!(a.state(), PlaybackState::Ready);
    assert!(!a.tick(token), "switching paths cancels the old timer run");

    a.select_path(7);
    assert_eq!(a.selected_index(), 1, "out-of-range selection is ignored");
}

#[test]
fn test_highlight_is_pure_and_prefix_shaped() {
    let p = chain_path(&["A", "B", "C", "D"]);

    let h0 = highlight(&p, 0);
    assert_eq!(h0.node_ids.len(), 1);
    assert!(h0.edge_ids.is_empty(), "no edge is active at step 0");

    let h2 = highlight(&p, 2);
    assert_eq!(h2.node_ids.len(), 3, "nodes at positions <= step are active");
    assert_eq!(h2.edge_ids.len(), 2, "edges at indices < step are active");
    assert!(h2.node_ids.contains("C"));
    assert!(!h2.node_ids.contains("D"));

    assert_eq!(highlight(&p, 2), highlight(&p, 2), "pure function of (path, step)");
    assert_eq!(
        highlight(&p, 99).node_ids.len(),
        4,
        "steps beyond the end clamp to the full path"
    );
}

#[tokio::test]
async fn test_drive_runs_to_completion() {
    let mut a = Animator::new(1);
    a.load(vec![chain_path(&["A", "B", "C", "D"])]);
    a.drive().await;
    assert_eq!(a.state(), PlaybackState::Complete);
    assert_eq!(a.current_step(), 3);
}
