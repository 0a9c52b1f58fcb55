// src/animator.rs
//! Step-wise playback over discovered paths.
//!
//! The state machine is synchronous and deterministic; timing lives in
//! [`Animator::drive`], which sleeps between ticks. Every control action
//! that should cancel a pending advance (`pause`, `go_to_step`,
//! `select_path`, a fresh `play`) bumps an epoch counter, and a tick
//! carrying a stale epoch is ignored. That keeps two overlapping advance
//! loops from ever both making progress.

use std::collections::HashSet;
use std::time::Duration;

use crate::model::{EdgeId, NodeId};
use crate::paths::PathResult;

/// Playback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No path results loaded.
    Idle,
    /// Results loaded, positioned at step 0, not advancing.
    Ready,
    /// Auto-advancing one step per interval.
    Playing,
    /// Stopped mid-path.
    Paused,
    /// Positioned at the final step.
    Complete,
}

/// Handle identifying one playback run; ticks from a superseded run are
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Per-step highlight set, a pure function of `(path, step)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub node_ids: HashSet<NodeId>,
    pub edge_ids: HashSet<EdgeId>,
}

/// Nodes at path positions `0..=step` and edges at indices `< step` are
/// active; everything else is dimmed.
#[must_use]
pub fn highlight(path: &PathResult, step: usize) -> Highlight {
    let step = step.min(path.last_step());
    let node_ids = path.path.iter().take(step + 1).cloned().collect();
    let edge_ids = path.edges.iter().take(step).map(|e| e.id.clone()).collect();
    Highlight { node_ids, edge_ids }
}

/// Holds the loaded path results and the playback cursor.
#[derive(Debug)]
pub struct Animator {
    results: Vec<PathResult>,
    selected: usize,
    step: usize,
    state: PlaybackState,
    speed: Duration,
    epoch: u64,
}

impl Animator {
    #[must_use]
    pub fn new(speed_ms: u64) -> Self {
        Self {
            results: Vec::new(),
            selected: 0,
            step: 0,
            state: PlaybackState::Idle,
            speed: Duration::from_millis(speed_ms),
            epoch: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn results(&self) -> &[PathResult] {
        &self.results
    }

    #[must_use]
    pub fn selected_path(&self) -> Option<&PathResult> {
        self.results.get(self.selected)
    }

    /// Loads fresh path results. With at least one result the animator is
    /// `Ready` at step 0 on the first (best-ranked) path; with none it
    /// stays `Idle` so the caller can surface an explicit no-path state.
    pub fn load(&mut self, results: Vec<PathResult>) {
        self.cancel_timer();
        self.results = results;
        self.selected = 0;
        self.step = 0;
        self.state = if self.results.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Ready
        };
    }

    /// Starts auto-advancing. Already at the final step, the animator goes
    /// straight to `Complete` and no timer run begins.
    pub fn play(&mut self) -> Option<TimerToken> {
        let last = self.results.get(self.selected)?.last_step();
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused => {}
            _ => return None,
        }
        if self.step >= last {
            self.state = PlaybackState::Complete;
            return None;
        }
        self.state = PlaybackState::Playing;
        self.epoch += 1;
        Some(TimerToken(self.epoch))
    }

    /// Advances one step for the given playback run. Returns `true` while
    /// further ticks should be scheduled; a stale token or a non-playing
    /// state advances nothing.
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if token.0 != self.epoch || self.state != PlaybackState::Playing {
            return false;
        }
        let last = match self.selected_path() {
            Some(p) => p.last_step(),
            None => return false,
        };
        self.step += 1;
        if self.step >= last {
            self.step = last;
            self.state = PlaybackState::Complete;
            return false;
        }
        true
    }

    /// Stops auto-advance, keeping the cursor where it is.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.cancel_timer();
            self.state = PlaybackState::Paused;
        }
    }

    /// Seeks to step `n`, clamped into `[0, last_step]`. Cancels any
    /// pending advance first, then lands in `Paused` (mid-path) or
    /// `Complete` (final step).
    pub fn go_to_step(&mut self, n: isize) {
        let Some(last) = self.selected_path().map(PathResult::last_step) else {
            return;
        };
        self.cancel_timer();
        #[allow(clippy::cast_sign_loss)]
        let clamped = n.clamp(0, last as isize) as usize;
        self.step = clamped;
        self.state = if clamped < last {
            PlaybackState::Paused
        } else {
            PlaybackState::Complete
        };
    }

    /// Switches to another candidate path, rewinding to step 0. Out-of-range
    /// indices are ignored.
    pub fn select_path(&mut self, index: usize) {
        if index >= self.results.len() {
            return;
        }
        self.cancel_timer();
        self.selected = index;
        self.step = 0;
        self.state = PlaybackState::Ready;
    }

    /// Highlight for the current cursor position, or `None` before any
    /// results are loaded.
    #[must_use]
    pub fn current_highlight(&self) -> Option<Highlight> {
        self.selected_path().map(|p| highlight(p, self.step))
    }

    /// Plays to completion, sleeping `speed_ms` between steps. Returns as
    /// soon as the run is superseded (a control call from elsewhere bumped
    /// the epoch) or the path completes.
    pub async fn drive(&mut self) {
        let Some(token) = self.play() else { return };
        loop {
            tokio::time::sleep(self.speed).await;
            if !self.tick(token) {
                break;
            }
        }
    }

    fn cancel_timer(&mut self) {
        self.epoch += 1;
    }
}
