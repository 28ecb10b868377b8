//! Step-by-step waypoint tour.
//!
//! The tour is a plain state machine. Something outside the core (a timer, a
//! frame loop, a test) calls `advance()` once per step and applies the pause
//! between steps. A `CancelToken` handed to that scheduler stops the tour
//! from any thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{info, warn};

use crate::config::NavConfig;
use crate::name::{SortByName, filter_by_prefix};
use crate::scene::{SceneObject, SceneProvider};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourState {
    /// Not started yet.
    Idle,
    /// Showing waypoint `current_index`; `remaining` waypoints come after it.
    Touring {
        current_index: usize,
        remaining: usize,
    },
    Finished,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Tour {
    waypoints: Vec<SceneObject>,
    state: TourState,
    token: CancelToken,
    step_delay: Duration,
}

impl Tour {
    pub fn new(waypoints: Vec<SceneObject>, step_delay: Duration) -> Self {
        Self {
            waypoints,
            state: TourState::Idle,
            token: CancelToken::new(),
            step_delay,
        }
    }

    /// Creates a tour over the scene's waypoints, visited in name order.
    pub fn from_scene<P: SceneProvider>(provider: &P, config: &NavConfig) -> Self {
        let mut waypoints = filter_by_prefix(&provider.snapshot(), &config.tour_prefix);
        waypoints.as_mut_slice().sort_by_name();
        Self::new(waypoints, config.tour_step_delay())
    }

    pub fn waypoints(&self) -> &[SceneObject] {
        &self.waypoints
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    /// Pause the scheduler should apply between calls to `advance()`.
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Returns a token that cancels this tour.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Waypoint currently shown, if touring.
    pub fn current(&self) -> Option<&SceneObject> {
        match self.state {
            TourState::Touring { current_index, .. } => self.waypoints.get(current_index),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, TourState::Finished | TourState::Cancelled)
    }

    /// Starts the tour if idle and returns the waypoint being shown.
    pub fn start(&mut self) -> Option<&SceneObject> {
        if self.state == TourState::Idle {
            self.advance()
        } else {
            self.current()
        }
    }

    /// Moves to the next waypoint and returns it.
    ///
    /// Returns `None` once the tour is finished or cancelled.
    pub fn advance(&mut self) -> Option<&SceneObject> {
        if self.token.is_cancelled() && !self.is_done() {
            warn!(state = ?self.state, "Tour cancelled");
            self.state = TourState::Cancelled;
        }

        let len = self.waypoints.len();
        self.state = match self.state {
            TourState::Idle if len > 0 => TourState::Touring {
                current_index: 0,
                remaining: len - 1,
            },
            TourState::Idle => TourState::Finished,
            TourState::Touring { current_index, .. } if current_index + 1 < len => {
                TourState::Touring {
                    current_index: current_index + 1,
                    remaining: len - current_index - 2,
                }
            }
            TourState::Touring { .. } => {
                info!(waypoints = len, "Tour finished");
                TourState::Finished
            }
            done => done,
        };

        let current = self.current();
        if let Some(waypoint) = current {
            info!(id = %waypoint.id, position = %waypoint.position, "Tour step");
        }
        current
    }

    /// Cancels the tour. A finished tour stays finished.
    pub fn cancel(&mut self) {
        self.token.cancel();
        if self.state != TourState::Finished {
            self.state = TourState::Cancelled;
        }
    }
}
