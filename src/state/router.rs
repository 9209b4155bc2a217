//! Page router with a fade transition.
//!
//! Navigation hides the content, waits for the transition delay, then swaps
//! the page. The pending transition is a deadline checked on every tick, so
//! a newer request simply replaces it.

use super::navigation::Page;
use log::*;
use std::time::{Duration, Instant};

/// A page swap waiting for its deadline.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Page,
    pub deadline: Instant,
}

/// Holds the current page and at most one pending transition.
///
#[derive(Debug, Clone)]
pub struct Router {
    current: Page,
    pending: Option<Transition>,
    delay: Duration,
}

impl Router {
    /// Return a router on the home page.
    ///
    pub fn new(delay: Duration) -> Self {
        Router {
            current: Page::Home,
            pending: None,
            delay,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Whether the content is faded out.
    ///
    pub fn is_hidden(&self) -> bool {
        self.pending.is_some()
    }

    /// Request the target page. Returns true if a transition was scheduled.
    ///
    /// Asking for the current page cancels any pending transition instead.
    /// Asking again inside the transition window restarts the timer toward
    /// the newest target.
    ///
    pub fn navigate(&mut self, target: Page, now: Instant) -> bool {
        if target == self.current {
            if let Some(dropped) = self.pending.take() {
                debug!(
                    "Cancelled transition to {:?}; staying on {:?}.",
                    dropped.target, self.current
                );
            }
            return false;
        }

        if let Some(superseded) = self.pending {
            debug!(
                "Transition to {:?} superseded by {:?}.",
                superseded.target, target
            );
        }
        self.pending = Some(Transition {
            target,
            deadline: now + self.delay,
        });
        true
    }

    /// Complete the pending transition once its deadline has passed.
    /// Returns the page that was left.
    ///
    pub fn tick(&mut self, now: Instant) -> Option<Page> {
        match self.pending {
            Some(transition) if now >= transition.deadline => {
                self.pending = None;
                let left = self.current;
                self.current = transition.target;
                Some(left)
            }
            _ => None,
        }
    }
}
