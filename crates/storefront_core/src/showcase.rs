use std::time::{Duration, Instant};

use shared::{domain::Product, error::StorefrontError};
use tracing::debug;

/// Fixed time between accepting a navigation intent and committing the
/// resulting index change.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: usize,
    direction: Direction,
    completes_at: Instant,
}

/// Two-layer hero carousel state. While a transition is in flight the view
/// renders both the settled item and the incoming one; the index commit
/// happens here, exactly once, when `poll` observes the deadline. Dropping
/// the controller drops the pending record with it, so nothing can commit
/// after teardown.
#[derive(Debug)]
pub struct ShowcaseController {
    items: Vec<Product>,
    current: usize,
    pending: Option<PendingTransition>,
}

impl ShowcaseController {
    pub fn new(items: Vec<Product>) -> Result<Self, StorefrontError> {
        if items.is_empty() {
            return Err(StorefrontError::EmptyCatalog);
        }
        Ok(Self {
            items,
            current: 0,
            pending: None,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &Product {
        &self.items[self.current]
    }

    /// Target of the in-flight transition, if any.
    pub fn incoming_index(&self) -> Option<usize> {
        self.pending.map(|p| p.target)
    }

    pub fn incoming_item(&self) -> Option<&Product> {
        self.pending.map(|p| &self.items[p.target])
    }

    pub fn direction(&self) -> Option<Direction> {
        self.pending.map(|p| p.direction)
    }

    /// Returns true when the intent was accepted.
    pub fn request_next(&mut self, now: Instant) -> bool {
        let target = (self.current + 1) % self.items.len();
        self.begin(target, Direction::Forward, now)
    }

    pub fn request_previous(&mut self, now: Instant) -> bool {
        let n = self.items.len();
        let target = (self.current + n - 1) % n;
        self.begin(target, Direction::Backward, now)
    }

    /// `target` only ever comes from the indicator row, so an out-of-range
    /// value is a caller bug, not a runtime condition.
    pub fn request_goto(&mut self, target: usize, now: Instant) -> bool {
        assert!(
            target < self.items.len(),
            "showcase index {target} out of range for {} items",
            self.items.len()
        );
        // Direction follows plain index order, not the shortest circular
        // path: jumping from the first dot to the last animates Backward.
        // TODO: confirm whether wrap jumps should take the shortest path.
        let direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(target, direction, now)
    }

    fn begin(&mut self, target: usize, direction: Direction, now: Instant) -> bool {
        // Intents during a transition are dropped, never queued. A
        // self-target (one-item catalog) never starts a transition either.
        if self.pending.is_some() || target == self.current {
            return false;
        }
        debug!(
            "showcase: transition accepted from={} to={target} direction={direction:?}",
            self.current
        );
        self.pending = Some(PendingTransition {
            target,
            direction,
            completes_at: now + TRANSITION_DURATION,
        });
        true
    }

    /// Commits the pending transition once its deadline has passed. Returns
    /// true on the call that committed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(p) if now >= p.completes_at => {
                self.current = p.target;
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// 0.0 at acceptance, 1.0 at and after the commit deadline.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.pending {
            Some(p) => {
                let remaining = p.completes_at.saturating_duration_since(now);
                1.0 - (remaining.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }

    pub fn time_until_completion(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.completes_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "tests/showcase_tests.rs"]
mod tests;
