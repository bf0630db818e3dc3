// src/replay.rs
//! Stepwise replay of a seek plan.
//!
//! A [`Replay`] turns a finished [`SeekPlan`] into one [`MoveEvent`] per
//! serviced request. It computes what each step looks like and leaves
//! pacing to the caller: a renderer can pull an event, draw it, wait, and
//! pull the next, or stop pulling at any point. Nothing needs cleaning up
//! when a replay is abandoned part way.

use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::plan::SeekPlan;

/// Default head travel cost per cylinder.
pub const DEFAULT_MS_PER_CYLINDER: f64 = 0.5;

/// One head movement, ready to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvent {
    /// 1-based position in the plan's visit order.
    pub index: usize,
    /// Cylinder the head left.
    pub origin: u32,
    /// Cylinder the head arrived at.
    pub target: u32,
    pub step_distance: u64,
    pub step_latency_ms: f64,
    /// Distance travelled up to and including this step.
    pub cumulative_seek: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Idle,
    /// The event with this 1-based index was the last one emitted and
    /// more remain.
    Emitting { index: usize },
    Done,
}

/// Where a replay stands between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayCursor {
    /// 0-based index of the next entry to service.
    pub next: usize,
    pub position: u32,
    pub cumulative_seek: u64,
}

impl ReplayCursor {
    pub fn start(head: u32) -> Self {
        ReplayCursor { next: 0, position: head, cumulative_seek: 0 }
    }
}

/// Computes the step after `cursor` without touching any state.
///
/// Returns `None` once every entry of `visit_order` has been serviced.
pub fn advance(
    visit_order: &[u32],
    cursor: ReplayCursor,
    ms_per_cylinder: f64,
) -> Option<(MoveEvent, ReplayCursor)> {
    let target = *visit_order.get(cursor.next)?;
    let step_distance = u64::from(cursor.position.abs_diff(target));
    let cumulative_seek = cursor.cumulative_seek + step_distance;

    let event = MoveEvent {
        index: cursor.next + 1,
        origin: cursor.position,
        target,
        step_distance,
        step_latency_ms: step_distance as f64 * ms_per_cylinder,
        cumulative_seek,
    };
    let cursor = ReplayCursor { next: cursor.next + 1, position: target, cumulative_seek };
    Some((event, cursor))
}

/// Lazy, forward-only sequence of [`MoveEvent`]s over a plan.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    visit_order: &'a [u32],
    head: u32,
    ms_per_cylinder: f64,
    cursor: ReplayCursor,
    state: ReplayState,
}

/// Starts a replay of `plan` from `head`.
///
/// Never fails. `ms_per_cylinder` is trusted as given; use
/// [`Replay::checked`] for values that came from outside.
pub fn replay(plan: &SeekPlan, head: u32, ms_per_cylinder: f64) -> Replay<'_> {
    Replay {
        visit_order: plan.visit_order(),
        head,
        ms_per_cylinder,
        cursor: ReplayCursor::start(head),
        state: ReplayState::Idle,
    }
}

impl<'a> Replay<'a> {
    /// Starts a replay from the plan's own head, rejecting latencies that
    /// are negative or not finite.
    pub fn checked(plan: &'a SeekPlan, ms_per_cylinder: f64) -> Result<Self> {
        validate_latency(ms_per_cylinder)?;
        Ok(replay(plan, plan.head(), ms_per_cylinder))
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// A fresh replay over the same inputs, back in `Idle`.
    pub fn restart(&self) -> Replay<'a> {
        Replay {
            cursor: ReplayCursor::start(self.head),
            state: ReplayState::Idle,
            ..self.clone()
        }
    }

    /// Emits the next event, moving `Idle -> Emitting -> Done`.
    pub fn step(&mut self) -> Option<MoveEvent> {
        if self.state == ReplayState::Done {
            return None;
        }

        match advance(self.visit_order, self.cursor, self.ms_per_cylinder) {
            Some((event, cursor)) => {
                self.cursor = cursor;
                self.state = if cursor.next == self.visit_order.len() {
                    ReplayState::Done
                } else {
                    ReplayState::Emitting { index: event.index }
                };
                debug!(
                    index = event.index,
                    target = event.target,
                    distance = event.step_distance,
                    cumulative = event.cumulative_seek,
                    "replay step"
                );
                Some(event)
            }
            None => {
                self.state = ReplayState::Done;
                None
            }
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = MoveEvent;

    fn next(&mut self) -> Option<MoveEvent> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            ReplayState::Done => 0,
            _ => self.visit_order.len() - self.cursor.next,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl FusedIterator for Replay<'_> {}

pub fn validate_latency(ms_per_cylinder: f64) -> Result<()> {
    if ms_per_cylinder.is_finite() && ms_per_cylinder >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidLatency { ms_per_cylinder })
    }
}
