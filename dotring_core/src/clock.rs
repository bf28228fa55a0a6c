// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Play/pause clock for the animation.
//!
//! [`AnimationClock`] tracks how much play time has accumulated. While
//! playing, `elapsed = now - origin`; pausing freezes `elapsed`; resuming
//! moves the origin to `now - elapsed` so playback continues from the paused
//! phase.
//!
//! `elapsed` is stored unwrapped. It only shrinks on [`reset`].
//!
//! [`reset`]: AnimationClock::reset

use crate::time::{Duration, HostTime};

/// Playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    /// Time is frozen.
    #[default]
    Stopped,
    /// Time advances with the host clock.
    Playing,
}

/// Accumulated play time and playback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationClock {
    state: PlayState,
    /// Play time banked before the current play segment.
    banked: Duration,
    /// Host time at which the current play segment began.
    resumed_at: HostTime,
}

impl AnimationClock {
    /// A stopped clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PlayState::Stopped,
            banked: Duration::ZERO,
            resumed_at: HostTime(0),
        }
    }

    /// Current playback state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> PlayState {
        self.state
    }

    /// Returns `true` while playing.
    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing)
    }

    /// Play time at host time `now`.
    ///
    /// This is a pure read: querying twice with the same `now` gives the same
    /// answer. A `now` earlier than the start of the current play segment
    /// counts as no progress.
    #[must_use]
    pub const fn elapsed(&self, now: HostTime) -> Duration {
        match self.state {
            PlayState::Stopped => self.banked,
            PlayState::Playing => self
                .banked
                .saturating_add(now.saturating_duration_since(self.resumed_at)),
        }
    }

    /// Host time that corresponds to zero play time, if it is representable.
    ///
    /// Only meaningful while playing.
    #[must_use]
    pub const fn origin(&self) -> Option<HostTime> {
        match self.state {
            PlayState::Playing => self.resumed_at.checked_sub(self.banked),
            PlayState::Stopped => None,
        }
    }

    /// Starts or resumes playback at `now`, keeping accumulated play time.
    ///
    /// Starting an already playing clock re-anchors it without losing time.
    pub fn start(&mut self, now: HostTime) {
        self.banked = self.elapsed(now);
        self.resumed_at = now;
        self.state = PlayState::Playing;
    }

    /// Pauses at `now`, freezing the accumulated play time.
    pub fn stop(&mut self, now: HostTime) {
        self.banked = self.elapsed(now);
        self.state = PlayState::Stopped;
    }

    /// Stops and rewinds to zero.
    pub fn reset(&mut self, now: HostTime) {
        self.stop(now);
        self.banked = Duration::ZERO;
    }
}
