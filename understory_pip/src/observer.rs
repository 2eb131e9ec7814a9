// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications emitted by [`PipState`](crate::PipState).
//!
//! The state machine calls [`PipObserver::notify`] after every mutation, so a
//! host can redraw (and animate) without polling. Live gesture samples produce
//! [`PipEvent::Preview`]; gesture ends produce a commit or rejection event
//! followed by a final preview carrying the reset transient values.

use alloc::vec::Vec;

use crate::corner::Corner;
use crate::size::SizeLevel;
use crate::state::PipTransient;

/// A single state change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PipEvent {
    /// The in-flight visual feedback changed.
    Preview(PipTransient),
    /// A pinch ended on a different size level.
    SizeCommitted {
        /// Level before the pinch.
        from: SizeLevel,
        /// Level after the pinch.
        to: SizeLevel,
    },
    /// A drag ended on a different, enabled corner.
    CornerCommitted {
        /// Corner before the drag.
        from: Corner,
        /// Corner after the drag.
        to: Corner,
    },
    /// A drag ended nearest a corner that is not enabled; the overlay stays put.
    CornerRejected {
        /// The corner the overlay remains docked at.
        current: Corner,
        /// The disabled corner the drag pointed to.
        candidate: Corner,
    },
}

/// A sink for [`PipEvent`]s.
pub trait PipObserver {
    /// Called after the state machine mutated.
    fn notify(&mut self, event: PipEvent);
}

impl PipObserver for () {
    fn notify(&mut self, _event: PipEvent) {}
}

impl<O: PipObserver + ?Sized> PipObserver for &mut O {
    fn notify(&mut self, event: PipEvent) {
        (**self).notify(event);
    }
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<PipEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PipEvent] {
        &self.events
    }

    /// Returns only the commit and rejection events, oldest first.
    pub fn decisions(&self) -> impl Iterator<Item = &PipEvent> + '_ {
        self.events
            .iter()
            .filter(|event| !matches!(event, PipEvent::Preview(_)))
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<PipEvent> {
        core::mem::take(&mut self.events)
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PipObserver for EventLog {
    fn notify(&mut self, event: PipEvent) {
        self.events.push(event);
    }
}
