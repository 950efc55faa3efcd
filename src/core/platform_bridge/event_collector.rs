//=========================================================================
// Event Collector
//=========================================================================
//
// Session-side receiver for host adapter events, drained between frames.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events() → TickControl
//
// Draining is bounded per call so a flood of input cannot starve the
// render loop. Events past the bound stay queued for the next call;
// nothing is dropped, merged or reordered.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;

//=== TickControl =========================================================

/// Render loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events with bounded draining.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<PlatformEvent>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 256;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(32),
        }
    }

    /// Moves pending events into the frame's list, in arrival order.
    ///
    /// Stops early after a close request so events queued behind it are
    /// not delivered to an engine that is shutting down.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();

        while self.events.len() < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::CloseRequested) => {
                    self.events.push(PlatformEvent::CloseRequested);
                    return TickControl::Exit;
                }
                Ok(event) => self.events.push(event),
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        warn!(
            target: "bridge::input",
            "Event queue backlog: {} events this frame, {} still queued",
            self.events.len(),
            self.receiver.len()
        );
        TickControl::Continue
    }

    /// Events collected by the last `collect_frame`.
    #[cfg(test)]
    pub(crate) fn events(&self) -> &[PlatformEvent] {
        &self.events
    }

    /// Takes ownership of collected events, leaving an empty list.
    pub(crate) fn take_events(&mut self) -> Vec<PlatformEvent> {
        std::mem::take(&mut self.events)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
