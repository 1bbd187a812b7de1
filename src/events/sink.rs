//! Event delivery to a presentation host.

use crate::core::Session;

use super::TurnEvent;

/// Receives turn events as they happen.
///
/// The session passed alongside each event is the state right after that
/// event was applied. It is borrowed shared, so a sink can render from it
/// but never change it mid-resolution.
pub trait EventSink {
    /// Called once per event, in chronological order.
    fn on_event(&mut self, event: &TurnEvent, session: &Session);
}

/// Collects events for later replay.
impl EventSink for Vec<TurnEvent> {
    fn on_event(&mut self, event: &TurnEvent, _session: &Session) {
        self.push(*event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &TurnEvent, _session: &Session) {}
}

/// Forward both to `A` then `B`.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn on_event(&mut self, event: &TurnEvent, session: &Session) {
        self.0.on_event(event, session);
        self.1.on_event(event, session);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: &TurnEvent, session: &Session) {
        (**self).on_event(event, session);
    }
}
