//! Turn events and the presentation seam.
//!
//! ## Key Components
//!
//! - [`TurnEvent`]: one observable step of a roll resolution
//! - [`Threat`]: what a shield blocked
//! - [`EventSink`]: live observer called between resolution steps
//!
//! The engine never draws, plays sounds, or waits. It emits events in
//! order; the host decides how long each one stays on screen.

mod event;
mod sink;

pub use event::{Threat, TurnEvent};
pub use sink::{EventSink, NullSink};
