//! The host environment the helper library runs against: one document,
//! its event listeners, a timer queue driven by an injectable clock, the
//! document ready state and the stylesheets used for custom properties.
//!
//! Everything is single-threaded. Listener and timer callbacks receive
//! `&mut Host`, so they may mutate the tree, add or remove listeners and
//! schedule further timers while they run.

mod clock;
mod error;
mod event;
mod host;
mod listeners;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::HostError;
pub use event::{Event, EventInit, EventPhase};
pub use host::{Host, HostConfig};
pub use listeners::{Listener, ListenerOptions};
pub use timers::TimerCallback;

pub use core_types::{ListenerId, NodeId, ReadyState, TimerId};
