//! Console reporting: typed events, the actor that serializes them, and sinks.

pub mod actor;
pub mod event;
pub mod sink;

pub use actor::*;
pub use event::*;
pub use sink::*;
