//! Controller layer: screen-flow events and reducer-like state transitions.

pub mod events;
pub mod reducer;
