//! Platform abstraction layer
//!
//! The simulation never reads devices or draws. A platform front end turns
//! device events into [`TickInput`](crate::sim::TickInput) intents, drives a
//! [`FixedStepClock`](crate::sim::FixedStepClock) from display refreshes, and
//! reads back HUD text, overlay calls and snapshots.

#[cfg(target_arch = "wasm32")]
pub mod web;
