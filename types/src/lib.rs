//! Core domain types for Janken.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod hand;
mod judgement;
pub mod ui;

pub use hand::{Hand, HandParseError};
pub use judgement::{Judgement, Tally, judge};
