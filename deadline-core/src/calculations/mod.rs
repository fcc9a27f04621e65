//! Deadline calculation engine.
//!
//! The engine is split the way the calculation actually proceeds: the
//! [`walker`] counts days off one at a time, the [`rollover`] resolver
//! nudges an end date off a weekend or holiday, and [`engine`] assembles
//! both into a [`crate::models::CalculationResult`].

pub mod common;
pub mod engine;
pub mod rollover;
pub mod walker;

pub use engine::DeadlineCalculator;
pub use rollover::RolloverOutcome;
pub use walker::WalkOutcome;
