//! goodday - Terminal mood journal
//!
//! A command-line mood tracker that records subjective mood readings
//! (-10 to +10) with free-text context notes and derives per-day timelines
//! and multi-range behavioral insights from the accumulated log.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::GooddayError;
