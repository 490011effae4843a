//! # SC2 Clips Common
//!
//! Shared types, utilities, and common functionality for the SC2 Clips Bot.
//!
//! This crate provides the foundational id types, timestamp helpers and
//! logging setup used across all other crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use types::*;
pub use utils::*;
