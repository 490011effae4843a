//! # SC2 Clips Bot
//!
//! Discord bot that keeps a clips channel limited to StarCraft II replays,
//! one per user per cooldown window.
//!
//! This is the main binary crate that orchestrates the application lifecycle:
//! loading the cooldown store, building the Poise framework, connecting to
//! Discord and shutting down on Ctrl-C.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
