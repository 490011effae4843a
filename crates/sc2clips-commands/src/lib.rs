//! # SC2 Clips Commands
//!
//! Discord command implementations using the Poise framework for the SC2
//! Clips Bot.
//!
//! This crate wires the upload gate into Discord: the message handler that
//! gates the clips channel, the `rules`, `my_status` and `reset_user`
//! commands, private replies, and the Serenity implementation of the chat
//! actions the gate needs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod events;
pub mod framework;
pub mod my_status;
pub mod reply;
pub mod reset_user;
pub mod rules;

pub use actions::*;
pub use events::*;
pub use framework::*;
pub use reply::*;
