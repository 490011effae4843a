//! # SC2 Clips Gate
//!
//! Upload gating for the clips channel.
//!
//! The [`CooldownStore`] keeps the last accepted upload of every user in a
//! JSON file. The [`UploadGate`] decides whether a message in the clips
//! channel is rejected for its file type, rejected for an active cooldown, or
//! accepted. Side effects go through the [`ChatActions`] seam so the decision
//! and its fallbacks can be exercised without a Discord connection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod error;
pub mod gate;
pub mod notice;
pub mod policy;
pub mod store;

pub use actions::*;
pub use error::*;
pub use gate::*;
pub use notice::*;
pub use policy::*;
pub use store::*;
