//! # SC2 Clips Config
//!
//! Type-safe configuration management for the SC2 Clips Bot.
//!
//! This crate provides the configuration schema, its defaults, and loading
//! from YAML files with environment variable overrides.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
