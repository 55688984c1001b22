//! Core abstractions for stub generation
//!
//! This module defines the descriptor model and the traits that connect the
//! diagram parser to the target-language emitters.

pub mod chumsky_utils;
mod config;
mod database;
mod emitter;
mod error;
pub mod logging;
mod parser;
mod types;

pub use config::*;
pub use database::*;
pub use emitter::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use types::*;
