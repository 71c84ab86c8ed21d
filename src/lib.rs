//! Solve scalar root-finding problems.
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
#[macro_use]
pub mod console;

pub mod newton;
pub mod problem;

mod status;
pub use crate::status::{Status, StatusCode};

mod time;
