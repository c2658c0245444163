//! Parsing and validation of `callbuilder.toml` manifests.
//!
//! A manifest lists inherent impl blocks and their functions. Functions
//! carrying a `call_builder` table are the ones builders are generated for.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::*;
