//! Common utility functions shared by the domain model and the player adapters.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod parse;

// Re-export commonly used functions at crate root for convenience
pub use parse::{parse_prefix_int, parse_strict_int, saturate_i32, saturate_u32, ParsePolicy};
