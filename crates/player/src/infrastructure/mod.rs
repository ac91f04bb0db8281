//! Infrastructure adapters for the platform ports

pub mod platform;
