//! Application layer - session state and use cases between the layouts
//! and the domain model

pub mod dto;
pub mod services;
