//! # Core Engine Module
//!
//! Shared abstractions that the collision subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Startup configuration for the collision core
//! - **Foundation**: Low-level utilities (math, handles, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    AttributeEntry,
    CollisionConfig,
    Config,
    ConfigError,
};
