//! Collision subsystem errors
//!
//! Only the setup surface (creating colliders, changing their shapes) can
//! fail. The detection pass itself never returns an error.

use crate::foundation::collections::ColliderHandle;

/// Errors raised by collider management
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// The handle does not refer to a live collider
    #[error("Unknown collider: {0:?}")]
    UnknownCollider(ColliderHandle),

    /// Shape parameters are not usable for intersection tests
    #[error("Invalid collision shape: {0}")]
    InvalidShape(String),
}

/// Convenience alias for collision results
pub type CollisionResult<T> = Result<T, CollisionError>;
