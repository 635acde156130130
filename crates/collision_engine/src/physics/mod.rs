//! Physics module for collision detection
//!
//! Provides shape-pair intersection tests, attribute/mask filtering and the
//! contact state machine that turns per-tick overlap results into enter,
//! stay and exit callbacks on collider owners.

pub mod attribute_registry;
pub mod collider;
pub mod collision;
pub mod collision_layers;
pub mod collision_system;
pub mod error;
pub mod owner;

#[cfg(test)]
mod tests;

pub use attribute_registry::{AttributeRegistry, CategoryBits};
pub use collider::{Collider, ColliderDesc};
pub use collision::{Aabb, BoundingSphere, ColliderShape, Obb, ShapeKind, WorldSpaceShape};
pub use collision_layers::CollisionLayers;
pub use collision_system::{
    CollisionEvent,
    CollisionEventKind,
    CollisionManager,
    CollisionPair,
    ContactState,
};
pub use error::{CollisionError, CollisionResult};
pub use owner::{CollisionOwner, ContactInfo, OwnerLookup};
