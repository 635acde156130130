//! Narrow-phase collision geometry
//!
//! # Architecture
//!
//! - **Local Space Storage**: Collider shapes are stored relative to the
//!   collider center
//! - **Per-Tick Transformation**: Shapes are moved to world space once per
//!   tick, before any pair is tested
//! - **Closed Dispatch**: Every unordered pair of shape tags maps to exactly
//!   one predicate
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space volumes (sphere, AABB, OBB)
//! - [`intersection`] - Pure overlap predicates, one per shape pair
//! - [`shape`] - Local/world shape variants and pair dispatch

pub mod primitives;
pub mod intersection;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Aabb, BoundingSphere, Obb};
pub use shape::{ColliderShape, ShapeKind, WorldSpaceShape};
