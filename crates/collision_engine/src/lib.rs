//! # Collision Engine
//!
//! Collision detection core for small real-time simulations: three collider
//! shapes, attribute/mask filtering and per-pair contact events.
//!
//! ## Features
//!
//! - **Shapes**: spheres, axis-aligned boxes and oriented boxes
//! - **Exact tests**: one predicate per shape pair, 15-axis SAT for oriented boxes
//! - **Filtering**: named categories mapped to attribute and mask bits
//! - **Contact events**: enter, stay and exit callbacks delivered to collider owners
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! struct Ship {
//!     position: Vec3,
//! }
//!
//! impl CollisionOwner for Ship {
//!     fn world_position(&self) -> Vec3 {
//!         self.position
//!     }
//!
//!     fn on_collision_enter(&mut self, contact: &ContactInfo) {
//!         println!("hit {:?}", contact.peer_owner);
//!     }
//! }
//!
//! let registry = AttributeRegistry::with_defaults();
//! let mut ships: SlotMap<OwnerId, Ship> = SlotMap::with_key();
//! let player = ships.insert(Ship { position: Vec3::new(0.0, 0.0, 0.0) });
//! let enemy = ships.insert(Ship { position: Vec3::new(1.5, 0.0, 0.0) });
//!
//! let mut collisions = CollisionManager::new();
//! let a = collisions
//!     .create_collider(player, ColliderDesc::new(ColliderShape::sphere(1.0)).with_category(&registry, "Player"))
//!     .unwrap();
//! let b = collisions
//!     .create_collider(enemy, ColliderDesc::new(ColliderShape::sphere(1.0)).with_category(&registry, "Enemy"))
//!     .unwrap();
//!
//! // Every tick: rebuild the active set, then detect
//! collisions.clear_active_colliders();
//! collisions.register_active_collider(a);
//! collisions.register_active_collider(b);
//! collisions.run_detection_pass(&mut ships);
//!
//! assert_eq!(collisions.contact_state(a, b), ContactState::Touching);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{AttributeEntry, CollisionConfig},
        config::Config,
        foundation::{
            collections::{ColliderHandle, OwnerId, SlotMap},
            math::{Quat, Transform, Vec3},
        },
        physics::{
            AttributeRegistry,
            ColliderDesc,
            ColliderShape,
            CollisionEvent,
            CollisionEventKind,
            CollisionLayers,
            CollisionManager,
            CollisionOwner,
            ContactInfo,
            ContactState,
        },
    };
}
