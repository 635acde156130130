//! Specialized collection types
//!
//! Colliders and their owners are addressed through generational slot map
//! keys so a stale handle can never alias a newer entity.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a collider stored in the collision manager's arena
    pub struct ColliderHandle;

    /// Stable identity of the external entity that owns a collider
    pub struct OwnerId;
}

/// Handle-based map of colliders
pub type ColliderMap<T> = SlotMap<ColliderHandle, T>;
