//! Collider entity
//!
//! A collider is one shape attached to one owner. It carries its filtering
//! bits, an enabled flag, a world-space cache refreshed once per tick, and
//! the set of colliders it is currently touching. That contact set persists
//! across ticks; only the collision manager edits it, always on both sides
//! of a pair at once.

use std::collections::HashSet;

use crate::foundation::collections::{ColliderHandle, OwnerId};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::attribute_registry::AttributeRegistry;
use crate::physics::collision::{Aabb, ColliderShape, ShapeKind, WorldSpaceShape};
use crate::physics::collision_layers::CollisionLayers;
use crate::physics::error::CollisionResult;

/// Construction parameters for a collider
///
/// Mirrors the builder style of the engine's components: start from a shape
/// and chain the optional settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderDesc {
    /// The collision shape
    pub shape: ColliderShape,

    /// Offset of the collider center from the owner's world position
    pub center: Vec3,

    /// What this collider is
    pub attribute: CollisionLayers,

    /// What this collider reacts to
    pub mask: CollisionLayers,

    /// Whether the collider takes part in detection
    pub enabled: bool,

    /// Should this collider be visualized in debug mode?
    pub debug_draw: bool,
}

impl ColliderDesc {
    /// Create a collider description with default settings
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            center: Vec3::zeros(),
            attribute: CollisionLayers::ALL,  // Default: matches every mask
            mask: CollisionLayers::ALL,       // Default: reacts to everything
            enabled: true,
            debug_draw: false,
        }
    }

    /// Set the local center offset
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Set explicit attribute and mask bits
    pub fn with_layers(
        mut self,
        attribute: impl Into<CollisionLayers>,
        mask: impl Into<CollisionLayers>,
    ) -> Self {
        self.attribute = attribute.into();
        self.mask = mask.into();
        self
    }

    /// Take attribute and mask bits from a named category
    ///
    /// Unknown names fall back to matching everything.
    pub fn with_category(mut self, registry: &AttributeRegistry, name: &str) -> Self {
        let bits = registry.lookup(name);
        self.attribute = bits.attribute;
        self.mask = bits.mask;
        self
    }

    /// Start disabled (or enabled)
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enable debug visualization
    pub fn with_debug_draw(mut self, enabled: bool) -> Self {
        self.debug_draw = enabled;
        self
    }
}

/// A shape-tagged collider owned by one external entity
#[derive(Debug, Clone)]
pub struct Collider {
    owner: OwnerId,
    shape: ColliderShape,
    center: Vec3,
    pinned_world_center: Option<Vec3>,
    owner_transform: Option<Transform>,
    world_shape: Option<WorldSpaceShape>,
    attribute: CollisionLayers,
    mask: CollisionLayers,
    enabled: bool,
    debug_draw: bool,
    contacts: HashSet<ColliderHandle>,
}

impl Collider {
    /// Create a collider from a description, validating its shape
    pub fn new(owner: OwnerId, desc: ColliderDesc) -> CollisionResult<Self> {
        desc.shape.validate()?;

        Ok(Self {
            owner,
            shape: desc.shape,
            center: desc.center,
            pinned_world_center: None,
            owner_transform: None,
            world_shape: None,
            attribute: desc.attribute,
            mask: desc.mask,
            enabled: desc.enabled,
            debug_draw: desc.debug_draw,
            contacts: HashSet::new(),
        })
    }

    /// The entity this collider belongs to
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Local shape
    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    /// Shape tag
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Replace the shape; invalid shapes are rejected and the old one kept
    pub fn set_shape(&mut self, shape: ColliderShape) -> CollisionResult<()> {
        shape.validate()?;
        self.shape = shape;
        self.refresh_world_shape();
        Ok(())
    }

    /// Local center offset from the owner's position
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Set the local center offset
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.refresh_world_shape();
    }

    /// Pin the world center; owner movement is ignored until cleared
    pub fn set_world_center(&mut self, world_center: Vec3) {
        self.pinned_world_center = Some(world_center);
        self.refresh_world_shape();
    }

    /// Return to following the owner's position
    pub fn clear_world_center(&mut self) {
        self.pinned_world_center = None;
        self.refresh_world_shape();
    }

    /// Whether the world center is pinned
    pub fn is_world_center_pinned(&self) -> bool {
        self.pinned_world_center.is_some()
    }

    /// World-space center: the pinned center, or the owner's last synced
    /// position plus the local center
    ///
    /// Before the first sync the owner is taken to sit at the origin.
    pub fn world_center(&self) -> Vec3 {
        self.pinned_world_center.unwrap_or_else(|| {
            let owner_position = self.owner_transform.map_or_else(Vec3::zeros, |t| t.position);
            owner_position + self.center
        })
    }

    /// World-space shape as of the last transform sync, kept current by the
    /// shape and center setters
    pub fn world_shape(&self) -> Option<&WorldSpaceShape> {
        self.world_shape.as_ref()
    }

    /// World-space bounds as of the last transform sync (for debug overlays)
    pub fn world_bounds(&self) -> Option<Aabb> {
        self.world_shape.as_ref().map(WorldSpaceShape::bounds)
    }

    /// Recompute the world-space shape from the owner's transform
    ///
    /// Called once per tick by the collision manager before any pair test.
    pub fn sync_world_transform(&mut self, owner_transform: &Transform) {
        self.owner_transform = Some(*owner_transform);
        self.refresh_world_shape();
    }

    /// Rebuild the world shape from the cached owner transform, if any
    fn refresh_world_shape(&mut self) {
        if let Some(owner_transform) = self.owner_transform {
            self.world_shape = Some(self.shape.to_world_space(self.world_center(), &owner_transform.rotation));
        }
    }

    /// What this collider is
    pub fn attribute(&self) -> CollisionLayers {
        self.attribute
    }

    /// Set what this collider is
    pub fn set_attribute(&mut self, attribute: impl Into<CollisionLayers>) {
        self.attribute = attribute.into();
    }

    /// What this collider reacts to
    pub fn mask(&self) -> CollisionLayers {
        self.mask
    }

    /// Set what this collider reacts to
    pub fn set_mask(&mut self, mask: impl Into<CollisionLayers>) {
        self.mask = mask.into();
    }

    /// Take attribute and mask from a named category
    pub fn set_category(&mut self, registry: &AttributeRegistry, name: &str) {
        let bits = registry.lookup(name);
        self.attribute = bits.attribute;
        self.mask = bits.mask;
    }

    /// Whether the collider takes part in detection
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable; a disabled collider still receives Exit for any
    /// contact it holds on the next pass
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Debug visualization flag (no effect on detection)
    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    /// Set the debug visualization flag
    pub fn set_debug_draw(&mut self, enabled: bool) {
        self.debug_draw = enabled;
    }

    /// Both colliders are enabled and each accepts the other's attribute
    pub fn can_interact_with(&self, other: &Collider) -> bool {
        self.enabled
            && other.enabled
            && CollisionLayers::should_collide(self.attribute, self.mask, other.attribute, other.mask)
    }

    /// Check if we're currently touching a specific collider
    pub fn has_contact_with(&self, peer: ColliderHandle) -> bool {
        self.contacts.contains(&peer)
    }

    /// Colliders currently touching this one
    pub fn contacts(&self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.contacts.iter().copied()
    }

    /// Number of colliders currently touching this one
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Check if we're touching anything
    pub fn is_colliding(&self) -> bool {
        !self.contacts.is_empty()
    }

    pub(crate) fn add_contact(&mut self, peer: ColliderHandle) {
        self.contacts.insert(peer);
    }

    pub(crate) fn remove_contact(&mut self, peer: ColliderHandle) {
        self.contacts.remove(&peer);
    }
}
