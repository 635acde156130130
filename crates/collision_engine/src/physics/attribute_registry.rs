//! Named collision categories
//!
//! Maps human-readable category names ("Player", "Enemy", ...) to the
//! attribute and mask bits colliders use for filtering. The registry is an
//! ordinary value owned by the simulation context: build it once at startup,
//! then hand out shared references to whatever creates colliders.
//!
//! Lookups of unknown names fail open and return [`CollisionLayers::ALL`],
//! so a misspelt category silently interacts with everything.

use std::collections::HashMap;

use crate::core::config::CollisionConfig;
use crate::physics::collision_layers::CollisionLayers;

/// Attribute and mask bits of one registered category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBits {
    /// What a collider of this category is
    pub attribute: CollisionLayers,
    /// What a collider of this category reacts to
    pub mask: CollisionLayers,
}

/// Category name → (attribute, mask) table
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    categories: HashMap<String, CategoryBits>,
}

impl AttributeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in Player/Enemy/Weapon table
    pub fn with_defaults() -> Self {
        Self::from_config(&CollisionConfig::default())
    }

    /// Create a registry seeded from a configuration's attribute table
    pub fn from_config(config: &CollisionConfig) -> Self {
        let mut registry = Self::new();
        for entry in &config.attributes {
            registry.register(&entry.name, entry.attribute, entry.mask);
        }
        registry
    }

    /// Register a category
    ///
    /// The first registration of a name wins; registering a known name again
    /// leaves the stored bits untouched. Returns `true` if the name was new.
    pub fn register(
        &mut self,
        name: &str,
        attribute: impl Into<CollisionLayers>,
        mask: impl Into<CollisionLayers>,
    ) -> bool {
        if self.categories.contains_key(name) {
            log::debug!("Attribute category '{}' already registered; ignoring", name);
            return false;
        }

        self.categories.insert(
            name.to_owned(),
            CategoryBits {
                attribute: attribute.into(),
                mask: mask.into(),
            },
        );
        true
    }

    /// Attribute bits of a category, or [`CollisionLayers::ALL`] if unknown
    pub fn attribute_of(&self, name: &str) -> CollisionLayers {
        self.lookup(name).attribute
    }

    /// Mask bits of a category, or [`CollisionLayers::ALL`] if unknown
    pub fn mask_of(&self, name: &str) -> CollisionLayers {
        self.lookup(name).mask
    }

    /// Both bit sets of a category; unknown names yield the all-ones sentinel
    pub fn lookup(&self, name: &str) -> CategoryBits {
        self.get(name).unwrap_or_else(|| {
            log::debug!("Unknown attribute category '{}'; matching everything", name);
            CategoryBits {
                attribute: CollisionLayers::ALL,
                mask: CollisionLayers::ALL,
            }
        })
    }

    /// Strict lookup that does not fall back to the sentinel
    pub fn get(&self, name: &str) -> Option<CategoryBits> {
        self.categories.get(name).copied()
    }

    /// Check whether a category name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no category is registered
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
