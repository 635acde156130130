//! Collision layer bits for filtering collision detection
//!
//! Every collider carries two layer sets: its *attribute* (what it is) and its
//! *mask* (what it reacts to). A pair interacts only when each side's
//! attribute is accepted by the other side's mask.

bitflags::bitflags! {
    /// Collision layer set backed by a `u32`
    ///
    /// The named constants cover the built-in categories; any other bit is
    /// retained as-is so user-registered categories can use the full word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player character
        const PLAYER = 1 << 0;

        /// Enemy character
        const ENEMY = 1 << 1;

        /// Weapons and projectiles
        const WEAPON = 1 << 2;

        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;

        const _ = !0;
    }
}

impl CollisionLayers {
    /// No collision layer
    pub const NONE: Self = Self::empty();

    /// All collision layers; the default attribute and mask of a collider
    pub const ALL: Self = Self::from_bits_retain(u32::MAX);

    /// Check if two colliders should interact based on their layers and masks
    ///
    /// # Arguments
    /// * `attribute_a` - Collider A's attribute (what it is)
    /// * `mask_a` - Collider A's mask (what it reacts to)
    /// * `attribute_b` - Collider B's attribute
    /// * `mask_b` - Collider B's mask
    ///
    /// # Example
    /// ```
    /// use collision_engine::physics::CollisionLayers;
    ///
    /// let player = (CollisionLayers::PLAYER, CollisionLayers::ENEMY);
    /// let enemy = (CollisionLayers::ENEMY, CollisionLayers::PLAYER | CollisionLayers::WEAPON);
    ///
    /// assert!(CollisionLayers::should_collide(player.0, player.1, enemy.0, enemy.1));
    /// ```
    pub fn should_collide(
        attribute_a: Self,
        mask_a: Self,
        attribute_b: Self,
        mask_b: Self,
    ) -> bool {
        // A's attribute must be in B's mask AND B's attribute must be in A's mask
        attribute_a.intersects(mask_b) && attribute_b.intersects(mask_a)
    }

    /// Helper to create a mask from multiple layers
    pub fn mask(layers: &[Self]) -> Self {
        layers.iter().fold(Self::NONE, |acc, &layer| acc | layer)
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u32> for CollisionLayers {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<CollisionLayers> for u32 {
    fn from(layers: CollisionLayers) -> Self {
        layers.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player reacts to enemies, but the enemy only reacts to weapons
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::WEAPON,
        ));
    }

    #[test]
    fn test_default_matches_everything() {
        let any = CollisionLayers::from(0b1000_0000_0000_0000u32);
        assert_eq!(CollisionLayers::default().bits(), 0xFFFF_FFFF);
        assert!(CollisionLayers::should_collide(
            CollisionLayers::default(), CollisionLayers::default(),
            any, any,
        ));
    }

    #[test]
    fn test_unnamed_bits_are_retained() {
        let custom = CollisionLayers::from(1u32 << 20);
        assert_eq!(u32::from(custom), 1 << 20);
        assert!(!custom.intersects(CollisionLayers::PLAYER));
    }

    #[test]
    fn test_mask_creation() {
        let mask = CollisionLayers::mask(&[
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENVIRONMENT,
        ]);

        assert_eq!(mask.bits(), 0b1011);
    }
}
