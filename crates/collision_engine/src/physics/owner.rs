//! Collider owners
//!
//! The collision core never stores game entities. It reaches them through
//! two small traits: [`CollisionOwner`] is what an entity exposes (its world
//! transform and the three contact callbacks), and [`OwnerLookup`] resolves
//! an [`OwnerId`] to a borrowed owner for the duration of a detection pass.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::foundation::collections::{ColliderHandle, OwnerId, SlotMap};
use crate::foundation::math::{Quat, Transform, Vec3};

/// One side of a contact, as seen by the owner receiving the callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactInfo {
    /// The receiving owner's collider
    pub collider: ColliderHandle,
    /// The other collider of the pair
    pub peer_collider: ColliderHandle,
    /// The owner of the other collider
    pub peer_owner: OwnerId,
}

impl ContactInfo {
    /// The same contact seen from the other side
    pub fn mirrored(&self, own_owner: OwnerId) -> Self {
        Self {
            collider: self.peer_collider,
            peer_collider: self.collider,
            peer_owner: own_owner,
        }
    }
}

/// Capability an entity must provide to own colliders
///
/// Callbacks default to no-ops so owners only implement what they use.
/// They run synchronously inside the detection pass, in pair order.
pub trait CollisionOwner {
    /// World position of the owner after this tick's transform update
    fn world_position(&self) -> Vec3;

    /// World rotation of the owner; orients OBB colliders
    fn world_rotation(&self) -> Quat {
        Quat::identity()
    }

    /// World transform built from position and rotation
    fn world_transform(&self) -> Transform {
        Transform::from_position_rotation(self.world_position(), self.world_rotation())
    }

    /// First tick of a contact
    fn on_collision_enter(&mut self, _contact: &ContactInfo) {}

    /// Every tick a contact persists, including the tick it began
    fn on_collision(&mut self, _contact: &ContactInfo) {}

    /// A contact ended, was filtered out, or one collider was destroyed
    fn on_collision_exit(&mut self, _contact: &ContactInfo) {}
}

impl<T: CollisionOwner + ?Sized> CollisionOwner for Box<T> {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }

    fn world_rotation(&self) -> Quat {
        (**self).world_rotation()
    }

    fn world_transform(&self) -> Transform {
        (**self).world_transform()
    }

    fn on_collision_enter(&mut self, contact: &ContactInfo) {
        (**self).on_collision_enter(contact);
    }

    fn on_collision(&mut self, contact: &ContactInfo) {
        (**self).on_collision(contact);
    }

    fn on_collision_exit(&mut self, contact: &ContactInfo) {
        (**self).on_collision_exit(contact);
    }
}

/// Resolves owner identities to live owners
///
/// A lookup miss means the owner no longer exists; pairs involving it are
/// treated as non-interacting.
pub trait OwnerLookup {
    /// Borrow an owner
    fn owner(&self, id: OwnerId) -> Option<&dyn CollisionOwner>;

    /// Mutably borrow an owner to deliver a callback
    fn owner_mut(&mut self, id: OwnerId) -> Option<&mut dyn CollisionOwner>;

    /// Check whether an owner is live
    fn contains_owner(&self, id: OwnerId) -> bool {
        self.owner(id).is_some()
    }
}

impl<T: CollisionOwner> OwnerLookup for SlotMap<OwnerId, T> {
    fn owner(&self, id: OwnerId) -> Option<&dyn CollisionOwner> {
        self.get(id).map(|owner| owner as &dyn CollisionOwner)
    }

    fn owner_mut(&mut self, id: OwnerId) -> Option<&mut dyn CollisionOwner> {
        self.get_mut(id).map(|owner| owner as &mut dyn CollisionOwner)
    }
}

impl<T: CollisionOwner, S: BuildHasher> OwnerLookup for HashMap<OwnerId, T, S> {
    fn owner(&self, id: OwnerId) -> Option<&dyn CollisionOwner> {
        self.get(&id).map(|owner| owner as &dyn CollisionOwner)
    }

    fn owner_mut(&mut self, id: OwnerId) -> Option<&mut dyn CollisionOwner> {
        self.get_mut(&id).map(|owner| owner as &mut dyn CollisionOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker {
        position: Vec3,
        exits: usize,
    }

    impl CollisionOwner for Marker {
        fn world_position(&self) -> Vec3 {
            self.position
        }

        fn on_collision_exit(&mut self, _contact: &ContactInfo) {
            self.exits += 1;
        }
    }

    #[test]
    fn test_slotmap_lookup() {
        let mut owners: SlotMap<OwnerId, Marker> = SlotMap::with_key();
        let id = owners.insert(Marker { position: Vec3::new(1.0, 2.0, 3.0), exits: 0 });

        let transform = owners.owner(id).unwrap().world_transform();
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, Quat::identity());

        owners.remove(id);
        assert!(!owners.contains_owner(id));
    }

    #[test]
    fn test_boxed_owners_forward_callbacks() {
        let mut owners: SlotMap<OwnerId, Box<Marker>> = SlotMap::with_key();
        let id = owners.insert(Box::new(Marker { position: Vec3::zeros(), exits: 0 }));
        let peer = owners.insert(Box::new(Marker { position: Vec3::zeros(), exits: 0 }));
        let contact = ContactInfo {
            collider: ColliderHandle::default(),
            peer_collider: ColliderHandle::default(),
            peer_owner: peer,
        };

        owners.owner_mut(id).unwrap().on_collision_exit(&contact);
        assert_eq!(owners[id].exits, 1);
        assert_eq!(owners[peer].exits, 0);
    }

    /// Owner whose transform comes from a stored pose, not the defaults
    struct Posed {
        pose: Transform,
    }

    impl CollisionOwner for Posed {
        fn world_position(&self) -> Vec3 {
            Vec3::zeros()
        }

        fn world_transform(&self) -> Transform {
            self.pose
        }
    }

    #[test]
    fn test_boxed_owners_forward_world_transform() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 0.5);
        let pose = Transform::from_position_rotation(Vec3::new(4.0, 0.0, -2.0), rotation);
        let boxed: Box<dyn CollisionOwner> = Box::new(Posed { pose });

        assert_eq!(boxed.world_transform(), pose);
    }

    #[test]
    fn test_mirrored_contact() {
        let mut ids: SlotMap<OwnerId, ()> = SlotMap::with_key();
        let (a, b) = (ids.insert(()), ids.insert(()));
        let mut handles: SlotMap<ColliderHandle, ()> = SlotMap::with_key();
        let (ca, cb) = (handles.insert(()), handles.insert(()));

        let seen_by_a = ContactInfo { collider: ca, peer_collider: cb, peer_owner: b };
        let seen_by_b = seen_by_a.mirrored(a);
        assert_eq!(seen_by_b, ContactInfo { collider: cb, peer_collider: ca, peer_owner: a });
    }
}
