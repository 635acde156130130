//! Core collision detection system
//!
//! The manager owns every collider in a slotmap arena and runs one detection
//! pass per tick, after owners have updated their transforms. External code
//! rebuilds the active set each tick with [`CollisionManager::clear_active_colliders`]
//! and [`CollisionManager::register_active_collider`]; contact memory lives on
//! the colliders themselves and survives that rebuild.
//!
//! Each unordered pair of active colliders follows a two-state machine:
//!
//! ```text
//!              hit / Enter + Stay
//! NotTouching ───────────────────▶ Touching ──┐ hit / Stay
//!      ▲                              │  ◀────┘
//!      └──────────────────────────────┘
//!         miss, filtered out or destroyed / Exit
//! ```
//!
//! There is no broad phase; every active pair is tested.

use std::collections::HashSet;

use crate::core::config::CollisionConfig;
use crate::foundation::collections::{ColliderHandle, ColliderMap, OwnerId, SlotMap};
use crate::physics::collider::{Collider, ColliderDesc};
use crate::physics::error::{CollisionError, CollisionResult};
use crate::physics::owner::{ContactInfo, OwnerLookup};

/// Unordered pair of colliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The smaller handle of the pair
    pub collider_a: ColliderHandle,
    /// The larger handle of the pair
    pub collider_b: ColliderHandle,
}

impl CollisionPair {
    /// Create a new collision pair (always stores the smaller handle first for consistency)
    pub fn new(collider_a: ColliderHandle, collider_b: ColliderHandle) -> Self {
        if collider_a <= collider_b {
            Self { collider_a, collider_b }
        } else {
            Self { collider_a: collider_b, collider_b: collider_a }
        }
    }

    /// Whether the pair involves a collider
    pub fn contains(&self, collider: ColliderHandle) -> bool {
        self.collider_a == collider || self.collider_b == collider
    }

    /// The other collider of the pair, if `collider` is part of it
    pub fn other(&self, collider: ColliderHandle) -> Option<ColliderHandle> {
        if collider == self.collider_a {
            Some(self.collider_b)
        } else if collider == self.collider_b {
            Some(self.collider_a)
        } else {
            None
        }
    }
}

/// Contact state of one unordered pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactState {
    /// Not overlapping (initial state)
    #[default]
    NotTouching,
    /// Overlapping as of the last pass that tested the pair
    Touching,
}

/// Callback delivered to both owners of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionEventKind {
    /// The pair started touching
    Enter,
    /// The pair is touching this tick
    Stay,
    /// The pair stopped touching
    Exit,
}

/// One transition or persistence notice emitted by a detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// What happened
    pub kind: CollisionEventKind,
    /// Which colliders
    pub pair: CollisionPair,
    /// Owner of `pair.collider_a`
    pub owner_a: OwnerId,
    /// Owner of `pair.collider_b`
    pub owner_b: OwnerId,
}

/// Outcome of examining one pair, computed before any state changes
enum PairStep {
    Skip,
    Enter,
    Stay,
    Exit,
}

/// Collider arena plus the per-tick contact state machine
pub struct CollisionManager {
    /// Every live collider
    colliders: ColliderMap<Collider>,

    /// Colliders taking part in the next pass, in registration order
    active: Vec<ColliderHandle>,

    /// Dedupe set for `active`
    active_set: HashSet<ColliderHandle>,

    /// Events from the most recent pass
    events: Vec<CollisionEvent>,

    /// Bias added to the SAT rotation matrix
    sat_epsilon: f32,

    /// Log every transition at trace level
    log_transitions: bool,
}

impl CollisionManager {
    /// Create a manager with default settings
    pub fn new() -> Self {
        Self::with_config(&CollisionConfig::default())
    }

    /// Create a manager using the SAT epsilon and logging settings of a config
    pub fn with_config(config: &CollisionConfig) -> Self {
        Self {
            colliders: SlotMap::with_key(),
            active: Vec::new(),
            active_set: HashSet::new(),
            events: Vec::new(),
            sat_epsilon: config.effective_sat_epsilon(),
            log_transitions: config.log_transitions,
        }
    }

    /// SAT epsilon in use
    pub fn sat_epsilon(&self) -> f32 {
        self.sat_epsilon
    }

    /// Create a collider attached to an owner
    pub fn create_collider(&mut self, owner: OwnerId, desc: ColliderDesc) -> CollisionResult<ColliderHandle> {
        let collider = Collider::new(owner, desc)?;
        let kind = collider.kind();
        let handle = self.colliders.insert(collider);
        log::debug!("Created {:?} collider {:?} for owner {:?}", kind, handle, owner);
        Ok(handle)
    }

    /// Borrow a collider
    pub fn collider(&self, handle: ColliderHandle) -> CollisionResult<&Collider> {
        self.colliders
            .get(handle)
            .ok_or(CollisionError::UnknownCollider(handle))
    }

    /// Mutably borrow a collider to change its settings
    pub fn collider_mut(&mut self, handle: ColliderHandle) -> CollisionResult<&mut Collider> {
        self.colliders
            .get_mut(handle)
            .ok_or(CollisionError::UnknownCollider(handle))
    }

    /// Check if a handle refers to a live collider
    pub fn has_collider(&self, handle: ColliderHandle) -> bool {
        self.colliders.contains_key(handle)
    }

    /// Get the number of live colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Iterate over every live collider
    pub fn colliders(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders.iter()
    }

    /// Empty the active set; contacts are kept
    pub fn clear_active_colliders(&mut self) {
        self.active.clear();
        self.active_set.clear();
    }

    /// Add a collider to the active set for the next pass
    ///
    /// Returns `false` for duplicates and for handles that are not live.
    pub fn register_active_collider(&mut self, handle: ColliderHandle) -> bool {
        if !self.colliders.contains_key(handle) {
            log::debug!("Ignoring activation of unknown collider {:?}", handle);
            return false;
        }
        if !self.active_set.insert(handle) {
            return false;
        }
        self.active.push(handle);
        true
    }

    /// Number of colliders in the active set
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Run one detection pass over the active set
    ///
    /// Refreshes every active collider's world shape from its owner, then
    /// visits each unique pair once, in registration order. Callbacks go to
    /// the earlier-registered collider's owner first. Returns the events of
    /// this pass.
    pub fn run_detection_pass<L: OwnerLookup + ?Sized>(&mut self, owners: &mut L) -> &[CollisionEvent] {
        self.events.clear();

        let resolved = self.sync_world_transforms(owners);

        for i in 0..self.active.len() {
            if !resolved[i] {
                continue;
            }
            for j in (i + 1)..self.active.len() {
                if !resolved[j] {
                    continue;
                }
                let (a, b) = (self.active[i], self.active[j]);
                match self.examine_pair(a, b) {
                    PairStep::Skip => {}
                    PairStep::Enter => {
                        self.link(a, b);
                        self.notify(owners, CollisionEventKind::Enter, a, b);
                        self.notify(owners, CollisionEventKind::Stay, a, b);
                    }
                    PairStep::Stay => self.notify(owners, CollisionEventKind::Stay, a, b),
                    PairStep::Exit => {
                        self.unlink(a, b);
                        self.notify(owners, CollisionEventKind::Exit, a, b);
                    }
                }
            }
        }

        log::debug!(
            "Collision pass: {} active colliders, {} events, {} touching pairs",
            self.active.len(),
            self.events.len(),
            self.touching_pair_count()
        );

        &self.events
    }

    /// Destroy a collider, first ending every contact it holds
    ///
    /// Both sides of each open contact receive `on_collision_exit` before
    /// the arena slot is freed. Works outside a detection pass.
    pub fn destroy_collider<L: OwnerLookup + ?Sized>(
        &mut self,
        handle: ColliderHandle,
        owners: &mut L,
    ) -> CollisionResult<Collider> {
        let peers: Vec<ColliderHandle> = self.collider(handle)?.contacts().collect();

        for peer in peers {
            self.unlink(handle, peer);
            if self.colliders.contains_key(peer) {
                self.deliver(owners, CollisionEventKind::Exit, handle, peer);
            }
        }

        if self.active_set.remove(&handle) {
            self.active.retain(|&active| active != handle);
        }

        let collider = self
            .colliders
            .remove(handle)
            .ok_or(CollisionError::UnknownCollider(handle))?;
        log::debug!("Destroyed collider {:?} of owner {:?}", handle, collider.owner());
        Ok(collider)
    }

    /// Destroy every collider through the teardown path
    pub fn clear<L: OwnerLookup + ?Sized>(&mut self, owners: &mut L) {
        let handles: Vec<ColliderHandle> = self.colliders.keys().collect();
        for handle in handles {
            // Handles come from the arena, so removal cannot miss
            let _ = self.destroy_collider(handle, owners);
        }
        self.clear_active_colliders();
        self.events.clear();
    }

    /// Events of the most recent pass
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Pairs that entered collision during the most recent pass
    pub fn collisions_entered(&self) -> Vec<CollisionPair> {
        self.pairs_with(CollisionEventKind::Enter)
    }

    /// Pairs that exited collision during the most recent pass
    pub fn collisions_exited(&self) -> Vec<CollisionPair> {
        self.pairs_with(CollisionEventKind::Exit)
    }

    /// Contact state of a pair; unknown handles are never touching
    pub fn contact_state(&self, a: ColliderHandle, b: ColliderHandle) -> ContactState {
        match self.colliders.get(a) {
            Some(collider) if collider.has_contact_with(b) => ContactState::Touching,
            _ => ContactState::NotTouching,
        }
    }

    /// Colliders currently touching `handle`
    pub fn contacts_of(&self, handle: ColliderHandle) -> Vec<ColliderHandle> {
        self.colliders
            .get(handle)
            .map(|collider| collider.contacts().collect())
            .unwrap_or_default()
    }

    /// Check if a collider is touching anything
    pub fn is_colliding(&self, handle: ColliderHandle) -> bool {
        self.colliders
            .get(handle)
            .is_some_and(Collider::is_colliding)
    }

    /// Every touching pair, sorted
    pub fn touching_pairs(&self) -> Vec<CollisionPair> {
        let mut pairs: Vec<CollisionPair> = self
            .colliders
            .iter()
            .flat_map(|(handle, collider)| {
                collider
                    .contacts()
                    .filter(move |&peer| handle < peer)
                    .map(move |peer| CollisionPair::new(handle, peer))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    fn touching_pair_count(&self) -> usize {
        self.colliders
            .values()
            .map(Collider::contact_count)
            .sum::<usize>()
            / 2
    }

    fn pairs_with(&self, kind: CollisionEventKind) -> Vec<CollisionPair> {
        self.events
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.pair)
            .collect()
    }

    /// Refresh world shapes; returns which active slots have both a live
    /// collider and a live owner
    fn sync_world_transforms<L: OwnerLookup + ?Sized>(&mut self, owners: &L) -> Vec<bool> {
        self.active
            .iter()
            .map(|&handle| {
                let Some(collider) = self.colliders.get_mut(handle) else {
                    return false;
                };
                match owners.owner(collider.owner()) {
                    Some(owner) => {
                        collider.sync_world_transform(&owner.world_transform());
                        true
                    }
                    None => {
                        log::trace!("Owner {:?} of collider {:?} is gone; skipping", collider.owner(), handle);
                        false
                    }
                }
            })
            .collect()
    }

    fn examine_pair(&self, a: ColliderHandle, b: ColliderHandle) -> PairStep {
        let (Some(collider_a), Some(collider_b)) = (self.colliders.get(a), self.colliders.get(b)) else {
            return PairStep::Skip;
        };
        let touching = collider_a.has_contact_with(b);

        if !collider_a.can_interact_with(collider_b) {
            return if touching { PairStep::Exit } else { PairStep::Skip };
        }

        let hit = match (collider_a.world_shape(), collider_b.world_shape()) {
            (Some(shape_a), Some(shape_b)) => shape_a.intersects(shape_b, self.sat_epsilon),
            _ => false,
        };

        match (hit, touching) {
            (true, false) => PairStep::Enter,
            (true, true) => PairStep::Stay,
            (false, true) => PairStep::Exit,
            (false, false) => PairStep::Skip,
        }
    }

    fn link(&mut self, a: ColliderHandle, b: ColliderHandle) {
        if let Some(collider) = self.colliders.get_mut(a) {
            collider.add_contact(b);
        }
        if let Some(collider) = self.colliders.get_mut(b) {
            collider.add_contact(a);
        }
    }

    fn unlink(&mut self, a: ColliderHandle, b: ColliderHandle) {
        if let Some(collider) = self.colliders.get_mut(a) {
            collider.remove_contact(b);
        }
        if let Some(collider) = self.colliders.get_mut(b) {
            collider.remove_contact(a);
        }
    }

    /// Record an event and call both owners, `a`'s first
    fn notify<L: OwnerLookup + ?Sized>(
        &mut self,
        owners: &mut L,
        kind: CollisionEventKind,
        a: ColliderHandle,
        b: ColliderHandle,
    ) {
        if let Some(event) = self.deliver(owners, kind, a, b) {
            self.events.push(event);
        }
    }

    fn deliver<L: OwnerLookup + ?Sized>(
        &self,
        owners: &mut L,
        kind: CollisionEventKind,
        a: ColliderHandle,
        b: ColliderHandle,
    ) -> Option<CollisionEvent> {
        let owner_a = self.colliders.get(a)?.owner();
        let owner_b = self.colliders.get(b)?.owner();

        let seen_by_a = ContactInfo { collider: a, peer_collider: b, peer_owner: owner_b };
        let seen_by_b = seen_by_a.mirrored(owner_a);

        if self.log_transitions && kind != CollisionEventKind::Stay {
            log::trace!("Collision {:?}: {:?} <-> {:?}", kind, a, b);
        }

        for (owner_id, contact) in [(owner_a, seen_by_a), (owner_b, seen_by_b)] {
            if let Some(owner) = owners.owner_mut(owner_id) {
                match kind {
                    CollisionEventKind::Enter => owner.on_collision_enter(&contact),
                    CollisionEventKind::Stay => owner.on_collision(&contact),
                    CollisionEventKind::Exit => owner.on_collision_exit(&contact),
                }
            }
        }

        let pair = CollisionPair::new(a, b);
        let (owner_a, owner_b) = if pair.collider_a == a { (owner_a, owner_b) } else { (owner_b, owner_a) };
        Some(CollisionEvent { kind, pair, owner_a, owner_b })
    }
}

impl Default for CollisionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::physics::collision::ColliderShape;
    use crate::physics::collision_layers::CollisionLayers;
    use crate::physics::owner::CollisionOwner;

    #[derive(Default)]
    struct Probe {
        position: Vec3,
        log: Vec<(CollisionEventKind, ColliderHandle)>,
    }

    impl CollisionOwner for Probe {
        fn world_position(&self) -> Vec3 {
            self.position
        }

        fn on_collision_enter(&mut self, contact: &ContactInfo) {
            self.log.push((CollisionEventKind::Enter, contact.peer_collider));
        }

        fn on_collision(&mut self, contact: &ContactInfo) {
            self.log.push((CollisionEventKind::Stay, contact.peer_collider));
        }

        fn on_collision_exit(&mut self, contact: &ContactInfo) {
            self.log.push((CollisionEventKind::Exit, contact.peer_collider));
        }
    }

    fn probe_at(x: f32) -> Probe {
        Probe { position: Vec3::new(x, 0.0, 0.0), log: Vec::new() }
    }

    fn activate_all(manager: &mut CollisionManager) {
        manager.clear_active_colliders();
        let handles: Vec<ColliderHandle> = manager.colliders().map(|(handle, _)| handle).collect();
        for handle in handles {
            manager.register_active_collider(handle);
        }
    }

    #[test]
    fn test_collision_pair_is_normalized() {
        let mut arena: SlotMap<ColliderHandle, ()> = SlotMap::with_key();
        let (a, b) = (arena.insert(()), arena.insert(()));

        assert_eq!(CollisionPair::new(a, b), CollisionPair::new(b, a));
        assert_eq!(CollisionPair::new(b, a).other(a), Some(b));
        assert!(CollisionPair::new(a, b).contains(b));
    }

    #[test]
    fn test_collision_detection() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(1.5));

        let mut manager = CollisionManager::new();
        let a = manager.create_collider(owner_a, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        let b = manager.create_collider(owner_b, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        activate_all(&mut manager);

        let events = manager.run_detection_pass(&mut owners).to_vec();
        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
        assert_eq!(kinds, vec![CollisionEventKind::Enter, CollisionEventKind::Stay]);
        assert_eq!(events[0].pair, CollisionPair::new(a, b));

        assert_eq!(manager.contact_state(a, b), ContactState::Touching);
        assert_eq!(manager.contact_state(b, a), ContactState::Touching);
        assert_eq!(manager.contacts_of(a), vec![b]);
        assert_eq!(manager.touching_pairs(), vec![CollisionPair::new(a, b)]);
        assert_eq!(manager.collisions_entered(), vec![CollisionPair::new(a, b)]);

        assert_eq!(
            owners[owner_a].log,
            vec![(CollisionEventKind::Enter, b), (CollisionEventKind::Stay, b)]
        );
        assert_eq!(
            owners[owner_b].log,
            vec![(CollisionEventKind::Enter, a), (CollisionEventKind::Stay, a)]
        );
    }

    #[test]
    fn test_layer_filtering() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(0.0));

        let mut manager = CollisionManager::new();
        // A is a PLAYER that only reacts to ENEMY; B is ENVIRONMENT
        manager
            .create_collider(
                owner_a,
                ColliderDesc::new(ColliderShape::sphere(5.0))
                    .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY),
            )
            .unwrap();
        manager
            .create_collider(
                owner_b,
                ColliderDesc::new(ColliderShape::sphere(5.0))
                    .with_layers(CollisionLayers::ENVIRONMENT, CollisionLayers::ALL),
            )
            .unwrap();
        activate_all(&mut manager);

        assert!(manager.run_detection_pass(&mut owners).is_empty());
        assert!(manager.touching_pairs().is_empty());
        assert!(owners[owner_a].log.is_empty());
        assert!(owners[owner_b].log.is_empty());
    }

    #[test]
    fn test_duplicate_activation_is_ignored() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner = owners.insert(probe_at(0.0));

        let mut manager = CollisionManager::new();
        let handle = manager.create_collider(owner, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();

        assert!(manager.register_active_collider(handle));
        assert!(!manager.register_active_collider(handle));
        assert_eq!(manager.active_count(), 1);

        // A lone collider never pairs with itself
        assert!(manager.run_detection_pass(&mut owners).is_empty());
    }

    #[test]
    fn test_unknown_handles() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner = owners.insert(probe_at(0.0));

        let mut manager = CollisionManager::new();
        let handle = manager.create_collider(owner, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        manager.destroy_collider(handle, &mut owners).unwrap();

        assert_eq!(manager.collider(handle).unwrap_err(), CollisionError::UnknownCollider(handle));
        assert!(manager.collider_mut(handle).is_err());
        assert!(manager.destroy_collider(handle, &mut owners).is_err());
        assert!(!manager.register_active_collider(handle));
        assert_eq!(manager.contact_state(handle, handle), ContactState::NotTouching);
        assert!(!manager.is_colliding(handle));
    }

    #[test]
    fn test_missing_owner_skips_pair_and_keeps_state() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(1.0));

        let mut manager = CollisionManager::new();
        let a = manager.create_collider(owner_a, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        let b = manager.create_collider(owner_b, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        activate_all(&mut manager);
        manager.run_detection_pass(&mut owners);

        owners.remove(owner_b);
        assert!(manager.run_detection_pass(&mut owners).is_empty());
        assert_eq!(manager.contact_state(a, b), ContactState::Touching);
    }

    #[test]
    fn test_inactive_collider_keeps_contacts() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(1.0));

        let mut manager = CollisionManager::new();
        let a = manager.create_collider(owner_a, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        let b = manager.create_collider(owner_b, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        activate_all(&mut manager);
        manager.run_detection_pass(&mut owners);

        manager.clear_active_colliders();
        manager.register_active_collider(a);
        owners[owner_b].position = Vec3::new(50.0, 0.0, 0.0);

        assert!(manager.run_detection_pass(&mut owners).is_empty());
        assert!(manager.is_colliding(a));
        assert!(manager.is_colliding(b));
    }

    #[test]
    fn test_callbacks_follow_registration_order() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(1.0));

        let mut manager = CollisionManager::new();
        let a = manager.create_collider(owner_a, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        let b = manager.create_collider(owner_b, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();

        // Register B first; the event still names the normalized pair
        manager.register_active_collider(b);
        manager.register_active_collider(a);
        let events = manager.run_detection_pass(&mut owners).to_vec();

        let pair = CollisionPair::new(a, b);
        assert_eq!(events[0].pair, pair);
        let expected_owner_a = if pair.collider_a == a { owner_a } else { owner_b };
        assert_eq!(events[0].owner_a, expected_owner_a);
    }

    #[test]
    fn test_clear_tears_everything_down() {
        let mut owners: SlotMap<OwnerId, Probe> = SlotMap::with_key();
        let owner_a = owners.insert(probe_at(0.0));
        let owner_b = owners.insert(probe_at(1.0));

        let mut manager = CollisionManager::new();
        let a = manager.create_collider(owner_a, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        let b = manager.create_collider(owner_b, ColliderDesc::new(ColliderShape::sphere(1.0))).unwrap();
        activate_all(&mut manager);
        manager.run_detection_pass(&mut owners);

        manager.clear(&mut owners);

        assert_eq!(manager.collider_count(), 0);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(owners[owner_a].log.last(), Some(&(CollisionEventKind::Exit, b)));
        assert_eq!(owners[owner_b].log.last(), Some(&(CollisionEventKind::Exit, a)));
        assert_eq!(
            owners[owner_a]
                .log
                .iter()
                .filter(|(kind, _)| *kind == CollisionEventKind::Exit)
                .count(),
            1
        );
    }

    #[test]
    fn test_with_config_uses_epsilon() {
        let config = CollisionConfig::default().with_sat_epsilon(1e-6);
        assert_eq!(CollisionManager::with_config(&config).sat_epsilon(), 1e-6);
        assert_eq!(CollisionManager::new().sat_epsilon(), f32::MIN_POSITIVE);
    }
}
