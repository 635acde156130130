//! Arena Collision Demo
//!
//! Headless run of the collision engine:
//! - A player sphere and an enemy box fly toward each other
//! - A spinning weapon bar drifts down through their meeting point
//! - Contact transitions are logged as they happen
//! - The weapon is torn down mid-run to show exits on destruction
//!
//! Usage: `arena [collision.toml|collision.ron]`

use collision_engine::foundation::logging;
use collision_engine::prelude::*;
use collision_engine::physics::CollisionError;

// Simulation settings
const TICKS: usize = 60;
const TIMESTEP: f32 = 0.1;
const WEAPON_TEARDOWN_TICK: usize = 40;

// Spawn layout
const PLAYER_START: f32 = -6.0;
const ENEMY_START: f32 = 6.0;
const CLOSING_SPEED: f32 = 2.0;
const WEAPON_START_HEIGHT: f32 = 4.0;
const WEAPON_FALL_SPEED: f32 = 1.0;
const WEAPON_SPIN: f32 = 1.5;  // radians per second

/// A moving body that owns one collider
struct Body {
    name: &'static str,
    position: Vec3,
    velocity: Vec3,
    rotation: Quat,
    spin: f32,
    contacts: usize,
}

impl Body {
    fn new(name: &'static str, position: Vec3, velocity: Vec3) -> Self {
        Self {
            name,
            position,
            velocity,
            rotation: Quat::identity(),
            spin: 0.0,
            contacts: 0,
        }
    }

    fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        if self.spin != 0.0 {
            let step = Quat::from_axis_angle(&Vec3::z_axis(), self.spin * dt);
            self.rotation = step * self.rotation;
        }
    }
}

impl CollisionOwner for Body {
    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn world_rotation(&self) -> Quat {
        self.rotation
    }

    fn on_collision_enter(&mut self, contact: &ContactInfo) {
        self.contacts += 1;
        log::debug!("{} touched owner {:?}", self.name, contact.peer_owner);
    }

    fn on_collision_exit(&mut self, contact: &ContactInfo) {
        self.contacts = self.contacts.saturating_sub(1);
        log::debug!("{} separated from owner {:?}", self.name, contact.peer_owner);
    }
}

fn load_config() -> Result<CollisionConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading collision config from {}", path);
            Ok(CollisionConfig::load_from_file(&path)?)
        }
        None => Ok(CollisionConfig::default()),
    }
}

fn spawn(
    bodies: &mut SlotMap<OwnerId, Body>,
    collisions: &mut CollisionManager,
    body: Body,
    desc: ColliderDesc,
) -> Result<(OwnerId, ColliderHandle), CollisionError> {
    let owner = bodies.insert(body);
    let collider = collisions.create_collider(owner, desc.with_debug_draw(true))?;
    Ok((owner, collider))
}

fn log_events(events: &[CollisionEvent], bodies: &SlotMap<OwnerId, Body>, tick: usize) {
    let name = |owner: OwnerId| bodies.get(owner).map_or("<gone>", |body| body.name);

    for event in events {
        match event.kind {
            CollisionEventKind::Enter => {
                log::info!("[tick {:2}] {} hit {}", tick, name(event.owner_a), name(event.owner_b));
            }
            CollisionEventKind::Exit => {
                log::info!("[tick {:2}] {} left {}", tick, name(event.owner_a), name(event.owner_b));
            }
            CollisionEventKind::Stay => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let config = load_config()?;
    let registry = AttributeRegistry::from_config(&config);
    let mut collisions = CollisionManager::with_config(&config);
    let mut bodies: SlotMap<OwnerId, Body> = SlotMap::with_key();

    println!("=== Arena Collision Demo ===");
    println!("Categories: {}", registry.len());
    println!();

    let (_, player) = spawn(
        &mut bodies,
        &mut collisions,
        Body::new("player", Vec3::new(PLAYER_START, 0.0, 0.0), Vec3::new(CLOSING_SPEED, 0.0, 0.0)),
        ColliderDesc::new(ColliderShape::sphere(1.0)).with_category(&registry, "Player"),
    )?;
    let (_, enemy) = spawn(
        &mut bodies,
        &mut collisions,
        Body::new("enemy", Vec3::new(ENEMY_START, 0.0, 0.0), Vec3::new(-CLOSING_SPEED, 0.0, 0.0)),
        ColliderDesc::new(ColliderShape::cuboid(Vec3::new(1.0, 1.0, 1.0))).with_category(&registry, "Enemy"),
    )?;
    let (weapon_owner, weapon) = spawn(
        &mut bodies,
        &mut collisions,
        Body::new("weapon", Vec3::new(0.0, WEAPON_START_HEIGHT, 0.0), Vec3::new(0.0, -WEAPON_FALL_SPEED, 0.0))
            .with_spin(WEAPON_SPIN),
        ColliderDesc::new(ColliderShape::obb(Vec3::new(1.5, 0.2, 0.2))).with_category(&registry, "Weapon"),
    )?;

    let mut weapon_alive = true;
    for tick in 0..TICKS {
        for body in bodies.values_mut() {
            body.advance(TIMESTEP);
        }

        if tick == WEAPON_TEARDOWN_TICK {
            log::info!("[tick {:2}] tearing down weapon", tick);
            collisions.destroy_collider(weapon, &mut bodies)?;
            bodies.remove(weapon_owner);
            weapon_alive = false;
        }

        collisions.clear_active_colliders();
        collisions.register_active_collider(player);
        collisions.register_active_collider(enemy);
        if weapon_alive {
            collisions.register_active_collider(weapon);
        }

        let events = collisions.run_detection_pass(&mut bodies).to_vec();
        log_events(&events, &bodies, tick);

        // Head-on bodies stop at the meeting point
        if collisions.contact_state(player, enemy) == ContactState::Touching {
            for body in bodies.values_mut() {
                if body.velocity.x != 0.0 {
                    body.velocity = Vec3::zeros();
                }
            }
        }
    }

    println!();
    println!("Touching pairs at end: {}", collisions.touching_pairs().len());
    for (_, body) in &bodies {
        println!("  {:<8} at {:>6.2} {:>6.2} {:>6.2}  contacts: {}",
            body.name, body.position.x, body.position.y, body.position.z, body.contacts);
    }

    collisions.clear(&mut bodies);
    Ok(())
}
