//! The player's ship: a thrust-driven triangle that wraps like the polygons
//! but never collides with them.
//!
//! Heading is in degrees, measured in the world's y-down frame, so a larger
//! angle turns the nose clockwise on screen.

use crate::config::WorldConfig;
use crate::graphics::world_to_screen;
use crate::motion::wrap_position;
use crate::simulation::WorldRng;
use bevy::prelude::*;
use rand::Rng;

/// Ship state.  Stored as a resource; there is exactly one ship.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in degrees.
    pub angle: f32,
}

impl Ship {
    /// A stationary ship at the centre of a `width × height` world.
    pub fn new(width: f32, height: f32, angle: f32) -> Self {
        Self {
            position: Vec2::new((width / 2.0).floor(), (height / 2.0).floor()),
            velocity: Vec2::ZERO,
            angle,
        }
    }

    /// Unit vector along the heading.
    pub fn heading(&self) -> Vec2 {
        let rad = self.angle.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }

    pub fn rotate(&mut self, delta_degrees: f32) {
        self.angle += delta_degrees;
    }

    /// Add `acceleration` world units per tick along the heading.
    pub fn accelerate(&mut self, acceleration: f32) {
        self.velocity += self.heading() * acceleration;
    }

    /// Move, wrap into the world, then damp the velocity by `friction`.
    pub fn update(&mut self, width: f32, height: f32, friction: f32) {
        self.position = wrap_position(self.position + self.velocity, width, height);
        self.velocity *= friction;
    }

    /// Outline as a narrow isosceles triangle: nose at `2·size`, rear corners
    /// at `size / 2` (whole units) either side of the tail.
    pub fn vertices(&self, size: f32) -> [Vec2; 3] {
        let at = |radius: f32, offset: f32| {
            let rad = (self.angle + offset).to_radians();
            self.position + Vec2::new(rad.cos(), rad.sin()) * radius
        };
        let rear = (size / 2.0).floor();
        [at(size * 2.0, 0.0), at(rear, -120.0), at(rear, 120.0)]
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup system: place the ship at the world centre with a whole-degree
/// heading drawn from the world RNG.  Runs after `setup_world`.
pub fn spawn_ship(
    mut commands: Commands,
    config: Res<WorldConfig>,
    mut rng: ResMut<WorldRng>,
) {
    let angle = rng.0.gen_range(0..=360) as f32;
    commands.insert_resource(Ship::new(config.width, config.height, angle));
    println!("✓ Ship spawned at world centre");
}

/// Fixed-step system: D turns clockwise, A counter-clockwise, Space thrusts;
/// then the ship moves.  Reads nothing from the polygon world.
pub fn ship_control_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<WorldConfig>,
    ship: Option<ResMut<Ship>>,
) {
    let Some(mut ship) = ship else {
        return;
    };

    if keys.pressed(KeyCode::KeyD) {
        ship.rotate(config.ship_rotation_speed);
    }
    if keys.pressed(KeyCode::KeyA) {
        ship.rotate(-config.ship_rotation_speed);
    }
    if keys.pressed(KeyCode::Space) {
        ship.accelerate(config.ship_acceleration);
    }
    ship.update(config.width, config.height, config.ship_friction);
}

/// Draw the ship outline with gizmos.
pub fn ship_gizmo_system(mut gizmos: Gizmos, config: Res<WorldConfig>, ship: Option<Res<Ship>>) {
    let Some(ship) = ship else {
        return;
    };
    let verts = ship.vertices(config.ship_size);
    for i in 0..verts.len() {
        let p1 = world_to_screen(verts[i], config.width, config.height);
        let p2 = world_to_screen(verts[(i + 1) % verts.len()], config.width, config.height);
        gizmos.line_2d(p1, p2, Color::WHITE);
    }
}
