//! Simulation plugin and systems for Bevy ECS.
//!
//! ## System Responsibilities
//!
//! | System                  | Schedule     | Purpose                                  |
//! |-------------------------|--------------|------------------------------------------|
//! | `setup_world`           | Startup      | Seed the RNG, place the initial polygons |
//! | `spawn_ship`            | Startup      | Insert the ship, heading from `WorldRng` |
//! | `setup_stats_text`      | Startup      | Spawn the stats overlay node             |
//! | `ship_control_system`   | FixedUpdate  | Ship input, thrust, move                 |
//! | `tick_world_system`     | FixedUpdate  | Integrate, detect, resolve               |
//! | `click_spawn_system`    | Update       | Left click places a polygon at cursor    |
//! | `gizmo_rendering_system`| Update       | Polygon wireframes                       |
//! | `ship_gizmo_system`     | Update       | Ship wireframe                           |
//! | `stats_display_system`  | Update       | Refresh the stats overlay text           |
//!
//! Velocities are world units per tick, so the fixed timestep (`tick_rate_hz`)
//! sets the apparent speed.

use crate::config::WorldConfig;
use crate::constants::TICK_RATE_HZ;
use crate::graphics::{setup_camera, world_to_screen};
use crate::ship::{ship_control_system, ship_gizmo_system, spawn_ship};
use crate::world::{create_world, PolygonWorld, TickReport};
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let tick_rate = app
            .world()
            .get_resource::<WorldConfig>()
            .map_or(TICK_RATE_HZ, |c| c.tick_rate_hz);

        app.init_resource::<WorldConfig>()
            .init_resource::<SimulationStats>()
            .insert_resource(Time::<Fixed>::from_hz(tick_rate))
            .add_systems(
                Startup,
                (
                    setup_camera,
                    (setup_world, spawn_ship).chain(),
                    setup_stats_text,
                ),
            )
            .add_systems(
                FixedUpdate,
                (ship_control_system, tick_world_system).chain(),
            )
            .add_systems(
                Update,
                (
                    click_spawn_system,
                    gizmo_rendering_system,
                    ship_gizmo_system,
                    stats_display_system,
                ),
            );
    }
}

/// RNG used for every runtime random draw on the polygon world.
#[derive(Resource)]
pub struct WorldRng(pub StdRng);

impl WorldRng {
    /// Seeded when `seed` is set, otherwise from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Running totals shown in the stats overlay.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimulationStats {
    pub ticks: u64,
    pub bodies: usize,
    pub last_tick: TickReport,
    pub collisions_total: u64,
    pub nudges_total: u64,
    pub degenerate_total: u64,
    pub spawn_rejections: u64,
}

impl SimulationStats {
    pub fn record(&mut self, report: &TickReport, bodies: usize) {
        self.ticks += 1;
        self.bodies = bodies;
        self.last_tick = *report;
        self.collisions_total += report.collisions as u64;
        self.nudges_total += report.nudged as u64;
        self.degenerate_total += report.degenerate as u64;
    }
}

/// Marker for the stats text root node.
#[derive(Component)]
pub struct StatsTextDisplay;

// ── Startup ───────────────────────────────────────────────────────────────────

/// Build the initial world from `WorldConfig`.
///
/// A placement failure (only possible with a retry cap) is logged and the
/// simulation continues with an empty world rather than aborting.
pub fn setup_world(mut commands: Commands, config: Res<WorldConfig>) {
    let mut rng = WorldRng::from_seed(config.seed);
    let world = match create_world(&config, &mut rng.0) {
        Ok(world) => world,
        Err(err) => {
            error!("Failed to create world: {}", err);
            PolygonWorld::from_polygons(&config, Vec::new())
        }
    };
    println!("✓ Placed {} polygons", world.polygons().len());
    commands.insert_resource(world);
    commands.insert_resource(rng);
}

pub fn setup_stats_text(mut commands: Commands, config: Res<WorldConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            StatsTextDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Bodies: 0 | Tick: 0 | Contacts: 0"),
                TextFont {
                    font_size: config.stats_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 1.0)),
            ));
        });
}

// ── Fixed step ────────────────────────────────────────────────────────────────

/// Advance the polygon world by one tick and record the report.
pub fn tick_world_system(
    world: Option<ResMut<PolygonWorld>>,
    mut stats: ResMut<SimulationStats>,
) {
    let Some(mut world) = world else {
        return;
    };
    let report = world.tick();
    stats.record(&report, world.polygons().len());
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Left click places a new polygon centred on the cursor, if the spot is free.
pub fn click_spawn_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    world: Option<ResMut<PolygonWorld>>,
    rng: Option<ResMut<WorldRng>>,
    mut stats: ResMut<SimulationStats>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let (Some(mut world), Some(mut rng)) = (world, rng) else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    // Cursor coordinates are already y-down from the top-left, like the world.
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    match world.spawn_polygon_at(&mut rng.0, cursor) {
        Some(index) => info!("Spawned polygon {} at {:?}", index, cursor),
        None => {
            stats.spawn_rejections += 1;
            info!("Spot {:?} is occupied; polygon not spawned", cursor);
        }
    }
}

/// Render polygon outlines using gizmos.
pub fn gizmo_rendering_system(mut gizmos: Gizmos, world: Option<Res<PolygonWorld>>) {
    let Some(world) = world else {
        return;
    };
    let (width, height) = (world.width(), world.height());
    let base = world.config().base_edge_length;
    for polygon in world.polygons() {
        let verts = polygon.vertices(base);
        for i in 0..verts.len() {
            let p1 = world_to_screen(verts[i], width, height);
            let p2 = world_to_screen(verts[(i + 1) % verts.len()], width, height);
            gizmos.line_2d(p1, p2, Color::WHITE);
        }
    }
}

pub fn stats_display_system(
    stats: Res<SimulationStats>,
    parent_query: Query<&Children, With<StatsTextDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!(
                    "Bodies: {} | Tick: {} | Contacts: {} | Total: {} | Nudged: {}",
                    stats.bodies,
                    stats.ticks,
                    stats.last_tick.collisions,
                    stats.collisions_total,
                    stats.nudges_total
                ));
            }
        }
    }
}
