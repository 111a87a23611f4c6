use bevy::prelude::*;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d maps one world unit to one logical pixel, centred on the origin
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}

/// Map a y-down world coordinate in `[0, width) × [0, height)` to the
/// centred, y-up frame the 2D camera renders.
pub fn world_to_screen(point: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(point.x - width / 2.0, height / 2.0 - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_is_top_left_of_screen() {
        assert_eq!(world_to_screen(Vec2::ZERO, 800.0, 600.0), Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn world_centre_is_screen_origin() {
        assert_eq!(world_to_screen(Vec2::new(400.0, 300.0), 800.0, 600.0), Vec2::ZERO);
    }
}
