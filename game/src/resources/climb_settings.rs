use bevy::prelude::*;

/// World frame, physics and camera tuning for a run.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct ClimbSettings {
    pub scene_size: Vec2,
    pub units_per_meter: f32,
    /// Applied while the player is rising.
    pub rise_gravity: f32,
    /// Applied while the player is falling or at rest.
    pub fall_gravity: f32,
    pub jump_speed: f32,
    pub spring_jump_multiplier: f32,
    pub steer_gain: f32,
    pub max_steer_speed: f32,
    pub wall_x: f32,
    pub player_size: Vec2,
    pub player_start_x: f32,
    pub camera_start_y: f32,
    pub camera_vertical_offset: f32,
    pub camera_lerp: f32,
    /// Extra distance below the view before things count as gone.
    pub offscreen_margin: f32,
    pub base_floor_y: f32,
    pub base_floor_height: f32,
}

impl Default for ClimbSettings {
    fn default() -> Self {
        Self {
            scene_size: Vec2::new(750.0, 1334.0),
            units_per_meter: 150.0,
            rise_gravity: -4.0,
            fall_gravity: -10.0,
            jump_speed: 800.0,
            spring_jump_multiplier: 1.8,
            steer_gain: 8.0,
            max_steer_speed: 900.0,
            wall_x: 340.0,
            player_size: Vec2::new(64.0, 64.0),
            player_start_x: 0.0,
            camera_start_y: 400.0,
            camera_vertical_offset: 200.0,
            camera_lerp: 0.05,
            offscreen_margin: 100.0,
            base_floor_y: -200.0,
            base_floor_height: 300.0,
        }
    }
}

impl ClimbSettings {
    /// Gravity in world units per second squared for the current vertical velocity.
    pub fn gravity_for(&self, vertical_velocity: f32) -> f32 {
        let meters = if vertical_velocity > 0.0 { self.rise_gravity } else { self.fall_gravity };
        meters * self.units_per_meter
    }

    pub fn half_view_height(&self) -> f32 {
        self.scene_size.y / 2.0
    }

    pub fn platform_size(&self) -> Vec2 {
        Vec2::new(self.scene_size.x / 10.0, 30.0)
    }

    pub fn base_floor_size(&self) -> Vec2 {
        Vec2::new(self.scene_size.x, self.base_floor_height)
    }

    /// The player rests two sprite heights above the floor's centre line.
    pub fn player_start(&self) -> Vec2 {
        let y = -(self.base_floor_height / 2.0) + self.player_size.y * 2.0 + 10.0;
        Vec2::new(self.player_start_x, y)
    }

    pub fn spring_jump_speed(&self) -> f32 {
        self.jump_speed * self.spring_jump_multiplier
    }

    /// True once something with bottom reference `y - height` has fallen out of view.
    pub fn is_below_view(&self, camera_y: f32, y: f32, height: f32) -> bool {
        camera_y - (y - height) > self.half_view_height() + self.offscreen_margin
    }

    /// Frame-rate independent step of the upward-only camera follow.
    pub fn follow_camera(&self, camera_y: f32, player_y: f32, dt: f32) -> f32 {
        let target_y = (player_y + self.camera_vertical_offset).max(camera_y);
        let t = 1.0 - (1.0 - self.camera_lerp).powf(dt * 60.0);
        camera_y + (target_y - camera_y) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_floats_while_rising_and_drops_while_falling() {
        let settings = ClimbSettings::default();
        assert_eq!(settings.gravity_for(10.0), -600.0);
        assert_eq!(settings.gravity_for(0.0), -1500.0);
        assert_eq!(settings.gravity_for(-250.0), -1500.0);
    }

    #[test]
    fn camera_never_moves_down() {
        let settings = ClimbSettings::default();
        let y = settings.follow_camera(1000.0, 0.0, 1.0 / 60.0);
        assert_eq!(y, 1000.0);
    }

    #[test]
    fn camera_steps_five_percent_per_frame() {
        let settings = ClimbSettings::default();
        let y = settings.follow_camera(400.0, 400.0, 1.0 / 60.0);
        assert!((y - 410.0).abs() < 1e-3);
    }

    #[test]
    fn camera_converges_on_offset_target() {
        let settings = ClimbSettings::default();
        let mut camera_y = 400.0;
        for _ in 0..600 {
            camera_y = settings.follow_camera(camera_y, 1000.0, 1.0 / 60.0);
        }
        assert!((camera_y - 1200.0).abs() < 0.5);
    }

    #[test]
    fn below_view_uses_margin() {
        let settings = ClimbSettings::default();
        // 667 half height + 100 margin
        assert!(!settings.is_below_view(1000.0, 263.0, 30.0));
        assert!(settings.is_below_view(1000.0, 262.0, 30.0));
    }

    #[test]
    fn player_starts_on_top_of_base_floor() {
        let settings = ClimbSettings::default();
        assert_eq!(settings.player_start(), Vec2::new(0.0, -12.0));
        assert_eq!(settings.platform_size(), Vec2::new(75.0, 30.0));
    }
}
