//! Camera controls and orbit navigation

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Camera controller settings
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32, // For smooth zoom
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 7.5,
            target_distance: 7.5,
            azimuth: 0.0,
            elevation: 0.3, // Looking slightly down into the arch
            target: Vec3::new(0.0, 0.0, -0.3),
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
            min_distance: 3.0,
            max_distance: 14.0,
        }
    }
}

impl CameraSettings {
    /// Camera position on the orbit sphere (Y up)
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.elevation.cos() * self.azimuth.sin();
        let y = self.distance * self.elevation.sin();
        let z = self.distance * self.elevation.cos() * self.azimuth.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * self.sensitivity;
        self.elevation = (self.elevation + delta.y * self.sensitivity).clamp(-1.2, 1.2);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.target_distance = (self.target_distance * factor).clamp(self.min_distance, self.max_distance);
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera controls
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, update_camera);
    }
}

fn spawn_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(settings.eye()).looking_at(settings.target, Vec3::Y),
        MainCamera,
    ));
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    time: Res<Time>,
    mut contexts: EguiContexts,
) {
    // Check if egui wants the mouse - if so, don't process camera controls
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    // Orbit with left mouse drag
    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.orbit(total_motion);
    }

    // Zoom with scroll; drain events even when the UI has the pointer
    for scroll in mouse_wheel.read() {
        if !egui_wants_pointer {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.zoom(zoom_factor);
        }
    }

    // One finger orbits
    if touch_input.iter().count() == 1 && !egui_wants_pointer {
        for touch in touch_input.iter() {
            let delta = touch.delta();
            if delta != Vec2::ZERO {
                settings.orbit(delta);
            }
        }
    }

    // Pinch to zoom
    if touch_input.iter().count() == 2 {
        let touches: Vec<_> = touch_input.iter().collect();
        if let (Some(t1), Some(t2)) = (touches.first(), touches.get(1)) {
            let curr_dist = t1.position().distance(t2.position());
            let prev_dist = (t1.position() - t1.delta()).distance(t2.position() - t2.delta());
            settings.zoom(prev_dist / curr_dist.max(1.0));
        }
    }

    // Smooth zoom
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance = settings.distance + (settings.target_distance - settings.distance) * lerp_factor;

    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation = settings.eye();
        transform.look_at(settings.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye_in_front_and_above() {
        let settings = CameraSettings::default();
        let eye = settings.eye();
        assert!(eye.z > settings.target.z);
        assert!(eye.y > 0.0);
        assert!((eye.distance(settings.target) - settings.distance).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_and_orbit_are_clamped() {
        let mut settings = CameraSettings::default();
        settings.zoom(100.0);
        assert_eq!(settings.target_distance, settings.max_distance);
        settings.zoom(0.0001);
        assert_eq!(settings.target_distance, settings.min_distance);

        settings.orbit(Vec2::new(0.0, 10_000.0));
        assert_eq!(settings.elevation, 1.2);
    }
}
