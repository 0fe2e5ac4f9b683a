//! Scene setup - lights and the gum platform under the arch

use bevy::prelude::*;

/// Marker component for the main directional light
#[derive(Component)]
pub struct MainDirectionalLight;

/// Marker for the soft platform the arch floats above
#[derive(Component)]
pub struct Backdrop;

/// Plugin for scene setup
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.96, 0.97, 0.99)))
            .add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 0.98, 0.96),
        brightness: 400.0,
        ..default()
    });

    // Key light from above and in front
    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(3.0, 6.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainDirectionalLight,
    ));

    // Cool fill from the side
    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            shadows_enabled: false,
            color: Color::srgb(0.85, 0.93, 1.0),
            ..default()
        },
        Transform::from_xyz(-4.0, 2.0, 3.0),
    ));

    // Platform disc under the lower arch
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(4.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.93, 0.88, 0.9),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -1.2, -0.4).with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        Backdrop,
    ));
}
