//! Tooth placeholders - spawning, pointer picking, hover easing and highlight

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use smilearch_core::layout::{tooth_position, tooth_yaw};
use smilearch_core::motion::ToothMotion;
use smilearch_core::{ToothId, ToothKind};

use crate::camera::MainCamera;
use crate::types::*;

pub struct TeethPlugin;

impl Plugin for TeethPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .add_systems(Startup, spawn_arch)
            .add_systems(Update, (
                update_tooth_hover,
                handle_tooth_click,
                animate_teeth,
                update_tooth_materials,
                rotate_arch,
            ).chain());
    }
}

/// Parent of all 32 teeth; rotates while the page is idle
#[derive(Component)]
pub struct ArchRoot;

/// A clickable tooth placeholder
#[derive(Component, Debug, Clone, Copy)]
pub struct ToothEntity {
    pub id: ToothId,
}

/// Hover flag and eased scale of a placeholder
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct ToothAnimation(pub ToothMotion);

/// Shared materials for the three visual states
#[derive(Resource)]
pub struct ToothMaterials {
    pub base: Handle<StandardMaterial>,
    pub hover: Handle<StandardMaterial>,
    pub active: Handle<StandardMaterial>,
}

/// Track touch state for tap detection
#[derive(Resource, Default)]
pub struct TouchState {
    /// Position where touch started
    start_position: Option<Vec2>,
    /// Whether this touch has moved significantly (is a drag, not a tap)
    is_dragging: bool,
}

fn placeholder_mesh(kind: ToothKind) -> Mesh {
    match kind {
        ToothKind::Molar => Cuboid::new(0.3, 0.3, 0.32).into(),
        ToothKind::Premolar => Cuboid::new(0.24, 0.32, 0.26).into(),
        ToothKind::Canine => Capsule3d::new(0.1, 0.2).into(),
        ToothKind::Incisor => Cuboid::new(0.26, 0.36, 0.1).into(),
    }
}

fn spawn_arch(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<LandingSettings>,
) {
    let tooth_materials = ToothMaterials {
        base: materials.add(StandardMaterial {
            base_color: Color::srgb(0.95, 0.93, 0.86),
            perceptual_roughness: 0.35,
            reflectance: 0.6,
            ..default()
        }),
        hover: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 0.97),
            emissive: bevy::color::LinearRgba::new(0.08, 0.08, 0.07, 1.0),
            perceptual_roughness: 0.3,
            reflectance: 0.7,
            ..default()
        }),
        active: materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.72, 0.7),
            emissive: bevy::color::LinearRgba::new(0.04, 0.2, 0.19, 1.0),
            perceptual_roughness: 0.3,
            ..default()
        }),
    };

    let kind_meshes: Vec<(ToothKind, Handle<Mesh>)> = [
        ToothKind::Molar,
        ToothKind::Premolar,
        ToothKind::Canine,
        ToothKind::Incisor,
    ]
    .into_iter()
    .map(|kind| (kind, meshes.add(placeholder_mesh(kind))))
    .collect();

    let arch = &settings.arch;
    let base = tooth_materials.base.clone();

    commands
        .spawn((Transform::default(), Visibility::default(), ArchRoot))
        .with_children(|parent| {
            for id in ToothId::all() {
                let kind = ToothKind::of(id);
                let Some((_, mesh)) = kind_meshes.iter().find(|(k, _)| *k == kind) else {
                    continue;
                };

                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(base.clone()),
                    Transform::from_translation(Vec3::from_array(tooth_position(id, arch)))
                        .with_rotation(Quat::from_rotation_y(tooth_yaw(id, arch))),
                    ToothEntity { id },
                    ToothAnimation::default(),
                ));
            }
        });

    commands.insert_resource(tooth_materials);
    tracing::info!("Spawned dental arch with {} teeth", ToothId::all().count());
}

/// Nearest tooth hit by a ray, front-most first
pub fn pick_nearest(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (ToothId, Vec3)>,
    radius: f32,
) -> Option<ToothId> {
    let mut closest: Option<(f32, ToothId)> = None;

    for (id, center) in candidates {
        let to_center = center - ray.origin;
        let t = to_center.dot(*ray.direction);
        if t < 0.0 {
            continue;
        }

        let closest_point = ray.origin + *ray.direction * t;
        if (closest_point - center).length_squared() > radius * radius {
            continue;
        }

        if closest.is_none_or(|(best, _)| t < best) {
            closest = Some((t, id));
        }
    }

    closest.map(|(_, id)| id)
}

fn egui_has_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
        .unwrap_or(false)
}

fn pick_at(
    screen_pos: Vec2,
    camera_query: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    teeth: impl IntoIterator<Item = (ToothId, Vec3)>,
    radius: f32,
) -> Option<ToothId> {
    let (camera, camera_transform) = camera_query.single().ok()?;
    let ray = camera.viewport_to_world(camera_transform, screen_pos).ok()?;
    pick_nearest(ray, teeth, radius)
}

/// Track which tooth is under the cursor
fn update_tooth_hover(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut teeth: Query<(&ToothEntity, &GlobalTransform, &mut ToothAnimation)>,
    mut hovered: ResMut<HoveredTooth>,
    settings: Res<LandingSettings>,
    mut contexts: EguiContexts,
) {
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    let hit = match cursor {
        Some(pos) if !egui_has_pointer(&mut contexts) => pick_at(
            pos,
            &camera_query,
            teeth.iter().map(|(tooth, transform, _)| (tooth.id, transform.translation())),
            settings.motion.pick_radius,
        ),
        _ => None,
    };

    for (tooth, _, mut animation) in teeth.iter_mut() {
        let is_hovered = hit == Some(tooth.id);
        if animation.hovered != is_hovered {
            animation.hovered = is_hovered;
        }
    }

    if hovered.0 != hit {
        hovered.0 = hit;
    }
}

/// Handle tooth selection via mouse click or touch tap
fn handle_tooth_click(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    teeth: Query<(&ToothEntity, &GlobalTransform)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut touch_state: ResMut<TouchState>,
    settings: Res<LandingSettings>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<SelectionRequest>,
) {
    if egui_has_pointer(&mut contexts) {
        return;
    }

    let mut selection_pos: Option<Vec2> = None;

    if let Some(touch) = touch_input.iter().next() {
        if touch_input.just_pressed(touch.id()) {
            touch_state.start_position = Some(touch.position());
            touch_state.is_dragging = false;
        } else if let Some(start) = touch_state.start_position {
            // More than 10 pixels is a drag, not a tap
            if touch.position().distance(start) > 10.0 {
                touch_state.is_dragging = true;
            }
        }
    }

    for touch in touch_input.iter_just_released() {
        if !touch_state.is_dragging {
            selection_pos = touch_state.start_position.or(Some(touch.position()));
        }
        touch_state.start_position = None;
        touch_state.is_dragging = false;
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(cursor_pos) = windows.single().ok().and_then(|w| w.cursor_position()) {
            selection_pos = Some(cursor_pos);
        }
    }

    let Some(pos) = selection_pos else { return };

    let hit = pick_at(
        pos,
        &camera_query,
        teeth.iter().map(|(tooth, transform)| (tooth.id, transform.translation())),
        settings.motion.pick_radius,
    );

    if let Some(id) = hit {
        requests.write(SelectionRequest::select(id, SelectionSource::Scene));
    }
}

/// Ease each tooth's scale toward its hover/active target
fn animate_teeth(
    time: Res<Time>,
    selected: Res<SelectedTooth>,
    settings: Res<LandingSettings>,
    mut teeth: Query<(&ToothEntity, &mut ToothAnimation, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (tooth, mut animation, mut transform) in teeth.iter_mut() {
        let scale = animation.step(selected.is_active(tooth.id), dt, &settings.motion);
        transform.scale = Vec3::splat(scale);
    }
}

/// Swap materials so the active tooth stands out
fn update_tooth_materials(
    selected: Res<SelectedTooth>,
    materials: Option<Res<ToothMaterials>>,
    mut teeth: Query<(&ToothEntity, &ToothAnimation, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Some(materials) = materials else { return };

    for (tooth, animation, mut material) in teeth.iter_mut() {
        let wanted = if selected.is_active(tooth.id) {
            &materials.active
        } else if animation.hovered {
            &materials.hover
        } else {
            &materials.base
        };

        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

/// Slowly turn the arch while nobody is interacting with it
fn rotate_arch(
    time: Res<Time>,
    settings: Res<LandingSettings>,
    hovered: Res<HoveredTooth>,
    selected: Res<SelectedTooth>,
    mut roots: Query<&mut Transform, With<ArchRoot>>,
) {
    if hovered.0.is_some() || !selected.is_empty() {
        return;
    }

    let angle = settings.arch.auto_rotate_speed * time.delta_secs();
    for mut transform in roots.iter_mut() {
        transform.rotate_y(angle);
    }
}
