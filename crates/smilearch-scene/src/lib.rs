//! SmileArch Scene - Shared 3D arch rendering and landing page UI
//!
//! This crate provides the interactive view used by both the browser build
//! (smilearch-web) and the native build (smilearch-desktop): the rotating
//! dental arch, pointer picking, the selection wiring and the egui panels.

pub mod camera;
pub mod scene;
pub mod selection;
pub mod teeth;
pub mod types;
pub mod ui;

use bevy::prelude::*;

/// Plugin that sets up the shared 3D scene and its state
pub struct SmileArchScenePlugin;

impl Plugin for SmileArchScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LandingSettings>()
            .init_resource::<ToothCatalog>()
            .init_resource::<SelectedTooth>()
            .init_resource::<HoveredTooth>()
            .init_resource::<SearchQuery>()
            .init_resource::<PanelState>()
            .init_resource::<UiLayout>()
            .init_resource::<InitialSelection>()
            .add_plugins(camera::CameraPlugin)
            .add_plugins(scene::SceneSetupPlugin)
            .add_plugins(teeth::TeethPlugin)
            .add_plugins(selection::SelectionPlugin);
    }
}

// Re-export commonly used types
pub use camera::CameraSettings;
pub use types::*;
pub use ui::UiPlugin;
