//! Bevy application setup for a native window

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::{prelude::MeshPickingPlugin, DefaultPickingPlugins};
use smilearch_core::{LandingConfig, ToothId};
use smilearch_scene::{InitialSelection, LandingSettings, SmileArchScenePlugin, UiPlugin};

/// Run the Bevy application until the window closes
pub fn run(config: LandingConfig, initial: Option<ToothId>) {
    let title = config.clinic.name.clone();

    App::new()
        .insert_resource(LandingSettings(config))
        .insert_resource(InitialSelection(initial))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                ..default()
            }),
            ..default()
        }))
        // Picking must be added BEFORE EguiPlugin so it can detect PickingPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(EguiPlugin::default())
        .add_plugins(SmileArchScenePlugin)
        .add_plugins(UiPlugin)
        .run();
}
