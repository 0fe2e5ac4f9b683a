//! Bevy application setup for the browser

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use bevy_egui::EguiPlugin;
use bevy_picking::{prelude::MeshPickingPlugin, DefaultPickingPlugins};
use smilearch_core::ToothId;
use smilearch_scene::{InitialSelection, SmileArchScenePlugin, UiLayout, UiPlugin};
use std::time::Duration;

/// Run the Bevy application
pub fn run() {
    let initial = deep_link_param().and_then(|value| tooth_from_param(&value));

    App::new()
        .insert_resource(WinitSettings::default())
        .insert_resource(InitialSelection(initial))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SmileArch Dental".to_string(),
                canvas: Some("#smilearch-canvas".to_string()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
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
        .add_systems(Update, adjust_power_settings_for_mobile)
        .run();
}

/// Parse the `?tooth=` value, ignoring anything that is not a tooth number
fn tooth_from_param(value: &str) -> Option<ToothId> {
    match value.parse::<ToothId>() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("Ignoring tooth deep link: {}", e);
            None
        }
    }
}

/// Read `?tooth=` from the page URL
#[cfg(target_arch = "wasm32")]
fn deep_link_param() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get("tooth")
}

#[cfg(not(target_arch = "wasm32"))]
fn deep_link_param() -> Option<String> {
    None
}

/// On mobile, use power saving mode. On desktop, render continuously so the arch keeps turning.
fn adjust_power_settings_for_mobile(layout: Res<UiLayout>, mut winit_settings: ResMut<WinitSettings>) {
    if !layout.is_changed() {
        return;
    }

    if layout.is_mobile {
        winit_settings.focused_mode = UpdateMode::reactive_low_power(Duration::from_millis(33));
        winit_settings.unfocused_mode = UpdateMode::reactive_low_power(Duration::from_millis(500));
    } else {
        *winit_settings = WinitSettings::default();
    }
}
