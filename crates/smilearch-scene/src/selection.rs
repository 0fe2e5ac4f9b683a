//! Selection wiring - applies selection requests and drives the panel fade

use bevy::prelude::*;
use smilearch_core::SelectionAction;
use tracing::info;

use crate::types::*;

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SelectionRequest>()
            .add_message::<AppointmentRequested>()
            .add_systems(Startup, apply_initial_selection)
            .add_systems(Update, (
                handle_escape_dismiss,
                apply_selection_requests,
                update_panel_fade,
                log_appointment_requests,
            ).chain());
    }
}

/// Turn a deep-linked tooth into an ordinary selection request
fn apply_initial_selection(
    initial: Res<InitialSelection>,
    mut requests: MessageWriter<SelectionRequest>,
) {
    if let Some(id) = initial.0 {
        requests.write(SelectionRequest::select(id, SelectionSource::DeepLink));
    }
}

/// Escape closes the info panel
fn handle_escape_dismiss(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    selected: Res<SelectedTooth>,
    mut requests: MessageWriter<SelectionRequest>,
) {
    let Some(keyboard) = keyboard else { return };
    if keyboard.just_pressed(KeyCode::Escape) && !selected.is_empty() {
        requests.write(SelectionRequest::dismiss(SelectionSource::Keyboard));
    }
}

/// Apply selection requests in the order they were sent
pub fn apply_selection_requests(
    mut requests: MessageReader<SelectionRequest>,
    mut selected: ResMut<SelectedTooth>,
    catalog: Res<ToothCatalog>,
    mut layout: Option<ResMut<UiLayout>>,
) {
    for request in requests.read() {
        // Repeat picks of the active tooth still bring its card forward
        if let (SelectionAction::Select(_), Some(layout)) = (request.action, layout.as_mut()) {
            layout.on_tooth_selected();
        }

        // Only flag the resource as changed when the state really moves
        if !selected.bypass_change_detection().0.apply(request.action) {
            continue;
        }
        selected.set_changed();

        match selected.active() {
            Some(id) => {
                let name = catalog.get(id).map(|r| r.name.as_str()).unwrap_or("unknown");
                info!(tooth = %id, source = ?request.source, "Selected {}", name);
            }
            None => info!(source = ?request.source, "Selection dismissed"),
        }
    }
}

/// Ease the info panel opacity toward the current selection
fn update_panel_fade(
    time: Res<Time>,
    selected: Res<SelectedTooth>,
    settings: Res<LandingSettings>,
    mut panel: ResMut<PanelState>,
) {
    let before = panel.0;
    let mut fade = before;
    fade.step(&selected.0, time.delta_secs(), settings.motion.panel_fade_speed);
    if fade != before {
        panel.0 = fade;
    }
}

/// Booking is not wired to a backend; the request is only recorded
fn log_appointment_requests(mut requests: MessageReader<AppointmentRequested>) {
    for request in requests.read() {
        info!(tooth = %request.tooth, "Appointment requested");
    }
}
