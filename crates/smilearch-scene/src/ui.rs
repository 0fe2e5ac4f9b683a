//! Landing page UI overlays using bevy_egui

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use smilearch_core::{filter, InfoCard, Selection, ToothId, ToothRecord};

use crate::types::*;

/// Accent color shared with the active tooth material
const ACCENT: egui::Color32 = egui::Color32::from_rgb(51, 184, 179);

/// Grouped system parameters for the landing UI
#[derive(SystemParam)]
pub struct UiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub settings: Res<'w, LandingSettings>,
    pub catalog: Res<'w, ToothCatalog>,
    pub selected: Res<'w, SelectedTooth>,
    pub panel: Res<'w, PanelState>,
    pub query: ResMut<'w, SearchQuery>,
    pub ui_layout: ResMut<'w, UiLayout>,
    pub requests: MessageWriter<'w, SelectionRequest>,
    pub appointments: MessageWriter<'w, AppointmentRequested>,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // UI layout updates run in Update
        app.add_systems(Update, update_ui_layout)
            // Main UI system runs in EguiPrimaryContextPass for proper input handling
            .add_systems(EguiPrimaryContextPass, ui_system);
    }
}

/// Update UI layout based on window size
fn update_ui_layout(windows: Query<&Window>, mut ui_layout: ResMut<UiLayout>) {
    if let Ok(window) = windows.single() {
        let width = window.width();
        let height = window.height();

        // Only update if dimensions changed significantly
        if (ui_layout.screen_width - width).abs() > 1.0
            || (ui_layout.screen_height - height).abs() > 1.0
        {
            ui_layout.update_for_screen(width, height);
        }
    }
}

/// What the user did on the info card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoCardAction {
    None,
    Dismiss,
    BookAppointment,
}

/// Buttons on a closing card are inert
pub fn card_effect(action: InfoCardAction, closing: bool) -> InfoCardAction {
    if closing {
        InfoCardAction::None
    } else {
        action
    }
}

/// Roomier touch spacing in mobile mode, egui defaults otherwise
fn apply_layout_style(ctx: &egui::Context, is_mobile: bool) {
    let defaults = egui::Style::default().spacing;
    let mut style = (*ctx.style()).clone();
    if is_mobile {
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    } else {
        style.spacing.button_padding = defaults.button_padding;
        style.spacing.item_spacing = defaults.item_spacing;
    }
    ctx.set_style(style);
}

fn ui_system(mut params: UiParams, mut styled_mobile: Local<Option<bool>>) {
    let is_mobile = params.ui_layout.is_mobile;
    let ui_scale = params.ui_layout.ui_scale();

    let Ok(ctx) = params.contexts.ctx_mut() else { return };

    if *styled_mobile != Some(is_mobile) {
        apply_layout_style(ctx, is_mobile);
        *styled_mobile = Some(is_mobile);
    }

    // Header with clinic copy
    egui::TopBottomPanel::top("hero_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&params.settings.clinic.name)
                        .size(13.0 * ui_scale)
                        .color(ACCENT)
                        .strong(),
                );
                ui.heading(egui::RichText::new(&params.settings.clinic.headline).size(22.0 * ui_scale));
                if !is_mobile {
                    ui.label(egui::RichText::new(&params.settings.clinic.tagline).weak());
                }
            });

            if is_mobile {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if params.ui_layout.show_search_panel { "✕ Tips" } else { "☰ Tips" };
                    if ui.button(egui::RichText::new(label).size(15.0 * ui_scale)).clicked() {
                        params.ui_layout.toggle_search_panel();
                    }
                });
            }
        });
        ui.add_space(6.0);
    });

    // Hints (desktop only)
    if !is_mobile {
        egui::TopBottomPanel::bottom("hint_panel")
            .max_height(60.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Drag to rotate | Scroll to zoom | Click a tooth for a care tip | Esc closes the card");
                });
            });
    }

    // Tip search (left side)
    if !is_mobile || params.ui_layout.show_search_panel {
        egui::SidePanel::left("tips_panel")
            .default_width(params.ui_layout.panel_width())
            .resizable(!is_mobile)
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new("Pregnancy care tips").size(18.0 * ui_scale));
                ui.separator();

                ui.add(
                    egui::TextEdit::singleline(&mut params.query.0)
                        .hint_text("Search teeth or tips...")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);

                let results = filter(params.catalog.0, &params.query.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(id) = render_search_results(ui, &results, &params.selected.0) {
                        params
                            .requests
                            .write(SelectionRequest::select(id, SelectionSource::SearchResult));
                    }
                });
            });
    }

    // Info card (top right), kept on screen while it fades out
    let panel = params.panel.0;
    if !panel.is_visible() || !params.ui_layout.card_visible() {
        return;
    }
    let Some(card) = panel.card(&params.selected.0, params.catalog.0) else { return };

    let card_width = params.ui_layout.card_width();
    let closing = panel.is_closing(&params.selected.0);
    let frame = egui::Frame::window(&ctx.style()).multiply_with_opacity(panel.opacity);

    let mut action = InfoCardAction::None;
    egui::Window::new("Tooth details")
        .id(egui::Id::new("tooth_card"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .frame(frame)
        .min_width(card_width)
        .max_width(card_width)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            ui.multiply_opacity(panel.opacity);
            action = render_info_card(ui, &card, ui_scale);
        });

    match card_effect(action, closing) {
        InfoCardAction::Dismiss => {
            params
                .requests
                .write(SelectionRequest::dismiss(SelectionSource::InfoPanel));
        }
        InfoCardAction::BookAppointment => {
            params.appointments.write(AppointmentRequested { tooth: card.id });
        }
        InfoCardAction::None => {}
    }
}

/// Render the filtered tooth list; returns the id the user clicked
pub fn render_search_results(
    ui: &mut egui::Ui,
    results: &[&ToothRecord],
    selection: &Selection,
) -> Option<ToothId> {
    if results.is_empty() {
        ui.label(egui::RichText::new("No matching tips").italics().weak());
        return None;
    }

    let mut clicked = None;
    for record in results {
        let is_active = selection.is_active(record.id);
        let title = egui::RichText::new(format!("{}. {}", record.id, record.name)).strong();
        if ui.selectable_label(is_active, title).clicked() {
            clicked = Some(record.id);
        }
        ui.label(egui::RichText::new(record.tip).small().weak());
        ui.add_space(6.0);
    }
    clicked
}

/// Render the card for the active tooth
pub fn render_info_card(ui: &mut egui::Ui, card: &InfoCard<'_>, ui_scale: f32) -> InfoCardAction {
    let mut action = InfoCardAction::None;

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(card.name).size(18.0 * ui_scale));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(egui::RichText::new("✕").size(16.0 * ui_scale)).clicked() {
                action = InfoCardAction::Dismiss;
            }
        });
    });
    ui.label(
        egui::RichText::new(format!("Tooth #{} · {}", card.id, card.kind.label()))
            .small()
            .color(ACCENT),
    );

    ui.separator();
    ui.label(egui::RichText::new(card.tip).size(14.0 * ui_scale));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(card.disclaimer).small().italics().weak());
    ui.add_space(8.0);

    let book = egui::Button::new(
        egui::RichText::new("Book an appointment")
            .color(egui::Color32::WHITE)
            .size(14.0 * ui_scale),
    )
    .fill(ACCENT);
    if ui.add(book).clicked() {
        action = InfoCardAction::BookAppointment;
    }

    action
}
