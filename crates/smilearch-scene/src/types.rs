//! Shared resources and messages for the arch view

use bevy::prelude::*;
use smilearch_core::{catalog, Catalog, LandingConfig, PanelFade, Selection, SelectionAction, ToothId};

/// Landing page configuration
#[derive(Debug, Clone, Resource, Default, Deref)]
pub struct LandingSettings(pub LandingConfig);

/// The tooth catalog shared with every system
#[derive(Debug, Clone, Copy, Resource, Deref)]
pub struct ToothCatalog(pub &'static Catalog);

impl Default for ToothCatalog {
    fn default() -> Self {
        Self(catalog())
    }
}

/// Currently selected tooth
#[derive(Debug, Clone, Copy, Resource, Default, Deref)]
pub struct SelectedTooth(pub Selection);

/// Tooth under the pointer this frame
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct HoveredTooth(pub Option<ToothId>);

/// Text typed into the tip search box
#[derive(Debug, Clone, Resource, Default)]
pub struct SearchQuery(pub String);

/// Info panel fade state
#[derive(Debug, Clone, Copy, Resource, Default, Deref, DerefMut)]
pub struct PanelState(pub PanelFade);

/// Tooth to select once the app starts (from a deep link)
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct InitialSelection(pub Option<ToothId>);

/// Where a selection request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    SearchResult,
    Scene,
    InfoPanel,
    Keyboard,
    DeepLink,
}

/// Request to change the selected tooth
#[derive(Message, Debug, Clone, Copy)]
pub struct SelectionRequest {
    pub action: SelectionAction,
    pub source: SelectionSource,
}

impl SelectionRequest {
    pub fn select(id: ToothId, source: SelectionSource) -> Self {
        Self {
            action: SelectionAction::Select(id),
            source,
        }
    }

    pub fn dismiss(source: SelectionSource) -> Self {
        Self {
            action: SelectionAction::Dismiss,
            source,
        }
    }
}

/// "Book an appointment" was pressed on the info panel
#[derive(Message, Debug, Clone, Copy)]
pub struct AppointmentRequested {
    pub tooth: ToothId,
}

/// UI layout settings for responsive design
#[derive(Debug, Clone, Resource)]
pub struct UiLayout {
    /// Whether the tip search panel is visible
    pub show_search_panel: bool,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Whether we're on a small screen (mobile/tablet)
    pub is_mobile: bool,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            show_search_panel: true,
            screen_width: 1920.0,
            screen_height: 1080.0,
            is_mobile: false,
        }
    }
}

impl UiLayout {
    /// Update layout based on screen dimensions
    pub fn update_for_screen(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;

        let was_mobile = self.is_mobile;
        self.is_mobile = width < 800.0 || (width < height && width < 600.0);

        // On first detection of mobile mode, close the search panel
        if self.is_mobile && !was_mobile {
            self.show_search_panel = false;
        }
    }

    /// Whether the info card may be drawn. On mobile the open tips panel covers it.
    pub fn card_visible(&self) -> bool {
        !(self.is_mobile && self.show_search_panel)
    }

    /// Mobile "Tips" button
    pub fn toggle_search_panel(&mut self) {
        self.show_search_panel = !self.show_search_panel;
    }

    /// A tooth was picked; on mobile the tips panel gives way to its card
    pub fn on_tooth_selected(&mut self) {
        if self.is_mobile {
            self.show_search_panel = false;
        }
    }

    pub fn ui_scale(&self) -> f32 {
        if self.is_mobile {
            1.15
        } else {
            1.0
        }
    }

    /// Width of the search panel
    pub fn panel_width(&self) -> f32 {
        if self.is_mobile {
            (self.screen_width * 0.8).min(320.0)
        } else {
            300.0
        }
    }

    /// Width of the info card
    pub fn card_width(&self) -> f32 {
        if self.is_mobile {
            (self.screen_width - 24.0).max(200.0)
        } else {
            340.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_detection_hides_search_once() {
        let mut layout = UiLayout::default();
        layout.update_for_screen(1280.0, 800.0);
        assert!(!layout.is_mobile);
        assert!(layout.show_search_panel);

        layout.update_for_screen(390.0, 844.0);
        assert!(layout.is_mobile);
        assert!(!layout.show_search_panel);

        // User reopens the panel; a resize while still mobile keeps it open
        layout.show_search_panel = true;
        layout.update_for_screen(400.0, 844.0);
        assert!(layout.show_search_panel);
    }

    fn mobile_layout() -> UiLayout {
        let mut layout = UiLayout::default();
        layout.update_for_screen(390.0, 844.0);
        layout
    }

    #[test]
    fn test_desktop_card_always_visible() {
        let mut layout = UiLayout::default();
        assert!(layout.card_visible());
        layout.toggle_search_panel();
        assert!(!layout.show_search_panel);
        assert!(layout.card_visible());
        layout.toggle_search_panel();
        assert!(layout.card_visible());
    }

    #[test]
    fn test_card_returns_after_tips_closed() {
        let mut layout = mobile_layout();
        layout.on_tooth_selected();
        assert!(layout.card_visible());

        layout.toggle_search_panel();
        assert!(layout.show_search_panel);
        assert!(!layout.card_visible());

        // Closing the tips brings the card back without a new selection
        layout.toggle_search_panel();
        assert!(!layout.show_search_panel);
        assert!(layout.card_visible());
    }

    #[test]
    fn test_mobile_search_result_click_shows_card() {
        let mut layout = mobile_layout();
        layout.toggle_search_panel();
        assert!(!layout.card_visible());

        layout.on_tooth_selected();
        assert!(!layout.show_search_panel);
        assert!(layout.card_visible());
    }

    #[test]
    fn test_panel_widths() {
        let mut layout = UiLayout::default();
        assert_eq!(layout.panel_width(), 300.0);

        layout.update_for_screen(360.0, 780.0);
        assert_eq!(layout.panel_width(), 288.0);
        assert_eq!(layout.card_width(), 336.0);
    }
}
