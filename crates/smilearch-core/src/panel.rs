//! Info panel content and its fade transition

use crate::catalog::{Catalog, ToothId, ToothKind, ToothRecord};
use crate::motion::ease_toward;
use crate::selection::Selection;

/// Shown under every care tip
pub const DISCLAIMER: &str =
    "This tip is for general education and does not replace a check-up with your dentist.";

/// Opacity below which a closing panel is considered gone
const FADE_EPSILON: f32 = 0.01;

/// Slowest fade rate (per second); keeps a misconfigured speed from freezing the panel
pub const MIN_FADE_SPEED: f32 = 0.5;

/// Display record for the active tooth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard<'a> {
    pub id: ToothId,
    pub name: &'a str,
    pub kind: ToothKind,
    pub tip: &'a str,
    pub disclaimer: &'static str,
}

impl<'a> InfoCard<'a> {
    pub fn from_record(record: &'a ToothRecord) -> Self {
        Self {
            id: record.id,
            name: &record.name,
            kind: record.kind(),
            tip: record.tip,
            disclaimer: DISCLAIMER,
        }
    }

    /// Card for the current selection; `None` when nothing is selected or the
    /// id has no record
    pub fn for_selection(selection: &Selection, catalog: &'a Catalog) -> Option<Self> {
        selection
            .active()
            .and_then(|id| catalog.get(id))
            .map(Self::from_record)
    }
}

/// Enter/exit fade of the info panel.
///
/// While closing, the last shown tooth stays on screen until the fade ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelFade {
    pub opacity: f32,
    pub shown: Option<ToothId>,
}

impl PanelFade {
    /// Advance the fade by `dt` seconds at `speed` (per second)
    pub fn step(&mut self, selection: &Selection, dt: f32, speed: f32) {
        let speed = speed.max(MIN_FADE_SPEED);
        let factor = 1.0 - (-speed * dt.max(0.0)).exp();

        match selection.active() {
            Some(id) => {
                self.shown = Some(id);
                self.opacity = ease_toward(self.opacity, 1.0, factor);
            }
            None if self.shown.is_some() => {
                self.opacity = ease_toward(self.opacity, 0.0, factor);
                if self.opacity < FADE_EPSILON {
                    self.opacity = 0.0;
                    self.shown = None;
                }
            }
            None => self.opacity = 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Whether the panel is fading out after a dismiss
    pub fn is_closing(&self, selection: &Selection) -> bool {
        self.shown.is_some() && selection.is_empty()
    }

    /// Card to draw this frame. While closing it is the last card shown.
    pub fn card<'a>(&self, selection: &Selection, catalog: &'a Catalog) -> Option<InfoCard<'a>> {
        if !self.is_closing(selection) {
            return InfoCard::for_selection(selection, catalog);
        }
        self.shown
            .and_then(|id| catalog.get(id))
            .map(InfoCard::from_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn id(n: u32) -> ToothId {
        ToothId::new(n).unwrap()
    }

    #[test]
    fn test_card_follows_selection() {
        let mut selection = Selection::default();
        assert!(InfoCard::for_selection(&selection, catalog()).is_none());

        selection.select(id(5));
        let card = InfoCard::for_selection(&selection, catalog()).unwrap();
        let record = catalog().get(id(5)).unwrap();
        assert_eq!(card.id, id(5));
        assert_eq!(card.name, record.name);
        assert_eq!(card.tip, record.tip);
        assert_eq!(card.disclaimer, DISCLAIMER);

        selection.select(id(12));
        let card = InfoCard::for_selection(&selection, catalog()).unwrap();
        assert_eq!(card.name, "Upper Left First Premolar");

        selection.dismiss();
        assert!(InfoCard::for_selection(&selection, catalog()).is_none());
    }

    #[test]
    fn test_boundary_cards_are_distinct() {
        let first = InfoCard::for_selection(&Selection::new(Some(ToothId::FIRST)), catalog()).unwrap();
        let last = InfoCard::for_selection(&Selection::new(Some(ToothId::LAST)), catalog()).unwrap();
        assert_ne!(first.name, last.name);
        assert_ne!(first.tip, last.tip);
    }

    #[test]
    fn test_placeholder_name_card() {
        let short = Catalog::generate(&[], &crate::catalog::CARE_TIPS);
        let selection = Selection::new(Some(id(3)));
        assert_eq!(InfoCard::for_selection(&selection, &short).unwrap().name, "Tooth 3");
    }

    #[test]
    fn test_fade_in_and_out() {
        let mut fade = PanelFade::default();
        let mut selection = Selection::default();

        fade.step(&selection, 0.016, 8.0);
        assert!(!fade.is_visible());

        selection.select(id(9));
        for _ in 0..120 {
            fade.step(&selection, 0.016, 8.0);
        }
        assert!(fade.opacity > 0.99);
        assert_eq!(fade.card(&selection, catalog()).unwrap().id, id(9));

        selection.dismiss();
        fade.step(&selection, 0.016, 8.0);
        assert!(fade.is_closing(&selection));
        // Still drawing the last card while fading out
        assert_eq!(fade.card(&selection, catalog()).unwrap().id, id(9));

        for _ in 0..240 {
            fade.step(&selection, 0.016, 8.0);
        }
        assert!(!fade.is_visible());
        assert_eq!(fade.opacity, 0.0);
        assert!(fade.card(&selection, catalog()).is_none());
    }

    #[test]
    fn test_fade_switches_card_immediately() {
        let mut fade = PanelFade::default();
        let mut selection = Selection::new(Some(id(2)));
        fade.step(&selection, 0.016, 8.0);
        selection.select(id(30));
        fade.step(&selection, 0.016, 8.0);
        assert_eq!(fade.shown, Some(id(30)));
        assert_eq!(fade.card(&selection, catalog()).unwrap().id, id(30));
    }

    #[test]
    fn test_non_positive_speed_still_fades() {
        for speed in [0.0, -4.0] {
            let mut fade = PanelFade::default();
            let mut selection = Selection::new(Some(id(4)));
            for _ in 0..600 {
                fade.step(&selection, 0.016, speed);
            }
            assert!(fade.opacity > 0.9, "speed {speed}: opacity {}", fade.opacity);

            selection.dismiss();
            for _ in 0..1200 {
                fade.step(&selection, 0.016, speed);
            }
            assert!(!fade.is_visible(), "speed {speed}: panel never cleared");
        }
    }
}
