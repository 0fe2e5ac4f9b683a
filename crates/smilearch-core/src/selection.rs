//! Selection state machine for the active tooth

use crate::catalog::ToothId;

/// A user request that changes the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    /// Clicked a search result or a tooth in the scene
    Select(ToothId),
    /// Closed the info panel
    Dismiss,
}

/// Currently active tooth, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(Option<ToothId>);

impl Selection {
    pub fn new(initial: Option<ToothId>) -> Self {
        Self(initial)
    }

    pub fn active(&self) -> Option<ToothId> {
        self.0
    }

    pub fn is_active(&self, id: ToothId) -> bool {
        self.0 == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Apply an action, returning whether the state changed
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        let next = match action {
            SelectionAction::Select(id) => Some(id),
            SelectionAction::Dismiss => None,
        };
        let changed = self.0 != next;
        self.0 = next;
        changed
    }

    pub fn select(&mut self, id: ToothId) -> bool {
        self.apply(SelectionAction::Select(id))
    }

    pub fn dismiss(&mut self) -> bool {
        self.apply(SelectionAction::Dismiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ToothId {
        ToothId::new(n).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.active(), None);
    }

    #[test]
    fn test_select_replace_dismiss() {
        let mut selection = Selection::default();

        assert!(selection.select(id(5)));
        assert_eq!(selection.active(), Some(id(5)));

        assert!(selection.select(id(12)));
        assert_eq!(selection.active(), Some(id(12)));
        assert!(!selection.is_active(id(5)));

        assert!(selection.dismiss());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_reselect_is_unchanged() {
        let mut selection = Selection::default();
        selection.select(id(7));
        assert!(!selection.select(id(7)));
        assert_eq!(selection.active(), Some(id(7)));
    }

    #[test]
    fn test_dismiss_when_empty() {
        let mut selection = Selection::default();
        assert!(!selection.dismiss());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_boundary_ids_selectable() {
        let mut selection = Selection::default();
        selection.apply(SelectionAction::Select(ToothId::FIRST));
        assert!(selection.is_active(ToothId::FIRST));
        selection.apply(SelectionAction::Select(ToothId::LAST));
        assert!(selection.is_active(ToothId::LAST));
    }
}
