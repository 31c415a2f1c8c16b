/// Which planet, if any, is selected.
///
/// Owned by the game and passed to whatever needs it. There is no way back
/// to "nothing selected" once a planet has been clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<usize>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Last write wins. Re-selecting the current planet is a no-op.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Camera controls only respond while nothing is selected.
    pub fn controls_enabled(&self) -> bool {
        self.selected.is_none()
    }

    /// Heading shown over the canvas, 1-based.
    pub fn overlay_label(&self) -> Option<String> {
        self.selected.map(|i| format!("Planète {}", i + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_controls_on() {
        let s = SelectionController::new();
        assert_eq!(s.selected(), None);
        assert!(s.controls_enabled());
        assert_eq!(s.overlay_label(), None);
    }

    #[test]
    fn last_select_wins() {
        let mut s = SelectionController::new();
        s.select(1);
        s.select(3);
        assert_eq!(s.selected(), Some(3));
        assert!(!s.is_selected(1));
        assert!(s.is_selected(3));
    }

    #[test]
    fn selecting_disables_controls_for_good() {
        let mut s = SelectionController::new();
        s.select(2);
        assert!(!s.controls_enabled());
        s.select(2);
        s.select(0);
        assert!(!s.controls_enabled());
    }

    #[test]
    fn overlay_is_one_based() {
        let mut s = SelectionController::new();
        s.select(2);
        assert_eq!(s.overlay_label().as_deref(), Some("Planète 3"));
        s.select(0);
        assert_eq!(s.overlay_label().as_deref(), Some("Planète 1"));
    }

    #[test]
    fn index_is_not_bounds_checked() {
        let mut s = SelectionController::new();
        s.select(42);
        assert_eq!(s.selected(), Some(42));
    }
}
