use tracing::trace;

/// Transient interaction flags shared by the field and the content row.
///
/// The field writes both flags; the content container reads them for
/// styling. Last writer wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    hovered: bool,
    focused: bool,
}

impl UiState {
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Returns `true` when the flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        trace!(hovered, "unit input hover changed");
        self.hovered = hovered;
        true
    }

    /// Returns `true` when the flag changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        trace!(focused, "unit input focus changed");
        self.focused = focused;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_report_changes_only() {
        let mut ui = UiState::default();
        assert!(ui.set_hovered(true));
        assert!(!ui.set_hovered(true));
        assert!(ui.set_focused(true));
        assert!(ui.set_focused(false));
        assert!(ui.hovered());
        assert!(!ui.focused());
    }
}
