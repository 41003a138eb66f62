use pagesmith_model::WidgetId;

/// Exclusive selection: at most one widget, UI-local, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<WidgetId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection; `None` clears.
    /// Returns whether the selection changed.
    pub fn select(&mut self, id: Option<WidgetId>) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.select(None)
    }

    pub fn selected(&self) -> Option<&WidgetId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &WidgetId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_exclusive() {
        let mut selection = Selection::new();
        let x = WidgetId::from("x");
        let y = WidgetId::from("y");

        assert!(selection.select(Some(x.clone())));
        assert!(selection.select(Some(y.clone())));

        assert!(selection.is_selected(&y));
        assert!(!selection.is_selected(&x));
    }

    #[test]
    fn test_reselect_is_not_a_change() {
        let mut selection = Selection::new();
        let x = WidgetId::from("x");

        assert!(selection.select(Some(x.clone())));
        assert!(!selection.select(Some(x)));
        assert!(selection.clear());
        assert!(!selection.clear());
        assert_eq!(selection.selected(), None);
    }
}
