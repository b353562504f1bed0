/// Outcome of a committed selection.
///
/// `deselected` is the value displaced by this selection, reported once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange<T> {
    pub deselected: Option<T>,
    pub selected: T,
}

/// Holds at most one selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSlot<T> {
    current: Option<T>,
}

impl<T> Default for SelectionSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Clone> SelectionSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Replace the current value in one step.
    pub fn replace(&mut self, value: T) -> SelectionChange<T> {
        let deselected = self.current.replace(value.clone());
        SelectionChange {
            deselected,
            selected: value,
        }
    }

    pub fn clear(&mut self) -> Option<T> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_selection_deselects_nothing() {
        let mut slot = SelectionSlot::new();
        let change = slot.replace("a");

        assert_eq!(change.deselected, None);
        assert_eq!(change.selected, "a");
        assert_eq!(slot.current(), Some(&"a"));
    }

    #[test]
    fn test_replace_reports_previous_once() {
        let mut slot = SelectionSlot::new();
        slot.replace("a");

        let second = slot.replace("b");
        let third = slot.replace("c");

        assert_eq!(second.deselected, Some("a"));
        assert_eq!(third.deselected, Some("b"));
        assert_eq!(slot.current(), Some(&"c"));
    }

    #[test]
    fn test_clear() {
        let mut slot = SelectionSlot::new();
        slot.replace(7u16);

        assert_eq!(slot.clear(), Some(7));
        assert_eq!(slot.current(), None);
        assert_eq!(slot.clear(), None);
    }
}
