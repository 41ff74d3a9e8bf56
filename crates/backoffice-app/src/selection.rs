//! Row selection for bulk operations
//!
//! A set of record ids, independent of the fetched rows: a refetch does not
//! change what is selected.

use std::collections::BTreeSet;

use backoffice_core::RecordId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Select every visible id, or clear them all if they are already all
    /// selected.
    pub fn toggle_all(&mut self, visible: &[RecordId]) {
        if !visible.is_empty() && self.all_selected(visible) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.iter().copied());
        }
    }

    pub fn all_selected(&self, visible: &[RecordId]) -> bool {
        visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<RecordId> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_then_deselect_one() {
        let mut selection = Selection::new();
        let visible = [1, 2, 3, 4];

        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 4);

        selection.toggle(3);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(3));
    }

    #[test]
    fn test_select_all_when_all_selected_clears() {
        let mut selection = Selection::new();
        let visible = [1, 2];

        selection.toggle_all(&visible);
        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_with_partial_selection_selects_rest() {
        let mut selection = Selection::new();
        selection.toggle(2);
        selection.toggle_all(&[1, 2, 3]);
        assert_eq!(selection.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_all_keeps_ids_outside_view() {
        let mut selection = Selection::new();
        selection.toggle(99);
        selection.toggle_all(&[1]);
        selection.toggle_all(&[1]);
        assert_eq!(selection.ids(), vec![99]);
    }

    #[test]
    fn test_toggle_all_empty_view_is_noop() {
        let mut selection = Selection::new();
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }
}
