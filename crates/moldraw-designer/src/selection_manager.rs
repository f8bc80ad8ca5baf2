use std::collections::BTreeSet;

/// Tracks which drawing items (atoms, bonds, labels) are selected.
///
/// Selectable items are owned by the surrounding application; the manager
/// only records their ids. Connectors and their handles are never
/// selectable, and pressing or releasing on them leaves this set untouched.
///
/// # Examples
///
/// ```
/// use moldraw_designer::selection_manager::SelectionManager;
///
/// let mut manager = SelectionManager::new();
/// manager.select(4, false);
/// manager.select(9, true);
/// assert_eq!(manager.selected_ids(), vec![4, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: BTreeSet<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`. Without `multi` every other item is deselected first.
    pub fn select(&mut self, id: u64, multi: bool) {
        if !multi {
            self.selected.clear();
        }
        self.selected.insert(id);
    }

    /// Flips the selection state of `id`, leaving other items alone.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn deselect(&mut self, id: u64) {
        self.selected.remove(&id);
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<u64> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
