//! Item sources: the ordered container the controller marks.

/// An ordered, stable sequence of items carrying two boolean marks.
///
/// An item is identified by its position index. The order must not change
/// while a controller is bound to the source.
pub trait ItemSource {
    /// Number of items in the container.
    fn len(&self) -> usize;

    /// Whether the container holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the item at `index` carries the selected mark.
    fn is_selected(&self, index: usize) -> bool;

    /// Set or clear the selected mark on the item at `index`.
    fn set_selected(&mut self, index: usize, selected: bool);

    /// Whether the item at `index` carries the highlighted mark.
    fn is_highlighted(&self, index: usize) -> bool;

    /// Set or clear the highlighted mark on the item at `index`.
    fn set_highlighted(&mut self, index: usize, highlighted: bool);

    /// Indices of every selected item, in container order.
    fn selected_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.is_selected(i)).collect()
    }

    /// First item carrying the highlighted mark.
    fn highlighted_index(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_highlighted(i))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    selected: bool,
    highlighted: bool,
}

/// In-memory item source: a vector of items plus their marks.
#[derive(Debug, Clone)]
pub struct MarkedItems<T> {
    items: Vec<T>,
    flags: Vec<Flags>,
}

impl<T> Default for MarkedItems<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            flags: Vec::new(),
        }
    }
}

impl<T> MarkedItems<T> {
    /// Wrap items with every mark cleared.
    pub fn new(items: Vec<T>) -> Self {
        let flags = vec![Flags::default(); items.len()];
        Self { items, flags }
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Position of the first item matching `predicate`.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Iterate over items in container order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Iterate over `(index, item, selected, highlighted)`.
    pub fn iter_marked(&self) -> impl Iterator<Item = (usize, &T, bool, bool)> {
        self.items
            .iter()
            .zip(&self.flags)
            .enumerate()
            .map(|(i, (item, flags))| (i, item, flags.selected, flags.highlighted))
    }

    /// Selected items, in container order.
    pub fn selected_items(&self) -> Vec<&T> {
        self.iter_marked()
            .filter_map(|(_, item, selected, _)| selected.then_some(item))
            .collect()
    }
}

impl<T> FromIterator<T> for MarkedItems<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> ItemSource for MarkedItems<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).is_some_and(|f| f.selected)
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(flags) = self.flags.get_mut(index) {
            flags.selected = selected;
        }
    }

    fn is_highlighted(&self, index: usize) -> bool {
        self.flags.get(index).is_some_and(|f| f.highlighted)
    }

    fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(flags) = self.flags.get_mut(index) {
            flags.highlighted = highlighted;
        }
    }
}
