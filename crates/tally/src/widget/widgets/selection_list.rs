//! Modal selection list.
//!
//! A [`SelectionList`] offers a fixed list of items, marks the one currently
//! chosen, and closes as soon as the user picks one. Lists can optionally be
//! searched; the filter is a case-insensitive substring match on each item's
//! label.
//!
//! # Example
//!
//! ```
//! use tally::widget::widgets::SelectionList;
//! use tally::form::Frequency;
//!
//! let mut list = SelectionList::new("Frequency", Frequency::ALL.to_vec());
//! list.item_selected.connect(|frequency| {
//!     println!("Chose {}", frequency);
//! });
//!
//! list.open(Some(&Frequency::Weekly));
//! assert!(list.is_selected(&Frequency::Weekly));
//! assert_eq!(list.select(1), Some(Frequency::Monthly));
//! assert!(!list.is_open());
//! ```

use std::borrow::Cow;

use tally_core::Signal;
use tally_core::logging::targets;

/// Message shown when a list has nothing to offer.
pub const DEFAULT_EMPTY_TEXT: &str = "No options available";

/// An item a [`SelectionList`] can offer.
pub trait Selectable {
    /// Stable identity; two items with equal ids are the same choice.
    fn id(&self) -> Cow<'_, str>;

    /// Text shown for the item, and matched by search.
    fn label(&self) -> Cow<'_, str>;
}

/// A modal list from which the user picks one item.
///
/// # Signals
///
/// - `item_selected(T)`: Emitted when the user picks an item
/// - `closed()`: Emitted whenever the list closes, after any selection
pub struct SelectionList<T> {
    title: String,
    items: Vec<T>,
    selected_id: Option<String>,
    searchable: bool,
    query: String,
    empty_text: String,
    open: bool,

    /// Signal emitted when an item is picked.
    pub item_selected: Signal<T>,
    /// Signal emitted when the list closes.
    pub closed: Signal<()>,
}

impl<T: Selectable + Clone + 'static> SelectionList<T> {
    /// Create a closed list.
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            title: title.into(),
            items,
            selected_id: None,
            searchable: false,
            query: String::new(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            open: false,
            item_selected: Signal::new(),
            closed: Signal::new(),
        }
    }

    /// Enable search using builder pattern.
    pub fn with_search(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Set the empty-state message using builder pattern.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The modal title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Every item, regardless of the search filter.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the items. The current choice is kept by id.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Whether the list has a search field.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// The current search text.
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Whether the list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Message to show when [`visible_items`](Self::visible_items) is empty.
    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    /// Id of the item marked as chosen.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Whether `item` is the one marked as chosen.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected_id
            .as_deref()
            .is_some_and(|id| id == item.id())
    }

    /// Items passing the search filter, in list order.
    pub fn visible_items(&self) -> Vec<&T> {
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| needle.is_empty() || item.label().to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether nothing passes the search filter.
    pub fn is_empty(&self) -> bool {
        self.visible_items().is_empty()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the list, marking `selected` as the current choice.
    ///
    /// The search query starts empty on every open.
    pub fn open(&mut self, selected: Option<&T>) {
        self.selected_id = selected.map(|item| item.id().into_owned());
        self.query.clear();
        self.open = true;
        tracing::debug!(
            target: targets::SELECTION,
            title = %self.title,
            selected = ?self.selected_id,
            "opened"
        );
    }

    /// Update the search filter. Ignored on lists without search.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        if !self.searchable {
            tracing::trace!(target: targets::SELECTION, title = %self.title, "list has no search");
            return;
        }
        self.query = query.into();
    }

    /// Pick the item at `index` within [`visible_items`](Self::visible_items).
    ///
    /// Emits `item_selected` then `closed`, and returns the item. Returns
    /// `None` without closing if the list is closed or `index` is out of
    /// range.
    pub fn select(&mut self, index: usize) -> Option<T> {
        if !self.open {
            return None;
        }
        let Some(item) = self.visible_items().get(index).map(|item| (*item).clone()) else {
            tracing::debug!(target: targets::SELECTION, index, "selection index out of range");
            return None;
        };

        self.selected_id = Some(item.id().into_owned());
        self.open = false;
        tracing::debug!(target: targets::SELECTION, title = %self.title, id = %item.id(), "selected");
        self.item_selected.emit(item.clone());
        self.closed.emit(());
        Some(item)
    }

    /// Close without picking anything.
    pub fn dismiss(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        tracing::debug!(target: targets::SELECTION, title = %self.title, "dismissed");
        self.closed.emit(());
    }
}

impl<T> std::fmt::Debug for SelectionList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionList")
            .field("title", &self.title)
            .field("items", &self.items.len())
            .field("selected_id", &self.selected_id)
            .field("query", &self.query)
            .field("open", &self.open)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit(&'static str, &'static str);

    impl Selectable for Fruit {
        fn id(&self) -> Cow<'_, str> {
            Cow::Borrowed(self.0)
        }

        fn label(&self) -> Cow<'_, str> {
            Cow::Borrowed(self.1)
        }
    }

    fn fruits() -> Vec<Fruit> {
        vec![
            Fruit("a", "Apple"),
            Fruit("b", "Banana"),
            Fruit("c", "Pineapple"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut list = SelectionList::new("Fruit", fruits()).with_search();
        list.open(None);
        list.set_search_query("APPLE");

        let labels: Vec<_> = list.visible_items().iter().map(|f| f.1).collect();
        assert_eq!(labels, vec!["Apple", "Pineapple"]);

        list.set_search_query("");
        assert_eq!(list.visible_items().len(), 3);
    }

    #[test]
    fn test_search_disabled() {
        let mut list = SelectionList::new("Fruit", fruits());
        list.open(None);
        list.set_search_query("zzz");
        assert_eq!(list.search_query(), "");
        assert_eq!(list.visible_items().len(), 3);
    }

    #[test]
    fn test_empty_state() {
        let mut list = SelectionList::new("Fruit", fruits())
            .with_search()
            .with_empty_text("No fruit found");
        list.open(None);
        list.set_search_query("kiwi");
        assert!(list.is_empty());
        assert_eq!(list.empty_text(), "No fruit found");

        let empty: SelectionList<Fruit> = SelectionList::new("Nothing", Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.empty_text(), DEFAULT_EMPTY_TEXT);
    }

    #[test]
    fn test_select_emits_item_then_closed() {
        let mut list = SelectionList::new("Fruit", fruits()).with_search();
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = events.clone();
        list.item_selected.connect(move |fruit: &Fruit| {
            events_clone.lock().push(format!("selected {}", fruit.0));
        });
        let events_clone = events.clone();
        list.closed.connect(move |_| {
            events_clone.lock().push("closed".to_string());
        });

        list.open(Some(&Fruit("a", "Apple")));
        list.set_search_query("an");
        assert_eq!(list.select(0), Some(Fruit("b", "Banana")));

        assert_eq!(*events.lock(), vec!["selected b", "closed"]);
        assert!(!list.is_open());
        assert_eq!(list.selected_id(), Some("b"));
    }

    #[test]
    fn test_select_out_of_range_keeps_open() {
        let mut list = SelectionList::new("Fruit", fruits());
        list.open(None);
        assert_eq!(list.select(7), None);
        assert!(list.is_open());
    }

    #[test]
    fn test_dismiss_emits_only_closed() {
        let mut list = SelectionList::new("Fruit", fruits());
        let selected = Arc::new(Mutex::new(0));
        let closed = Arc::new(Mutex::new(0));

        let selected_clone = selected.clone();
        list.item_selected.connect(move |_| *selected_clone.lock() += 1);
        let closed_clone = closed.clone();
        list.closed.connect(move |_| *closed_clone.lock() += 1);

        list.open(Some(&Fruit("c", "Pineapple")));
        list.dismiss();
        list.dismiss();

        assert_eq!(*selected.lock(), 0);
        assert_eq!(*closed.lock(), 1);
        assert!(list.is_selected(&Fruit("c", "Pineapple")));
    }

    #[test]
    fn test_open_resets_query() {
        let mut list = SelectionList::new("Fruit", fruits()).with_search();
        list.open(None);
        list.set_search_query("ban");
        list.dismiss();
        list.open(None);
        assert_eq!(list.search_query(), "");
    }
}
