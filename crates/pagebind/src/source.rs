//! Items sources: the ordered collections an adapter pages over.
//!
//! The adapter never owns data. It holds one shared [`ItemsSource`] handle and
//! reads through it on every query, so external mutation is immediately
//! visible. Capability methods with defaults replace runtime type probes:
//! a source declares random access and change notification by overriding
//! [`supports_random_access`](ItemsSource::supports_random_access) and
//! [`change_events`](ItemsSource::change_events).
//!
//! [`ObservableVec<T>`] is the canonical change-notifying source; a plain
//! `Vec<ItemValue>` works as a static source that only refreshes on
//! reassignment.

use std::sync::Arc;

use pagebind_core::Signal;
use parking_lot::RwLock;

use crate::item::ItemValue;

/// A change to an observed collection.
///
/// Sources publish precise events; the adapter deliberately ignores the
/// payload and treats any event as a full refresh. Other consumers (and
/// tests) can still act on the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionEvent {
    /// `count` items were inserted starting at `position`.
    Inserted { position: usize, count: usize },
    /// `count` items were removed starting at `position`.
    Removed { position: usize, count: usize },
    /// `count` items starting at `position` were replaced in place.
    Replaced { position: usize, count: usize },
    /// `count` items moved from `from` to `to`.
    Moved { from: usize, to: usize, count: usize },
    /// The collection was rebuilt wholesale.
    Reset,
}

/// An ordered, possibly-mutable, possibly change-notifying sequence of items.
///
/// # Implementation Requirements
///
/// At minimum, implement [`len`](Self::len) and [`get`](Self::get). The
/// remaining methods are capabilities with conservative defaults:
///
/// - [`supports_random_access`](Self::supports_random_access) defaults to
///   `false`; sources backed by indexable storage should return `true` to
///   avoid an advisory warning on assignment.
/// - [`change_events`](Self::change_events) defaults to `None`; sources that
///   notify should return their signal so the adapter can subscribe.
/// - [`position_of`](Self::position_of) defaults to a linear scan over
///   [`get`](Self::get).
pub trait ItemsSource: Send + Sync {
    /// Returns the number of items currently in the source.
    fn len(&self) -> usize;

    /// Returns the item at `position`, or `None` if the position is out of
    /// range at the time of the call.
    fn get(&self, position: usize) -> Option<ItemValue>;

    /// Returns `true` if the source currently holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the zero-based position of `item`, using the source's own
    /// equality semantics, or `None` if the item is absent.
    fn position_of(&self, item: &ItemValue) -> Option<usize> {
        (0..self.len()).find(|&position| self.get(position).is_some_and(|value| value == *item))
    }

    /// Whether item lookup by position is cheap.
    ///
    /// Assigning a source that returns `false` emits an advisory warning,
    /// since the adapter reads by position on every page.
    fn supports_random_access(&self) -> bool {
        false
    }

    /// The change-notification signal, for sources that publish one.
    ///
    /// Sources returning `None` are fully supported but never trigger an
    /// incremental refresh; only explicit reassignment refreshes them.
    fn change_events(&self) -> Option<&Signal<CollectionEvent>> {
        None
    }
}

/// A fixed `Vec` of values is a valid (non-notifying) source.
impl ItemsSource for Vec<ItemValue> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, position: usize) -> Option<ItemValue> {
        self.as_slice().get(position).cloned()
    }

    fn supports_random_access(&self) -> bool {
        true
    }
}

/// Type alias for an item extractor function.
pub type ItemExtractor<T> = Arc<dyn Fn(&T) -> ItemValue + Send + Sync>;

/// A change-notifying, random-access items source.
///
/// `ObservableVec<T>` owns a `Vec<T>` and emits a [`CollectionEvent`] after
/// every mutation, once the change is visible to readers. Items are projected
/// to [`ItemValue`]s either through `Into<ItemValue>` (see
/// [`new`](Self::new)) or through an extractor closure (see
/// [`with_extractor`](Self::with_extractor)).
///
/// # Example
///
/// ```
/// use pagebind::source::{CollectionEvent, ObservableVec};
///
/// let names = ObservableVec::new(vec!["Alice".to_string(), "Bob".to_string()]);
///
/// names.changed().connect(|event| {
///     println!("collection changed: {:?}", event);
/// });
///
/// names.push("Carol".to_string()); // emits Inserted { position: 2, count: 1 }
/// ```
pub struct ObservableVec<T> {
    items: RwLock<Vec<T>>,
    extractor: ItemExtractor<T>,
    changed: Signal<CollectionEvent>,
}

impl<T: Send + Sync + 'static> ObservableVec<T> {
    /// Creates an observable source with an extractor closure.
    ///
    /// The extractor projects each stored item to the [`ItemValue`] handed to
    /// the adapter.
    pub fn with_extractor<F>(items: Vec<T>, extractor: F) -> Self
    where
        F: Fn(&T) -> ItemValue + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            extractor: Arc::new(extractor),
            changed: Signal::new(),
        }
    }

    /// Returns the change signal this source publishes.
    ///
    /// Equivalent to `change_events().unwrap()` for this type.
    pub fn changed(&self) -> &Signal<CollectionEvent> {
        &self.changed
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Appends an item to the end.
    pub fn push(&self, item: T) {
        let position = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        self.changed.emit(CollectionEvent::Inserted { position, count: 1 });
    }

    /// Inserts an item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert(&self, position: usize, item: T) {
        self.items.write().insert(position, item);
        self.changed.emit(CollectionEvent::Inserted { position, count: 1 });
    }

    /// Removes and returns the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn remove(&self, position: usize) -> T {
        let removed = self.items.write().remove(position);
        self.changed.emit(CollectionEvent::Removed { position, count: 1 });
        removed
    }

    /// Replaces the item at `position`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn replace(&self, position: usize, item: T) -> T {
        let previous = {
            let mut items = self.items.write();
            std::mem::replace(&mut items[position], item)
        };
        self.changed.emit(CollectionEvent::Replaced { position, count: 1 });
        previous
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.changed.emit(CollectionEvent::Reset);
    }

    /// Replaces the whole collection.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.changed.emit(CollectionEvent::Reset);
    }

    /// Provides read access to an item via a closure.
    pub fn with_item<F, R>(&self, position: usize, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.items.read().get(position).map(f)
    }
}

impl<T: Clone + Into<ItemValue> + Send + Sync + 'static> ObservableVec<T> {
    /// Creates an observable source from items convertible to [`ItemValue`].
    pub fn new(items: Vec<T>) -> Self {
        Self::with_extractor(items, |item| item.clone().into())
    }

    /// Creates an empty observable source.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Send + Sync + 'static> ItemsSource for ObservableVec<T> {
    fn len(&self) -> usize {
        ObservableVec::len(self)
    }

    fn get(&self, position: usize) -> Option<ItemValue> {
        let items = self.items.read();
        items.get(position).map(|item| (self.extractor)(item))
    }

    fn supports_random_access(&self) -> bool {
        true
    }

    fn change_events(&self) -> Option<&Signal<CollectionEvent>> {
        Some(&self.changed)
    }
}

// The lock is always released before the change signal fires.
static_assertions::assert_impl_all!(ObservableVec<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn strings(values: &[&str]) -> ObservableVec<String> {
        ObservableVec::new(values.iter().map(|s| s.to_string()).collect())
    }

    fn record_events(source: &ObservableVec<String>) -> Arc<Mutex<Vec<CollectionEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recv = events.clone();
        source.changed().connect(move |&event| {
            recv.lock().push(event);
        });
        events
    }

    #[test]
    fn test_get_and_len() {
        let source = strings(&["a", "b", "c"]);
        assert_eq!(ItemsSource::len(&source), 3);
        assert_eq!(source.get(1), Some(ItemValue::from("b")));
        assert_eq!(source.get(3), None);
    }

    #[test]
    fn test_position_of() {
        let source = strings(&["a", "b", "c"]);
        assert_eq!(source.position_of(&ItemValue::from("b")), Some(1));
        assert_eq!(source.position_of(&ItemValue::from("z")), None);
    }

    #[test]
    fn test_push_emits_inserted_after_mutation() {
        let source = strings(&["a"]);
        let seen_len = Arc::new(Mutex::new(0));

        // The mutation must be visible to readers before the event fires.
        let recv = seen_len.clone();
        let source = Arc::new(source);
        let source_clone = source.clone();
        source.changed().connect(move |&event| {
            assert_eq!(event, CollectionEvent::Inserted { position: 1, count: 1 });
            *recv.lock() = source_clone.len();
        });

        source.push("b".to_string());
        assert_eq!(*seen_len.lock(), 2);
    }

    #[test]
    fn test_insert_remove_replace_events() {
        let source = strings(&["a", "b"]);
        let events = record_events(&source);

        source.insert(1, "x".to_string());
        let removed = source.remove(0);
        assert_eq!(removed, "a");
        let previous = source.replace(0, "y".to_string());
        assert_eq!(previous, "x");

        let events = events.lock();
        assert_eq!(
            *events,
            vec![
                CollectionEvent::Inserted { position: 1, count: 1 },
                CollectionEvent::Removed { position: 0, count: 1 },
                CollectionEvent::Replaced { position: 0, count: 1 },
            ]
        );
    }

    #[test]
    fn test_clear_and_set_items_emit_reset() {
        let source = strings(&["a", "b"]);
        let events = record_events(&source);

        source.clear();
        assert!(ItemsSource::is_empty(&source));
        source.set_items(vec!["c".to_string()]);
        assert_eq!(ItemsSource::len(&source), 1);

        let events = events.lock();
        assert_eq!(*events, vec![CollectionEvent::Reset, CollectionEvent::Reset]);
    }

    #[test]
    fn test_extractor_projection() {
        struct Person {
            name: String,
        }

        let source = ObservableVec::with_extractor(
            vec![
                Person { name: "Alice".into() },
                Person { name: "Bob".into() },
            ],
            |person| ItemValue::from(person.name.as_str()),
        );

        assert_eq!(source.get(0), Some(ItemValue::from("Alice")));
        assert_eq!(source.position_of(&ItemValue::from("Bob")), Some(1));
    }

    #[test]
    fn test_vec_source_has_no_change_events() {
        let source: Vec<ItemValue> = vec![ItemValue::from(1), ItemValue::from(2)];
        assert!(source.change_events().is_none());
        assert!(source.supports_random_access());
        assert_eq!(ItemsSource::get(&source, 0), Some(ItemValue::from(1)));
    }
}
