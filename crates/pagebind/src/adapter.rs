//! The pager adapter: bridges an items source to a host paging widget.
//!
//! [`BindingPagerAdapter`] owns a shared reference to an [`ItemsSource`], a
//! template id, and a simple fallback layout. It materializes, binds, and
//! recycles display elements as the host pages through items, and subscribes
//! to the source's change events so any collection mutation invalidates the
//! displayed pages.
//!
//! The invalidation policy is deliberately coarse: any change event triggers
//! a full refresh through [`data_set_changed`](PagerAdapter::data_set_changed),
//! never a fine-grained patch.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pagebind::{BindingPagerAdapter, HostContext, PagerAdapter};
//! use pagebind::source::ObservableVec;
//!
//! fn run(context: &dyn HostContext) -> pagebind::Result<()> {
//!     let adapter = BindingPagerAdapter::new(context)?;
//!
//!     let items = Arc::new(ObservableVec::new(vec![
//!         "First page".to_string(),
//!         "Second page".to_string(),
//!     ]));
//!     adapter.set_items_source(Some(items.clone()));
//!     assert_eq!(adapter.count(), 2);
//!
//!     items.push("Third page".to_string()); // adapter refreshes, count() == 3
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use pagebind_core::{ConnectionId, Signal, ThreadAffinity, TraceLevel, TraceSink, TracingSink};
use parking_lot::RwLock;

use crate::element::{LayoutId, PageHandle, TemplateId, SIMPLE_ITEM_LAYOUT, TEMPLATE_NONE};
use crate::error::{AdapterError, Result};
use crate::host::{BindingHost, HostContext, PageContainer};
use crate::item::ItemValue;
use crate::source::ItemsSource;

/// The protocol a paging widget requires of any adapter.
///
/// The host calls [`instantiate_item`](Self::instantiate_item) as positions
/// scroll into the visible range, [`destroy_item`](Self::destroy_item) as
/// they leave it, and re-queries everything when the adapter emits
/// [`data_set_changed`](Self::data_set_changed).
pub trait PagerAdapter: Send + Sync {
    /// The number of pages currently available.
    fn count(&self) -> usize;

    /// Materializes the page at `position` and adds it to `container`.
    ///
    /// Returns the opaque per-position handle, or `None` when no element
    /// could be produced; callers must tolerate `None`.
    fn instantiate_item(&self, container: &dyn PageContainer, position: usize)
        -> Option<PageHandle>;

    /// Removes the page's element from `container` and releases it.
    fn destroy_item(&self, container: &dyn PageContainer, position: usize, handle: PageHandle);

    /// Returns `true` iff `view` and `handle` denote the same element.
    ///
    /// Identity comparison only; no other equality is applied.
    fn is_view_from_object(&self, view: &PageHandle, handle: &PageHandle) -> bool {
        Arc::ptr_eq(view, handle)
    }

    /// The full-refresh signal.
    ///
    /// Emitted whenever all currently displayed content should be re-queried:
    /// on source assignment, on template change, and on any change event from
    /// the source.
    fn data_set_changed(&self) -> &Signal<()>;
}

/// Interior state guarded by one lock, released before any signal or trace
/// sink call.
struct AdapterState {
    items_source: Option<Arc<dyn ItemsSource>>,
    item_template: TemplateId,
    simple_layout: LayoutId,
    /// Subscription to the current source's change events, if any.
    /// At most one is live at a time.
    change_connection: Option<ConnectionId>,
}

/// A pager adapter that binds items to per-page display elements.
///
/// The adapter holds no copy of the data: `count`, `raw_item`, and
/// `position_of` all read through the live source handle, so external
/// mutation is immediately visible subject to the host's redraw timing.
///
/// Constructed from a [`HostContext`]; construction fails with
/// [`AdapterError::BindingUnsupported`] if the context cannot supply a
/// [`BindingHost`]. Runtime configuration goes through `&self` setters;
/// advisory and recoverable conditions are reported through the configured
/// [`TraceSink`].
pub struct BindingPagerAdapter {
    binding_host: Arc<dyn BindingHost>,
    trace: Arc<dyn TraceSink>,
    /// Shared so the change-event subscription can emit it.
    data_set_changed: Arc<Signal<()>>,
    state: RwLock<AdapterState>,
    affinity: ThreadAffinity,
}

impl BindingPagerAdapter {
    /// Creates an adapter for the given host context.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BindingUnsupported`] if the context does not
    /// expose a binding host. No partial adapter state exists on failure.
    pub fn new(context: &dyn HostContext) -> Result<Self> {
        let binding_host = context.binding_host().ok_or(AdapterError::BindingUnsupported)?;
        Ok(Self {
            binding_host,
            trace: Arc::new(TracingSink),
            data_set_changed: Arc::new(Signal::new()),
            state: RwLock::new(AdapterState {
                items_source: None,
                item_template: TEMPLATE_NONE,
                simple_layout: SIMPLE_ITEM_LAYOUT,
                change_connection: None,
            }),
            affinity: ThreadAffinity::current(),
        })
    }

    /// Replaces the default [`TracingSink`] with an explicit trace sink.
    pub fn with_trace_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace = sink;
        self
    }

    /// Sets the layout inflated by the simple fallback path.
    pub fn with_simple_layout(mut self, layout: LayoutId) -> Self {
        self.state.get_mut().simple_layout = layout;
        self
    }

    /// Sets the initial item template.
    pub fn with_item_template(mut self, template_id: TemplateId) -> Self {
        self.state.get_mut().item_template = template_id;
        self
    }

    /// The current items source, if one is assigned.
    pub fn items_source(&self) -> Option<Arc<dyn ItemsSource>> {
        self.state.read().items_source.clone()
    }

    /// Assigns (or clears) the items source.
    ///
    /// Reassigning the same source handle is a no-op. Otherwise the previous
    /// subscription is dropped, the handle replaced, a change-event
    /// subscription established if the new source publishes one, and a full
    /// refresh emitted. Assigning a source without random access logs an
    /// advisory warning and continues.
    pub fn set_items_source(&self, source: Option<Arc<dyn ItemsSource>>) {
        self.affinity.debug_assert_same_thread();

        let warn_sequential;
        {
            let mut state = self.state.write();

            let unchanged = match (&state.items_source, &source) {
                (Some(current), Some(new)) => Arc::ptr_eq(current, new),
                (None, None) => true,
                _ => false,
            };
            if unchanged {
                return;
            }

            if let Some(connection) = state.change_connection.take() {
                if let Some(events) =
                    state.items_source.as_ref().and_then(|s| s.change_events())
                {
                    events.disconnect(connection);
                }
            }

            state.items_source = source;

            warn_sequential = state
                .items_source
                .as_ref()
                .is_some_and(|s| !s.supports_random_access());

            if let Some(events) = state.items_source.as_ref().and_then(|s| s.change_events()) {
                let refresh = Arc::clone(&self.data_set_changed);
                state.change_connection = Some(events.connect(move |_| refresh.emit(())));
            }

            tracing::debug!(
                target: "pagebind::adapter",
                has_source = state.items_source.is_some(),
                notifying = state.change_connection.is_some(),
                "items source assigned"
            );
        }

        if warn_sequential {
            self.trace.trace(
                TraceLevel::Warning,
                "items source does not support random access - paging over it \
                 can be inefficient, especially for large collections",
            );
        }
        self.data_set_changed.emit(());
    }

    /// The current item template id.
    pub fn item_template(&self) -> TemplateId {
        self.state.read().item_template
    }

    /// Sets the item template.
    ///
    /// A value equal to the current one never refreshes. A different value
    /// invalidates every displayed element, but only when a source is
    /// attached.
    pub fn set_item_template(&self, template_id: TemplateId) {
        self.affinity.debug_assert_same_thread();

        let refresh;
        {
            let mut state = self.state.write();
            if state.item_template == template_id {
                return;
            }
            state.item_template = template_id;
            refresh = state.items_source.is_some();
        }
        if refresh {
            self.data_set_changed.emit(());
        }
    }

    /// The layout inflated by the simple fallback path.
    pub fn simple_layout(&self) -> LayoutId {
        self.state.read().simple_layout
    }

    /// Sets the layout inflated by the simple fallback path.
    pub fn set_simple_layout(&self, layout: LayoutId) {
        self.state.write().simple_layout = layout;
    }

    /// Returns the zero-based position of `item` in the current source, or
    /// `-1` if the item is absent or no source is assigned.
    pub fn position_of(&self, item: &ItemValue) -> i32 {
        self.items_source()
            .and_then(|source| source.position_of(item))
            .map_or(-1, |position| position as i32)
    }

    /// Returns the item at `position`.
    ///
    /// The caller guarantees the position is valid at call time; no separate
    /// bounds pre-check is performed. `None` surfaces only when the host
    /// hands a position the source no longer covers.
    pub fn raw_item(&self, position: usize) -> Option<ItemValue> {
        self.items_source()?.get(position)
    }

    /// Produces the element for `item`, reusing `recycled` where possible.
    ///
    /// - `template_id == TEMPLATE_NONE`: the simple path. A supplied candidate
    ///   is rebound in place; otherwise a fallback element is inflated and
    ///   bound. Simple binding writes the item's string form (empty for
    ///   `Null`) into the element's text slot.
    /// - otherwise: the bindable path. A candidate tagged with a different
    ///   template id is discarded. Without a usable candidate the binding
    ///   host builds-and-binds a fresh template instance; with one, the item
    ///   is forwarded to its existing bind capability.
    pub fn bindable_view(
        &self,
        recycled: Option<PageHandle>,
        item: &ItemValue,
        template_id: TemplateId,
    ) -> PageHandle {
        if template_id == TEMPLATE_NONE {
            return self.simple_view(recycled, item);
        }

        match recycled.filter(|candidate| candidate.template_id() == template_id) {
            Some(candidate) => {
                candidate.bind_to(item);
                candidate
            }
            None => self.binding_host.build_bound(template_id, item),
        }
    }

    /// The simple fallback path: reuse and rebind, or inflate then bind.
    fn simple_view(&self, recycled: Option<PageHandle>, item: &ItemValue) -> PageHandle {
        match recycled {
            Some(candidate) => {
                Self::bind_simple(&candidate, item);
                candidate
            }
            None => {
                let element = self.binding_host.inflate(self.simple_layout());
                Self::bind_simple(&element, item);
                element
            }
        }
    }

    /// Renders the item's string form into the element's text slot.
    fn bind_simple(element: &PageHandle, item: &ItemValue) {
        element.set_text(&item.to_string());
    }

    /// Resolves the item at `position` and runs view acquisition.
    fn view(
        &self,
        position: usize,
        recycled: Option<PageHandle>,
        template_id: TemplateId,
    ) -> Option<PageHandle> {
        let Some(source) = self.items_source() else {
            self.trace.trace(
                TraceLevel::Error,
                "view requested while no items source is set",
            );
            return None;
        };

        let Some(item) = source.get(position) else {
            // The position was valid when the host queried it but the
            // collection has mutated since. The result here is unspecified;
            // we answer with no element rather than panic.
            self.trace.trace(
                TraceLevel::Error,
                &format!("no item at position {position} - collection mutated since query"),
            );
            return None;
        };

        Some(self.bindable_view(recycled, &item, template_id))
    }
}

impl PagerAdapter for BindingPagerAdapter {
    fn count(&self) -> usize {
        // 0 for an unset source keeps the host's paging math stable.
        self.items_source().map_or(0, |source| source.len())
    }

    fn instantiate_item(
        &self,
        container: &dyn PageContainer,
        position: usize,
    ) -> Option<PageHandle> {
        self.affinity.debug_assert_same_thread();

        let element = self.view(position, None, self.item_template())?;
        container.add_element(Arc::clone(&element));
        Some(element)
    }

    fn destroy_item(&self, container: &dyn PageContainer, _position: usize, handle: PageHandle) {
        self.affinity.debug_assert_same_thread();

        container.remove_element(&handle);
        // The element's resources release with its last handle.
        drop(handle);
    }

    fn data_set_changed(&self) -> &Signal<()> {
        &self.data_set_changed
    }
}

impl Drop for BindingPagerAdapter {
    fn drop(&mut self) {
        // Drop the subscription so the source does not keep invoking a slot
        // bound to a dead adapter.
        let state = self.state.get_mut();
        if let Some(connection) = state.change_connection.take() {
            if let Some(events) = state.items_source.as_ref().and_then(|s| s.change_events()) {
                events.disconnect(connection);
            }
        }
    }
}

static_assertions::assert_impl_all!(BindingPagerAdapter: Send, Sync);
