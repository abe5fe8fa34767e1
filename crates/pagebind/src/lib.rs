//! Pagebind: a data-binding pager adapter.
//!
//! Given an ordered items source and a per-item template id, the adapter
//! lazily materializes, binds, and recycles display elements as a host
//! paging widget pages through items, and keeps displayed content
//! synchronized when the underlying collection mutates.
//!
//! - **Sources**: [`ItemsSource`] is the read surface; [`ObservableVec`] is
//!   the canonical change-notifying implementation. The adapter never copies
//!   the data, so external mutation is immediately visible.
//! - **Elements**: [`DisplayElement`]s are recyclable views tagged with the
//!   template they were built for; the simple fallback renders an item's
//!   string form into a single text slot.
//! - **Hosts**: the UI framework is reached only through the capability
//!   traits in [`host`] - inflation and template binding via
//!   [`BindingHost`], page insertion and removal via [`PageContainer`].
//! - **Adapter**: [`BindingPagerAdapter`] implements the [`PagerAdapter`]
//!   protocol a paging widget consumes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pagebind::prelude::*;
//! use pagebind::source::ObservableVec;
//!
//! fn attach(context: &dyn HostContext) -> pagebind::Result<BindingPagerAdapter> {
//!     let adapter = BindingPagerAdapter::new(context)?;
//!
//!     let items = Arc::new(ObservableVec::new(vec![
//!         "Overview".to_string(),
//!         "Details".to_string(),
//!         "History".to_string(),
//!     ]));
//!     adapter.set_items_source(Some(items));
//!     assert_eq!(adapter.count(), 3);
//!     Ok(adapter)
//! }
//! ```
//!
//! # Threading
//!
//! The paging model is single-threaded and cooperative: all adapter
//! operations are expected on the host's UI thread, and change notifications
//! run inline on whatever thread mutates the collection. The adapter carries
//! a [`ThreadAffinity`](pagebind_core::ThreadAffinity) debug guard on its
//! mutating and view-producing paths; release builds pay nothing.

pub mod adapter;
pub mod element;
pub mod error;
pub mod host;
pub mod item;
pub mod source;

pub use adapter::{BindingPagerAdapter, PagerAdapter};
pub use element::{DisplayElement, LayoutId, PageHandle, TemplateId, SIMPLE_ITEM_LAYOUT, TEMPLATE_NONE};
pub use error::{AdapterError, Result};
pub use host::{BindingHost, HostContext, PageContainer};
pub use item::{AnyItem, ItemValue};
pub use source::{CollectionEvent, ItemsSource, ObservableVec};

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use crate::adapter::{BindingPagerAdapter, PagerAdapter};
    pub use crate::element::{DisplayElement, LayoutId, PageHandle, TemplateId, TEMPLATE_NONE};
    pub use crate::host::{BindingHost, HostContext, PageContainer};
    pub use crate::item::ItemValue;
    pub use crate::source::{CollectionEvent, ItemsSource, ObservableVec};
}
