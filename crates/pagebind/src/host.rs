//! Host capability traits.
//!
//! The host UI framework (view inflation, view hierarchies, widget lifecycle)
//! stays outside this crate. The adapter reaches it through three narrow
//! contracts: a [`HostContext`] that can (or cannot) supply a
//! [`BindingHost`], and a [`PageContainer`] the paging widget fills and
//! drains. Construction fails fast when the context lacks the binding
//! capability; everything else is duck typing made explicit.

use std::sync::Arc;

use crate::element::{LayoutId, PageHandle, TemplateId};
use crate::item::ItemValue;

/// The collaborator that can inflate layouts and build bound templates.
///
/// This is the capability the adapter cannot function without.
pub trait BindingHost: Send + Sync {
    /// Inflates a layout resource into a new, detached element.
    ///
    /// No binding is applied; the caller binds afterwards.
    fn inflate(&self, layout: LayoutId) -> PageHandle;

    /// Builds a template instance for `template_id` and binds it to `item`.
    ///
    /// The returned element must report `template_id` from
    /// [`DisplayElement::template_id`](crate::DisplayElement::template_id)
    /// so it can be recycled correctly.
    fn build_bound(&self, template_id: TemplateId, item: &ItemValue) -> PageHandle;
}

/// The host context an adapter is constructed from.
///
/// Capability discovery point: a context that returns `None` from
/// [`binding_host`](Self::binding_host) cannot host an adapter, and
/// construction fails immediately.
pub trait HostContext: Send + Sync {
    /// Returns the binding host this context supports, if any.
    fn binding_host(&self) -> Option<Arc<dyn BindingHost>>;
}

/// The live page area a paging widget fills and drains.
pub trait PageContainer: Send + Sync {
    /// Adds an element as a child of the container.
    fn add_element(&self, element: PageHandle);

    /// Removes an element from the container.
    fn remove_element(&self, element: &PageHandle);
}
