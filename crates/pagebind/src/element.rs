//! Display elements: the recyclable views a paging widget shows.
//!
//! Elements come in two kinds. Simple elements are text-only fallbacks built
//! from an inflated layout and report [`TEMPLATE_NONE`]; bindable elements
//! are tagged with the template id they were built for and support in-place
//! rebinding. The adapter reuses an element across positions when its
//! template tag matches, and discards it otherwise.

use std::sync::Arc;

use crate::item::ItemValue;

/// Integer key selecting which visual template renders an item.
pub type TemplateId = u32;

/// The reserved template id meaning "use the simple fallback template".
pub const TEMPLATE_NONE: TemplateId = 0;

/// Identifier for an inflatable layout resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(pub u32);

/// The built-in single-line text layout used by the simple fallback path.
pub const SIMPLE_ITEM_LAYOUT: LayoutId = LayoutId(1);

/// A recyclable view instance.
///
/// One method is required: [`template_id`](Self::template_id), the tag
/// recycling decisions branch on. The two bind operations are capabilities
/// with no-op defaults, so an element that lacks a text slot silently ignores
/// the simple-bind write and an element without live bindings ignores rebinds.
///
/// Lifecycle: created on first need for a position/template pair, reused
/// across positions while the template tag matches, released when the last
/// [`PageHandle`] clone drops.
pub trait DisplayElement: Send + Sync {
    /// The template id this element was built for.
    ///
    /// Simple fallback elements report [`TEMPLATE_NONE`].
    fn template_id(&self) -> TemplateId;

    /// Writes text into the element's primary text slot, if it has one.
    fn set_text(&self, _text: &str) {}

    /// Forwards a new item to the element's live bindings, if any.
    fn bind_to(&self, _item: &ItemValue) {}
}

/// The opaque per-position handle a paging widget holds.
///
/// Handle identity (`Arc::ptr_eq`) is the only equality the paging protocol
/// applies to elements.
pub type PageHandle = Arc<dyn DisplayElement>;
