//! Host integration seam.
//!
//! This library renders nothing itself. It decorates components of an
//! external element-tree framework, and the one convention it relies on is
//! that nested content ("children") travels inside the props handed to a
//! component. [`Props`] encodes that convention as a trait, so any host
//! with a children slot can plug in.

/// Contract between this library and the host rendering framework.
///
/// `Rendered` is the host's element type. The library treats it as opaque:
/// values are passed through or handed to another component as children,
/// never inspected.
///
/// `with_children` uses field-replacement semantics: the returned props are
/// a copy of `self` with the children slot overwritten. Where the slot
/// lives and what it is called is the implementor's business.
pub trait Props: Clone {
    /// The host framework's element type.
    type Rendered: Clone;

    /// Nested content currently attached to these props, if any.
    fn children(&self) -> Option<Self::Rendered>;

    /// A copy of these props with the children slot replaced.
    fn with_children(&self, children: Option<Self::Rendered>) -> Self;
}
