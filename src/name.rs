//! Display-name helpers for debugging and inspector output.

use crate::component::Component;
use crate::props::Props;

/// Fallback name for components constructed without one.
pub const ANONYMOUS: &str = "Component";

/// Human-readable name of a component, with a generic fallback.
pub fn display_name<P: Props>(component: &Component<P>) -> &str {
    component.name().unwrap_or(ANONYMOUS)
}

/// Label for a wrapper around a named component: `wrapper(Inner)`.
///
/// Keeps inspector output legible when a component passes through several
/// wrappers: `pure(map_props(Page))` reads as the chain it is.
pub fn wrap_display_name<P: Props>(wrapper: &str, inner: &Component<P>) -> String {
    format!("{wrapper}({})", display_name(inner))
}
