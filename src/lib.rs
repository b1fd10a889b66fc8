//! Composable higher-order component wrappers for element-tree UIs.
//!
//! `renest` decorates components of an external rendering framework. It
//! never renders anything itself; the host is reached only through the
//! [`Props`] trait, which encodes the "children ride inside the props"
//! convention.
//!
//! The core is [`nest`]: given an ordered sequence of component-like
//! inputs, it builds one component that renders them inside each other,
//! first-listed outermost. Around it sit equally thin wrappers
//! ([`enhance`]) for prop mapping, conditional rendering, and render
//! memoization.
//!
//! ```ignore
//! use renest::prelude::*;
//!
//! let page = nest([
//!     Component::render(layout).named("Layout"),
//!     Component::render(card).named("Card"),
//! ]);
//! let html = page.render(&props);
//! ```
//!
//! Everything is synchronous and single-threaded, tied to the host's
//! render pass. Diagnostic display-name labels are computed in
//! [`BuildMode::Development`] only and never affect rendering.

pub mod component;
pub mod enhance;
pub mod mode;
pub mod name;
pub mod nest;
pub mod props;

pub use component::{Component, FactoryFn, RenderFn};
pub use mode::{BuildMode, ParseBuildModeError};
pub use nest::{Nested, nest, nest_in_mode};
pub use props::Props;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use renest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component::Component;
    pub use crate::enhance::{Enhancer, branch, compose, map_props, pure};
    pub use crate::mode::BuildMode;
    pub use crate::name::{display_name, wrap_display_name};
    pub use crate::nest::{Nested, nest, nest_in_mode};
    pub use crate::props::Props;
}
