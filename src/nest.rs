//! The nesting reducer.
//!
//! [`nest`] turns an ordered sequence of components into one component that
//! renders them inside each other, first-listed outermost. Reading the
//! input top-to-bottom matches the markup outside-in:
//! `nest([a, b])` renders as `<a><b>{children}</b></a>`.

use log::trace;

use crate::component::{Component, FactoryFn};
use crate::mode::BuildMode;
use crate::name::display_name;
use crate::props::Props;

/// A stack of components assembled by [`nest`].
///
/// Holds only the normalized factories (and, in development mode, a
/// diagnostic label). No state is retained across renders.
#[derive(Clone)]
pub struct Nested<P: Props> {
    factories: Vec<FactoryFn<P>>,
    label: Option<String>,
}

/// Compose components into a single nested-rendering factory.
///
/// The diagnostic label is controlled by [`BuildMode::current`]; see
/// [`nest_in_mode`] to pass the mode explicitly.
pub fn nest<P>(components: impl IntoIterator<Item = Component<P>>) -> Nested<P>
where
    P: Props + 'static,
{
    nest_in_mode(BuildMode::current(), components)
}

/// [`nest`] with an explicit build mode.
///
/// In [`BuildMode::Development`] the result carries a `"nest(A, B)"` label
/// built from the components' display names; in
/// [`BuildMode::Production`] no label is computed. Rendering is identical
/// in both modes.
pub fn nest_in_mode<P>(
    mode: BuildMode,
    components: impl IntoIterator<Item = Component<P>>,
) -> Nested<P>
where
    P: Props + 'static,
{
    let components: Vec<_> = components.into_iter().collect();

    let label = mode.diagnostics().then(|| {
        let names: Vec<&str> = components.iter().map(display_name).collect();
        format!("nest({})", names.join(", "))
    });

    // Normalize up front; render calls only run the fold.
    let factories: Vec<_> = components
        .into_iter()
        .map(Component::into_factory)
        .collect();

    trace!(
        "built {} over {} component(s)",
        label.as_deref().unwrap_or("nest"),
        factories.len()
    );

    Nested { factories, label }
}

impl<P: Props> Nested<P> {
    /// Render with the given props.
    ///
    /// The accumulator starts at `props.children()`; the factories are
    /// folded right to left, so the last-listed component wraps the
    /// supplied children first and the first-listed ends up outermost.
    /// Every factory observes the same `props` borrow; only the
    /// accumulated child changes from level to level.
    ///
    /// With no factories this is the identity on `props.children()`, which
    /// is where the `None` case comes from.
    pub fn render(&self, props: &P) -> Option<P::Rendered> {
        let mut child = props.children();
        for factory in self.factories.iter().rev() {
            child = Some(factory(props, child));
        }
        child
    }

    /// Number of components in the stack.
    pub fn depth(&self) -> usize {
        self.factories.len()
    }

    /// Diagnostic label (`"nest(A, B)"`). Present in development mode only.
    pub fn display_name(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A nest is itself a component, so nests compose with everything else.
///
/// Children handed to the resulting factory are threaded through the props
/// slot so the innermost factory picks them up. An empty nest given no
/// children renders the host's default (empty) element, which is why
/// `Rendered: Default` is required here and nowhere else.
impl<P> From<Nested<P>> for Component<P>
where
    P: Props + 'static,
    P::Rendered: Default,
{
    fn from(nested: Nested<P>) -> Self {
        let name = nested.label.clone();
        let component = Component::factory(move |props: &P, children| {
            nested
                .render(&props.with_children(children))
                .unwrap_or_default()
        });
        match name {
            Some(name) => component.named(name),
            None => component,
        }
    }
}

impl<P: Props> std::fmt::Debug for Nested<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nested")
            .field("depth", &self.factories.len())
            .field("label", &self.label)
            .finish()
    }
}
