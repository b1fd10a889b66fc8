//! Thin component-to-component wrappers.
//!
//! Every helper takes a [`Component`] and gives back a [`Component`], so
//! they chain freely with each other and with [`nest`](crate::nest::nest).
//! Each one relabels its output via
//! [`wrap_display_name`](crate::name::wrap_display_name) so inspector
//! output stays legible through a stack of wrappers.

use std::cell::RefCell;

use log::trace;

use crate::component::Component;
use crate::name::{display_name, wrap_display_name};
use crate::props::Props;

/// A reusable component transformation.
pub type Enhancer<P> = Box<dyn Fn(Component<P>) -> Component<P>>;

/// Apply a sequence of enhancers right to left.
///
/// `compose([a, b, c])` applied to `x` is `a(b(c(x)))`, matching how the
/// wrappers read when written inline.
pub fn compose<P: Props + 'static>(enhancers: impl IntoIterator<Item = Enhancer<P>>) -> Enhancer<P> {
    let enhancers: Vec<_> = enhancers.into_iter().collect();
    Box::new(move |component| {
        enhancers
            .iter()
            .rev()
            .fold(component, |wrapped, enhance| enhance(wrapped))
    })
}

/// Transform the props seen by the wrapped component.
///
/// The mapping runs on every render. Outer props are untouched; only the
/// wrapped component sees the mapped copy. Children bypass the mapping and
/// are threaded through unchanged.
pub fn map_props<P, F>(map: F, component: Component<P>) -> Component<P>
where
    P: Props + 'static,
    F: Fn(&P) -> P + 'static,
{
    let name = wrap_display_name("map_props", &component);
    let factory = component.into_factory();
    Component::factory(move |props, children| factory(&map(props), children)).named(name)
}

/// Render one of two components depending on a props predicate.
///
/// `left` renders when the predicate holds, `right` otherwise. Both sides
/// receive the same props and children.
pub fn branch<P, F>(test: F, left: Component<P>, right: Component<P>) -> Component<P>
where
    P: Props + 'static,
    F: Fn(&P) -> bool + 'static,
{
    let name = format!("branch({}, {})", display_name(&left), display_name(&right));
    let left = left.into_factory();
    let right = right.into_factory();
    Component::factory(move |props, children| {
        if test(props) {
            left(props, children)
        } else {
            right(props, children)
        }
    })
    .named(name)
}

/// Memoize the last render.
///
/// When called with props and children equal to the previous call's, the
/// cached output is cloned instead of re-rendering. One slot only: this
/// skips identical re-renders, it is not a cache keyed by props history.
///
/// Children count as part of the comparison; they are folded into the
/// props slot before comparing, so `P: PartialEq` is the only bound needed.
pub fn pure<P>(component: Component<P>) -> Component<P>
where
    P: Props + PartialEq + 'static,
{
    let name = wrap_display_name("pure", &component);
    let factory = component.into_factory();
    let memo: RefCell<Option<(P, P::Rendered)>> = RefCell::new(None);
    Component::factory(move |props: &P, children| {
        let effective = props.with_children(children);
        if let Some((cached_props, cached_out)) = memo.borrow().as_ref() {
            if *cached_props == effective {
                trace!("pure: props unchanged, reusing cached render");
                return cached_out.clone();
            }
        }
        let out = factory(&effective, effective.children());
        *memo.borrow_mut() = Some((effective, out.clone()));
        out
    })
    .named(name)
}
