//! Component-like inputs and the factory normalizer.
//!
//! Callers hand combinators components in three shapes: a plain renderer
//! (one argument, reads children out of its props), a pre-normalized
//! factory (props and children passed separately), or a ready-made element.
//! [`Component`] is the closed union of those shapes; [`Component::into_factory`]
//! normalizes all of them into the uniform two-argument form, once, so no
//! adapter closures are allocated during re-renders.

use std::rc::Rc;

use crate::props::Props;

/// One-argument renderer. Children, if it wants any, arrive through the
/// reserved slot in its props.
pub type RenderFn<P> = Rc<dyn Fn(&P) -> <P as Props>::Rendered>;

/// Normalized two-argument factory: props and children passed separately.
pub type FactoryFn<P> = Rc<dyn Fn(&P, Option<<P as Props>::Rendered>) -> <P as Props>::Rendered>;

#[derive(Clone)]
enum Kind<P: Props> {
    Render(RenderFn<P>),
    Factory(FactoryFn<P>),
}

/// Anything the combinators can adapt into a [`FactoryFn`].
///
/// Carries an optional display name alongside the callable; names feed the
/// diagnostic labels and are never consulted while rendering.
#[derive(Clone)]
pub struct Component<P: Props> {
    kind: Kind<P>,
    name: Option<String>,
}

impl<P: Props> Component<P> {
    /// Wrap a one-argument renderer.
    pub fn render(f: impl Fn(&P) -> P::Rendered + 'static) -> Self {
        Self {
            kind: Kind::Render(Rc::new(f)),
            name: None,
        }
    }

    /// Wrap an already two-argument factory. Used as-is, no adaptation.
    pub fn factory(f: impl Fn(&P, Option<P::Rendered>) -> P::Rendered + 'static) -> Self {
        Self {
            kind: Kind::Factory(Rc::new(f)),
            name: None,
        }
    }

    /// Wrap a pre-built element so it slots in anywhere a component does.
    ///
    /// Props and children handed to it are ignored; the element renders
    /// as-is at its position in the tree.
    pub fn element(element: P::Rendered) -> Self
    where
        P::Rendered: 'static,
    {
        Self::factory(move |_props, _children| element.clone())
    }

    /// Attach a display name for diagnostics.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Normalize into the uniform two-argument shape.
    ///
    /// A factory passes through untouched. A renderer gets a single wrapper
    /// closure that threads the children into its props via
    /// [`Props::with_children`]; the wrapper is built here, once, not on
    /// each render call.
    pub fn into_factory(self) -> FactoryFn<P>
    where
        P: 'static,
    {
        match self.kind {
            Kind::Factory(f) => f,
            Kind::Render(r) => Rc::new(move |props, children| r(&props.with_children(children))),
        }
    }
}

impl<P: Props> std::fmt::Debug for Component<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            Kind::Render(_) => "Render",
            Kind::Factory(_) => "Factory",
        };
        f.debug_struct("Component")
            .field("kind", &kind)
            .field("name", &self.name)
            .finish()
    }
}
