use std::cell::RefCell;
use std::rc::Rc;

use renest::enhance::{Enhancer, branch, compose, map_props, pure};
use renest::{Component, Props};

// ============================================================================
// Toy host (same shape as tests/nest.rs)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
struct Tag {
    name: String,
    child: Option<Box<Tag>>,
}

impl Tag {
    fn leaf(name: &str) -> Self {
        Self {
            name: name.into(),
            child: None,
        }
    }

    fn wrap(name: &str, child: Option<Tag>) -> Self {
        Self {
            name: name.into(),
            child: child.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PageProps {
    title: String,
    children: Option<Tag>,
}

impl PageProps {
    fn new(title: &str) -> Self {
        Self {
            title: title.into(),
            children: None,
        }
    }
}

impl Props for PageProps {
    type Rendered = Tag;

    fn children(&self) -> Option<Tag> {
        self.children.clone()
    }

    fn with_children(&self, children: Option<Tag>) -> Self {
        Self {
            children,
            ..self.clone()
        }
    }
}

// ============================================================================
// map_props
// ============================================================================

#[test]
fn test_map_props_transforms_wrapped_view() {
    let title = Component::render(|p: &PageProps| Tag::leaf(&p.title)).named("Title");
    let mapped = map_props(
        |p: &PageProps| PageProps {
            title: p.title.to_uppercase(),
            ..p.clone()
        },
        title,
    );

    assert_eq!(mapped.name(), Some("map_props(Title)"));

    let factory = mapped.into_factory();
    assert_eq!(factory(&PageProps::new("home"), None), Tag::leaf("HOME"));
}

#[test]
fn test_map_props_threads_children_unmapped() {
    let renderer = Component::render(|p: &PageProps| Tag::wrap(&p.title, p.children()));
    let mapped = map_props(
        |p: &PageProps| PageProps {
            title: p.title.to_uppercase(),
            ..p.clone()
        },
        renderer,
    );

    let factory = mapped.into_factory();
    let out = factory(&PageProps::new("home"), Some(Tag::leaf("x")));
    assert_eq!(out, Tag::wrap("HOME", Some(Tag::leaf("x"))));
}

// ============================================================================
// branch
// ============================================================================

#[test]
fn test_branch_picks_side_by_predicate() {
    let left = Component::factory(|_p: &PageProps, c| Tag::wrap("left", c)).named("Left");
    let right = Component::factory(|_p: &PageProps, c| Tag::wrap("right", c)).named("Right");

    let branched = branch(|p: &PageProps| p.title == "admin", left, right);
    assert_eq!(branched.name(), Some("branch(Left, Right)"));

    let factory = branched.into_factory();
    assert_eq!(
        factory(&PageProps::new("admin"), None),
        Tag::wrap("left", None)
    );
    assert_eq!(
        factory(&PageProps::new("guest"), None),
        Tag::wrap("right", None)
    );
}

// ============================================================================
// pure
// ============================================================================

#[test]
fn test_pure_skips_identical_rerenders() {
    let renders = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&renders);

    let component = Component::render(move |p: &PageProps| {
        *counter.borrow_mut() += 1;
        Tag::leaf(&p.title)
    })
    .named("Title");

    let memoized = pure(component);
    assert_eq!(memoized.name(), Some("pure(Title)"));

    let factory = memoized.into_factory();
    let first = factory(&PageProps::new("home"), None);
    let second = factory(&PageProps::new("home"), None);

    assert_eq!(first, second);
    assert_eq!(*renders.borrow(), 1);

    factory(&PageProps::new("about"), None);
    assert_eq!(*renders.borrow(), 2);
}

#[test]
fn test_pure_recomputes_when_children_change() {
    let renders = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&renders);

    let component = Component::factory(move |_p: &PageProps, children| {
        *counter.borrow_mut() += 1;
        Tag::wrap("box", children)
    });

    let factory = pure(component).into_factory();
    let props = PageProps::new("home");

    factory(&props, Some(Tag::leaf("x")));
    factory(&props, Some(Tag::leaf("y")));
    assert_eq!(*renders.borrow(), 2);

    // Same children again: cached.
    factory(&props, Some(Tag::leaf("y")));
    assert_eq!(*renders.borrow(), 2);
}

// ============================================================================
// compose
// ============================================================================

/// Enhancer that wraps a component's output in a named tag.
fn tag_with(name: &'static str) -> Enhancer<PageProps> {
    Box::new(move |component| {
        let inner = component.into_factory();
        Component::factory(move |props, children| Tag::wrap(name, Some(inner(props, children))))
    })
}

#[test]
fn test_compose_applies_right_to_left() {
    let composed = compose([tag_with("a"), tag_with("b")]);
    let base = Component::render(|_p: &PageProps| Tag::leaf("x"));

    let factory = composed(base).into_factory();
    let out = factory(&PageProps::new("home"), None);

    // compose([a, b]) is a(b(x)): "a" ends up outermost.
    let expected = Tag::wrap("a", Some(Tag::wrap("b", Some(Tag::leaf("x")))));
    assert_eq!(out, expected);
}
