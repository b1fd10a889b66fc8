// Example: nested page
//
// Builds a page out of plain renderers, nests them, and prints the
// resulting markup. The host here is a toy HTML tree; a real host would
// be whatever element type your framework renders.

use std::fmt;
use std::fs::File;

use renest::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone, PartialEq, Default)]
enum Html {
    #[default]
    Empty,
    Text(String),
    Node {
        tag: String,
        children: Vec<Html>,
    },
}

impl Html {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn node(tag: &str, children: Vec<Html>) -> Self {
        Self::Node {
            tag: tag.into(),
            children,
        }
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Node { tag, children } => {
                write!(f, "<{tag}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PageProps {
    title: String,
    user: Option<String>,
    children: Option<Html>,
}

impl Props for PageProps {
    type Rendered = Html;

    fn children(&self) -> Option<Html> {
        self.children.clone()
    }

    fn with_children(&self, children: Option<Html>) -> Self {
        Self {
            children,
            ..self.clone()
        }
    }
}

fn layout(props: &PageProps) -> Html {
    let mut children = vec![Html::node("h1", vec![Html::text(&props.title)])];
    children.extend(props.children());
    Html::node("main", children)
}

fn card(props: &PageProps) -> Html {
    Html::node("section", props.children().into_iter().collect())
}

fn welcome(props: &PageProps) -> Html {
    let user = props.user.as_deref().unwrap_or("stranger");
    let mut children = vec![Html::node("p", vec![Html::text(format!("Welcome back, {user}."))])];
    children.extend(props.children());
    Html::node("div", children)
}

fn sign_in(_props: &PageProps) -> Html {
    Html::node("a", vec![Html::text("Sign in")])
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("page.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let greeting = branch(
        |p: &PageProps| p.user.is_some(),
        Component::render(welcome).named("Welcome"),
        Component::render(sign_in).named("SignIn"),
    );

    let page = nest([
        Component::render(layout).named("Layout"),
        Component::render(card).named("Card"),
        greeting,
    ]);

    if let Some(label) = page.display_name() {
        println!("{label}");
    }

    let props = PageProps {
        title: "Dashboard".into(),
        user: Some("ada".into()),
        children: Some(Html::text("Last sync: 2m ago")),
    };

    if let Some(html) = page.render(&props) {
        println!("{html}");
    }

    Ok(())
}
