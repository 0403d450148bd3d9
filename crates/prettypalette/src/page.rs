//! Utility module for rendering the viewer as an HTML document.
//!
//! The page is a pure function of the [`Shell`]'s state: [`render_page`]
//! builds a tree of [`Node`]s, which displays as HTML. Text and attribute
//! values are escaped while displaying, so that titles and colors can be
//! passed through verbatim.
use std::fmt;

use v_htmlescape::escape;

use crate::model::{ChannelMeta, CMYK_CHANNELS, RGB_CHANNELS};
use crate::palette::{shade_label, PALETTE};
use crate::progress::ProgressRing;
use crate::shell::Shell;
use crate::ColorModel;

/// Elements that have neither children nor closing tags.
const VOID_ELEMENTS: [&str; 4] = ["br", "hr", "link", "meta"];

/// The page's stylesheet, a hand-picked subset of Tailwind's utility
/// classes.
///
/// It renders as escaped text and hence must not contain HTML's special
/// characters, including `/` and `'`.
const STYLESHEET: &str = "\
*{box-sizing:border-box}\
body{margin:0;font-family:ui-sans-serif,system-ui,sans-serif;transition:background-color .3s}\
.app{display:grid;grid-template-columns:1fr 1fr}\
.palette{display:flex;flex-direction:column;gap:.5rem;padding:1rem;height:100vh;overflow:auto}\
.palette h2{margin:0 0 .5rem;font-weight:600;letter-spacing:.025em}\
.palette h2 a{color:inherit;text-decoration:none}\
.cells{display:grid;grid-template-columns:repeat(10,1fr);gap:.5rem}\
.cell{height:2rem;border-radius:.25rem;cursor:pointer}\
.cell.selected{outline:2px solid #0f172a;outline-offset:2px}\
.palette h3{margin:.25rem 0 0;text-align:center;font-size:.75rem;font-weight:400;color:#4b5563}\
.preview{display:flex;align-items:center;justify-content:center;height:100vh}\
.card{display:flex;flex-direction:column;align-items:center;gap:1.5rem;background:#fff;\
border:1px solid #e5e7eb;border-radius:.5rem;padding:1.5rem 2.5rem;box-shadow:0 20px 25px -5px rgba(0,0,0,.1)}\
#currThemeTitle{margin:0;font-family:ui-monospace,monospace;font-size:1.25rem;letter-spacing:.025em;color:#000}\
.channels{display:flex;gap:.75rem}\
.channel{display:flex;align-items:center;gap:.5rem}\
.channel span{font-size:1.125rem;opacity:.6;user-select:none}\
.progress{position:relative;width:3rem;aspect-ratio:1}\
.progress-title,.progress svg{position:absolute;inset:0}\
.progress-title{display:flex;align-items:center;justify-content:center;font-size:1.125rem}\
.actions{display:flex;gap:1rem}\
.actions button{border:2px solid #d4d4d4;border-radius:.5rem;background:none;padding:.25rem .75rem;\
font-size:.875rem;font-weight:600;letter-spacing:.025em;color:#d4d4d4;cursor:pointer}\
.actions button:hover{border-color:#7dd3fc;color:#7dd3fc}";

// ====================================================================================================================

/// A node of the render tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element.
    Element(Element),
    /// Some text.
    Text(String),
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => fmt::Display::fmt(&escape(text), f),
        }
    }
}

/// An element of the render tree.
///
/// Attributes display in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create a new element without attributes and children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add the attribute.
    #[must_use = "method returns a new element and does not mutate original value"]
    pub fn with_attr<V: Into<String>>(mut self, name: &'static str, value: V) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Add the child.
    #[must_use = "method returns a new element and does not mutate original value"]
    pub fn with_child<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add all children.
    #[must_use = "method returns a new element and does not mutate original value"]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Add a text child.
    #[must_use = "method returns a new element and does not mutate original value"]
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Get the tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Get the value of the attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get the children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        f.write_str(">")?;

        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// A complete HTML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document(Element);

impl Document {
    /// Get the root element.
    pub fn root(&self) -> &Element {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "{}", self.0)
    }
}

// ====================================================================================================================

/// Render the palette with one titled row of swatches per color scheme.
fn render_palette(shell: &Shell) -> Element {
    let theme = shell.theme();

    Element::new("div")
        .with_attr("class", "palette")
        .with_children(PALETTE.iter().map(|row| {
            let name = row.scheme.name();
            let cells = row.cells.iter().enumerate().map(|(index, cell)| {
                let class = if theme.is_swatch(row.scheme, index) {
                    "cell selected"
                } else {
                    "cell"
                };

                let mut swatch = Element::new("div")
                    .with_attr("class", class)
                    .with_attr("style", format!("background-color: {}", cell));
                if let Ok(target) = row.select(index) {
                    swatch = swatch.with_attr("title", target.title());
                }

                Element::new("div")
                    .with_child(swatch.with_attr("data-color", cell.to_string()))
                    .with_child(Element::new("h3").with_text(shade_label(index).to_string()))
            });

            Element::new("div")
                .with_child(
                    Element::new("h2").with_attr("id", name).with_child(
                        Element::new("a")
                            .with_attr("href", format!("#{}", name))
                            .with_text(name),
                    ),
                )
                .with_child(Element::new("div").with_attr("class", "cells").with_children(cells))
        }))
}

/// Render one labelled ring per channel.
fn render_channels<I>(channels: &[ChannelMeta], rings: I) -> Element
where
    I: Iterator<Item = ProgressRing>,
{
    Element::new("div")
        .with_attr("class", "channels")
        .with_children(channels.iter().zip(rings).map(|(meta, ring)| {
            Element::new("div")
                .with_attr("class", "channel")
                .with_child(
                    Element::new("span")
                        .with_attr("style", format!("color: {}", meta.fill_color))
                        .with_text(meta.name),
                )
                .with_child(ring.to_node())
        }))
}

/// Render the card with title, readouts, and copy buttons.
fn render_preview(shell: &Shell) -> Element {
    let theme = shell.theme();
    let readout = shell.readout();

    let buttons = ColorModel::all().map(|model| {
        Element::new("button")
            .with_attr("type", "button")
            .with_attr("data-model", model.name())
            .with_attr("data-value", readout.formatted(model))
            .with_attr("title", format!("Copy {}", readout.formatted(model)))
            .with_text(model.name())
    });

    Element::new("div").with_attr("class", "preview").with_child(
        Element::new("div")
            .with_attr("class", "card")
            .with_child(
                Element::new("h2")
                    .with_attr("id", "currThemeTitle")
                    .with_text(theme.title()),
            )
            .with_child(render_channels(&CMYK_CHANNELS, shell.cmyk_rings()))
            .with_child(render_channels(&RGB_CHANNELS, shell.rgb_rings()))
            .with_child(
                Element::new("div")
                    .with_attr("class", "actions")
                    .with_children(buttons),
            ),
    )
}

/// Render the complete page for the shell's current state.
///
/// The document's body has the selected theme as background color.
///
/// ```
/// # use prettypalette::{page::render_page, shell::Shell};
/// let html = render_page(&Shell::new()).to_string();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Tailwind Default Palette"));
/// ```
pub fn render_page(shell: &Shell) -> Document {
    let theme = shell.theme();

    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(theme.title()))
        .with_child(Element::new("style").with_text(STYLESHEET));

    let body = Element::new("body")
        .with_attr("style", format!("background-color: {}", theme.color()))
        .with_child(
            Element::new("div")
                .with_attr("class", "app")
                .with_child(render_palette(shell))
                .with_child(render_preview(shell)),
        );

    Document(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body),
    )
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::palette::ColorScheme;
    use crate::error::OutOfBoundsError;

    #[test]
    fn test_escaping() {
        let element = Element::new("p")
            .with_attr("title", "\"quoted\" & <tagged>")
            .with_text("<b>\"bold\"</b> & more");
        assert_eq!(
            element.to_string(),
            "<p title=\"&quot;quoted&quot; &amp; &lt;tagged&gt;\">&lt;b&gt;&quot;bold&quot;&lt;&#x2f;b&gt; &amp; more</p>"
        );
        assert_eq!(
            Node::from("it's <a/b>").to_string(),
            "it&#x27;s &lt;a&#x2f;b&gt;"
        );

        assert_eq!(
            Element::new("meta").with_attr("charset", "utf-8").to_string(),
            "<meta charset=\"utf-8\">"
        );
        assert_eq!(Node::from("Slate-50 (#F8FAFC)").to_string(), "Slate-50 (#F8FAFC)");
    }

    #[test]
    fn test_element_access() {
        let element = Element::new("a")
            .with_attr("href", "#Sky")
            .with_text("Sky");
        assert_eq!(element.tag(), "a");
        assert_eq!(element.attr("href"), Some("#Sky"));
        assert_eq!(element.attr("id"), None);
        assert_eq!(element.children(), &[Node::Text("Sky".to_string())]);
    }

    #[test]
    fn test_default_page() {
        let page = render_page(&Shell::new());
        assert_eq!(page.root().tag(), "html");
        assert_eq!(page.root().attr("lang"), Some("en"));
        assert_eq!(page.root().children().len(), 2);

        let html = page.to_string();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Tailwind Default Palette</title>"));
        assert!(html.contains("<body style=\"background-color: #ffffff\">"));
        assert!(html.contains("<h2 id=\"currThemeTitle\">Tailwind Default Palette</h2>"));
        assert!(html.contains("<h2 id=\"Slate\"><a href=\"#Slate\">Slate</a></h2>"));
        assert!(html.contains("<h2 id=\"Rose\"><a href=\"#Rose\">Rose</a></h2>"));
        assert_eq!(html.matches("<h3>50</h3>").count(), 22);
        assert_eq!(html.matches("<h3>900</h3>").count(), 22);
        assert_eq!(html.matches("class=\"cell\"").count(), 220);
        assert_eq!(html.matches("<button").count(), 4);
        assert_eq!(html.matches("<svg").count(), 7);
        assert!(html.contains("data-value=\"#FFFFFF\""));
        assert!(html.contains("data-value=\"cmyk(0, 0, 0, 0)\""));
        assert!(html.contains(&format!("<style>{}</style>", STYLESHEET)));
    }

    #[test]
    fn test_selected_page() -> Result<(), OutOfBoundsError> {
        let mut shell = Shell::new();
        shell.select_cell(ColorScheme::Sky, 5)?;
        let html = render_page(&shell).to_string();

        assert!(html.contains("<title>Sky-500 (#0EA5E9)</title>"));
        assert!(html.contains("<body style=\"background-color: #0ea5e9\">"));
        assert_eq!(html.matches("class=\"cell selected\"").count(), 1);
        assert!(html.contains("data-value=\"rgb(14, 165, 233)\""));
        assert!(html.contains("data-value=\"hsl(198, 88%, 48%)\""));
        assert!(html.contains(">93</div>"));
        assert!(html.contains(">233</div>"));
        assert!(html.contains(
            "class=\"cell selected\" style=\"background-color: #0ea5e9\" title=\"Sky-500 (#0EA5E9)\""
        ));
        Ok(())
    }

    #[test]
    fn test_shared_color_page() -> Result<(), OutOfBoundsError> {
        let mut shell = Shell::new();
        shell.select_cell(ColorScheme::Neutral, 0)?;
        let html = render_page(&shell).to_string();

        assert_eq!(html.matches("class=\"cell selected\"").count(), 1);
        assert!(html.contains("title=\"Neutral-50 (#FAFAFA)\""));
        assert!(html.contains("title=\"Zinc-50 (#FAFAFA)\""));

        let selected = html.find("class=\"cell selected\"").unwrap_or_default();
        let neutral = html.find("id=\"Neutral\"").unwrap_or_default();
        let stone = html.find("id=\"Stone\"").unwrap_or_default();
        assert!(neutral < selected && selected < stone);
        Ok(())
    }
}
