//! Minimal element tree standing in for the browser DOM.
//!
//! Renderers and style applicators operate on [`Element`]s. Inline styles
//! behave like `CSSStyleDeclaration`: setting an empty value removes the
//! property, hex colors read back as `rgb(r, g, b)`, and clearing the
//! `background` shorthand also clears its longhands.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

/// Properties whose values are normalized as colors.
const COLOR_PROPERTIES: &[&str] = &["color", "background-color", "border-color"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted markup inserted verbatim (the `innerHTML` case).
    Raw(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Inline style declarations of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    props: BTreeMap<String, String>,
}

impl Style {
    /// Value of a property, `""` when unset.
    pub fn get(&self, name: &str) -> &str {
        self.props.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove(name);
            return;
        }
        if name == "background" {
            self.clear_background_longhands();
        }
        let value = if COLOR_PROPERTIES.contains(&name) {
            normalize_color(value)
        } else {
            value.to_string()
        };
        self.props.insert(name.to_string(), value);
    }

    pub fn remove(&mut self, name: &str) {
        self.props.remove(name);
        if name == "background" {
            self.clear_background_longhands();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Serialized form, as found in a `style` attribute.
    pub fn css_text(&self) -> String {
        self.props
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn clear_background_longhands(&mut self) {
        self.props.retain(|k, _| !k.starts_with("background-"));
    }
}

/// Convert `#rgb` / `#rrggbb` to `rgb(r, g, b)`. Anything else is kept as is.
pub fn normalize_color(value: &str) -> String {
    let Some(hex) = value.strip_prefix('#') else {
        return value.to_string();
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return value.to_string();
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return value.to_string(),
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => format!("rgb({}, {}, {})", r, g, b),
        _ => value.to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    pub style: Style,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add one or more space separated classes.
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_style(mut self, name: &str, value: &str) -> Self {
        self.style.set(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace the whole class list (the `className = ...` case).
    pub fn set_class_name(&mut self, classes: &str) {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    pub fn is_hidden(&self) -> bool {
        self.attrs.contains_key("hidden")
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set_attr("hidden", "");
        } else {
            self.remove_attr("hidden");
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Replace all children (the `innerHTML = ...` case for built markup).
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Replace all children with raw markup.
    pub fn set_inner_html(&mut self, html: &str) {
        self.children = if html.is_empty() {
            Vec::new()
        } else {
            vec![Node::Raw(html.to_string())]
        };
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::Text(text.to_string())]
        };
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Concatenated text of all descendants. Raw markup counts verbatim.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
            }
        }
    }

    /// Depth-first search over descendants (self included).
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// First descendant (self included) with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_tag(tag))
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements_mut().find_map(|c| c.find_by_tag_mut(tag))
    }

    /// All descendants (self excluded) carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.child_elements() {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_all_by_class(class));
        }
        found
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(&mut out, child);
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(t) => out.push_str(&escape_html(t)),
        Node::Raw(html) => out.push_str(html),
    }
}

fn write_element(out: &mut String, el: &Element) {
    let _ = write!(out, "<{}", el.tag);
    if let Some(id) = &el.id {
        let _ = write!(out, " id=\"{}\"", escape_html(id));
    }
    if !el.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_html(&el.classes.join(" ")));
    }
    if !el.style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape_html(&el.style.css_text()));
    }
    for (name, value) in &el.attrs {
        if value.is_empty() {
            let _ = write!(out, " {}", name);
        } else {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#fafafa"), "rgb(250, 250, 250)");
        assert_eq!(normalize_color("#123456"), "rgb(18, 52, 86)");
        assert_eq!(normalize_color("#fff"), "rgb(255, 255, 255)");
        assert_eq!(normalize_color("red"), "red");
        assert_eq!(normalize_color("#zzzzzz"), "#zzzzzz");
        assert_eq!(normalize_color("#12345"), "#12345");
    }

    #[test]
    fn test_style_set_and_clear() {
        let mut style = Style::default();
        style.set("background-color", "#fafafa");
        assert_eq!(style.get("background-color"), "rgb(250, 250, 250)");
        style.set("background-color", "");
        assert_eq!(style.get("background-color"), "");
        assert!(style.is_empty());
    }

    #[test]
    fn test_custom_properties_are_not_normalized() {
        let mut style = Style::default();
        style.set("--color-primary", "#111111");
        assert_eq!(style.get("--color-primary"), "#111111");
    }

    #[test]
    fn test_background_shorthand_clears_longhands() {
        let mut style = Style::default();
        style.set("background-image", "url('a.jpg')");
        style.set("background-size", "cover");
        style.set("color", "#000000");
        style.remove("background");
        assert_eq!(style.get("background-image"), "");
        assert_eq!(style.get("background-size"), "");
        assert_eq!(style.get("color"), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_find_by_id_nested() {
        let mut root = Element::new("body").with_child(
            Element::new("section")
                .with_id("hero")
                .with_child(Element::new("h1").with_id("hero-title")),
        );
        assert!(root.find_by_id("hero-title").is_some());
        assert!(root.find_by_id("missing").is_none());
        root.find_by_id_mut("hero-title").unwrap().set_text("Hola");
        assert_eq!(root.text_content(), "Hola");
    }

    #[test]
    fn test_to_html_escapes_text_and_attrs() {
        let el = Element::new("a")
            .with_class("x y")
            .with_attr("href", "/?a=1&b=2")
            .with_text("<script>");
        assert_eq!(
            el.to_html(),
            "<a class=\"x y\" href=\"/?a=1&amp;b=2\">&lt;script&gt;</a>"
        );
    }

    #[test]
    fn test_void_and_boolean_attrs() {
        let img = Element::new("img").with_attr("src", "a.png").with_attr("hidden", "");
        assert_eq!(img.to_html(), "<img hidden src=\"a.png\">");
    }

    #[test]
    fn test_raw_markup_is_verbatim() {
        let mut div = Element::new("div");
        div.set_inner_html("<b>bold</b>");
        assert_eq!(div.inner_html(), "<b>bold</b>");
    }

    #[test]
    fn test_find_all_by_class() {
        let root = Element::new("div")
            .with_child(Element::new("p").with_class("item"))
            .with_child(Element::new("div").with_child(Element::new("span").with_class("item")));
        assert_eq!(root.find_all_by_class("item").len(), 2);
    }
}
