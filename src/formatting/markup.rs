// src/formatting/markup.rs
//! A small element tree, the output type of the HTML algebra.
//!
//! Elements are written with CSS-selector shorthand (`"span.san"`).
//! Serialization to HTML is the only place where escaping happens.

use serde::Serialize;
use std::fmt::Write;

/// An HTML element with classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    /// Creates an element from `tag.class1.class2`; an empty tag means `div`.
    pub fn from_selector(selector: &str) -> Self {
        let mut parts = selector.split('.');
        let tag = match parts.next() {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => "div".to_string(),
        };
        Self {
            tag,
            classes: parts
                .filter(|class| !class.is_empty())
                .map(str::to_string)
                .collect(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn children(mut self, children: Vec<Markup>) -> Self {
        self.children = children;
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A node of rendered output: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Markup {
    Element(Element),
    Text(String),
}

impl Markup {
    /// Element shorthand: `Markup::h("span.san", vec![Markup::text("e4")])`.
    pub fn h(selector: &str, children: Vec<Markup>) -> Self {
        Markup::Element(Element::from_selector(selector).children(children))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Markup::Element(element) => Some(element),
            Markup::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(text),
            Markup::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element in the subtree carrying `class`, in document order.
    pub fn find_by_class<'m>(&'m self, class: &str) -> Vec<&'m Element> {
        let mut found = Vec::new();
        self.walk_class(class, &mut found);
        found
    }

    fn walk_class<'m>(&'m self, class: &str, found: &mut Vec<&'m Element>) {
        if let Markup::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.walk_class(class, found);
            }
        }
    }

    /// Serializes the tree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(&html_escape(text)),
            Markup::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", html_escape(&element.classes.join(" ")));
                }
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, html_escape(value));
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// Basic HTML escaping.
pub fn html_escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
