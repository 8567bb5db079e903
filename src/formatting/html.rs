// src/formatting/html.rs
//! Algebra binding documents to an HTML element tree.
//!
//! Each node kind maps to one element with a fixed class, so stylesheets
//! and scripts written against the rendered page can target moves, turns
//! and boards directly. Boards and moves are resolved through the bound
//! [`MoveTreeBuilder`]; when a lookup comes back empty the element is still
//! emitted, just without position data.

use super::markup::{Element, Markup};
use crate::algebras::{DocumentAlgebra, MoveTreeBuilder, MoveTreeBuilderExt};
use crate::constants::DEFAULT_CODE_SEPARATOR;
use crate::types::Ply;

/// Builds [`Markup`] for every document node.
pub struct MarkupAlgebra<'b, B: MoveTreeBuilder + ?Sized> {
    builder: &'b B,
    separator: String,
}

impl<'b, B: MoveTreeBuilder + ?Sized> MarkupAlgebra<'b, B> {
    pub fn new(builder: &'b B) -> Self {
        Self {
            builder,
            separator: DEFAULT_CODE_SEPARATOR.to_string(),
        }
    }

    /// Text inserted after every folded code element.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn leaf(selector: &str, text: &str) -> Markup {
        Markup::h(selector, vec![Markup::text(text)])
    }
}

impl<B: MoveTreeBuilder + ?Sized> DocumentAlgebra for MarkupAlgebra<'_, B> {
    type Output = Markup;

    fn fen(&self, fen: &str) -> Markup {
        Self::leaf("span.fen", fen)
    }

    fn newline(&self, _text: &str) -> Markup {
        Markup::h("span.newline", Vec::new())
    }

    fn headline(&self, text: &str) -> Markup {
        Self::leaf("h2", text)
    }

    fn text(&self, text: &str) -> Markup {
        Self::leaf("span", text)
    }

    fn line(&self, line: &str) -> Markup {
        Self::leaf("span.line", line)
    }

    fn san(&self, san: &str) -> Markup {
        Self::leaf("span.san", san)
    }

    fn zero_turn(&self, label: &str) -> Markup {
        Self::leaf("strong.zeroturn", label)
    }

    fn one_turn(&self, label: &str) -> Markup {
        Self::leaf("strong.oneturn", label)
    }

    fn content(&self, children: Vec<Markup>) -> Markup {
        Markup::h("div.content", children)
    }

    fn paragraph(&self, children: Vec<Markup>) -> Markup {
        Markup::h("div.p", children)
    }

    fn one_move(&self, children: Vec<Markup>) -> Markup {
        Markup::h("span.omove", children)
    }

    fn two_move(&self, children: Vec<Markup>) -> Markup {
        Markup::h("span.tmove", children)
    }

    fn c_move(&self, children: Vec<Markup>) -> Markup {
        Markup::h("span.cmove", children)
    }

    fn expand_code(&self, code: Markup) -> Vec<Markup> {
        vec![code, Markup::text(self.separator.as_str())]
    }

    fn board(&self, ply: Ply, line: &str) -> Markup {
        let (fen, last_move) = if ply.is_zero() {
            (self.builder.zero_ply(line).map(|position| position.fen), None)
        } else {
            match self.builder.ply_move(line, ply) {
                Some(view) => (Some(view.after.fen), Some(view.uci)),
                None => (None, None),
            }
        };

        let mut element = Element::from_selector("div.board");
        match fen {
            Some(fen) => element = element.attr("data-fen", fen),
            None => log::debug!("No position for board on line '{}' at ply {}", line, ply),
        }
        if let Some(uci) = last_move {
            element = element.attr("data-last-move", uci);
        }
        Markup::Element(element)
    }

    fn move_at(
        &self,
        ply: Ply,
        san: Markup,
        glyphs: Vec<Markup>,
        line: &str,
        parent_line: Option<&str>,
    ) -> Markup {
        let view = self.builder.ply_move(line, ply);
        let mut element = Element::from_selector("div.move");

        if let Some(error) = self.builder.first_error(line, ply) {
            element = element.attr("data-error", &error).attr("title", error);
        }
        if let Some(parent_line) = parent_line {
            element = element.attr("data-parent-line", parent_line);
        }

        let san = match view {
            Some(view) => {
                element = element
                    .attr("data-fen", view.after.fen)
                    .attr("data-uci", view.uci);
                Self::leaf("span.san", &view.san)
            }
            None => {
                log::debug!("No resolved move on line '{}' at ply {}", line, ply);
                san
            }
        };

        let mut children = Vec::with_capacity(1 + glyphs.len());
        children.push(san);
        children.extend(glyphs);
        Markup::Element(element.children(children))
    }
}
