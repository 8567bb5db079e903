// src/formatting/markdown.rs
//! Algebra rendering documents as markdown text.

use crate::algebras::{DocumentAlgebra, MoveTreeBuilder, MoveTreeBuilderExt};
use crate::constants::DEFAULT_CODE_SEPARATOR;
use crate::types::Ply;

/// Renders every document node to a markdown `String`.
///
/// Moves print the resolved SAN when the builder knows the move and the
/// written SAN otherwise. Builder diagnostics are appended in braces, the
/// way PGN comments read.
pub struct MarkdownAlgebra<'b, B: MoveTreeBuilder + ?Sized> {
    builder: &'b B,
    separator: String,
}

impl<'b, B: MoveTreeBuilder + ?Sized> MarkdownAlgebra<'b, B> {
    pub fn new(builder: &'b B) -> Self {
        Self {
            builder,
            separator: DEFAULT_CODE_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<B: MoveTreeBuilder + ?Sized> DocumentAlgebra for MarkdownAlgebra<'_, B> {
    type Output = String;

    fn fen(&self, fen: &str) -> String {
        format!("`{}`", fen)
    }

    fn newline(&self, _text: &str) -> String {
        "\n".to_string()
    }

    fn headline(&self, text: &str) -> String {
        format!("## {}\n\n", text.trim())
    }

    fn text(&self, text: &str) -> String {
        text.to_string()
    }

    fn line(&self, line: &str) -> String {
        format!("_{}_", line)
    }

    fn san(&self, san: &str) -> String {
        san.to_string()
    }

    fn zero_turn(&self, label: &str) -> String {
        label.to_string()
    }

    fn one_turn(&self, label: &str) -> String {
        label.to_string()
    }

    fn content(&self, children: Vec<String>) -> String {
        children.concat()
    }

    fn paragraph(&self, children: Vec<String>) -> String {
        let text = children.concat();
        format!("{}\n\n", text.trim_end())
    }

    fn one_move(&self, children: Vec<String>) -> String {
        children.join(" ")
    }

    fn two_move(&self, children: Vec<String>) -> String {
        children.join(" ")
    }

    fn c_move(&self, children: Vec<String>) -> String {
        children.join(" ")
    }

    fn expand_code(&self, code: String) -> Vec<String> {
        vec![code, self.separator.clone()]
    }

    fn board(&self, ply: Ply, line: &str) -> String {
        match self.builder.position_at(line, ply) {
            Some(position) => format!("```fen\n{}\n```\n\n", position.fen),
            None => {
                log::debug!("No position for board on line '{}' at ply {}", line, ply);
                format!("<!-- no position for line '{}' at ply {} -->\n\n", line, ply)
            }
        }
    }

    fn move_at(
        &self,
        ply: Ply,
        san: String,
        glyphs: Vec<String>,
        line: &str,
        _parent_line: Option<&str>,
    ) -> String {
        let mut rendered = match self.builder.ply_move(line, ply) {
            Some(view) => view.san,
            None => san,
        };
        for glyph in glyphs {
            rendered.push_str(&glyph);
        }
        if let Some(error) = self.builder.first_error(line, ply) {
            rendered.push_str(&format!(" {{{}}}", error));
        }
        rendered
    }
}
