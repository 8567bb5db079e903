// src/formatting/mod.rs
//! Concrete algebras and the rendering entry point used by the CLI.

pub mod html;
pub mod markdown;
pub mod markup;
mod page;
pub mod tagged;

pub use self::page::render_page;

use crate::algebras::MoveTreeBuilder;
use crate::config::{OutputFormat, RenderConfig};
use crate::error::AppError;
use crate::fold::fold;
use crate::model::ChessDocument;
use crate::types::RenderedDocument;

/// Renders one document in the configured format.
///
/// `title` is only used when HTML output is wrapped in a standalone page.
pub fn render_document(
    document: &ChessDocument,
    config: &RenderConfig,
    title: &str,
) -> Result<RenderedDocument, AppError> {
    let builder: &dyn MoveTreeBuilder = &document.positions;
    log::debug!(
        "Rendering {} blocks as {} ({} lines with positions)",
        document.content.len(),
        config.format,
        document.positions.line_count()
    );

    let rendered = match config.format {
        OutputFormat::Html => {
            let algebra =
                html::MarkupAlgebra::new(builder).with_separator(config.separator.as_str());
            let body = fold(&algebra, &document.content)?.to_html();
            if config.standalone {
                render_page(title, &body, config.template.as_deref())?
            } else {
                body
            }
        }
        OutputFormat::Markdown => {
            let algebra =
                markdown::MarkdownAlgebra::new(builder).with_separator(config.separator.as_str());
            fold(&algebra, &document.content)?
        }
        OutputFormat::Tree => {
            let tree = fold(&tagged::TaggedAlgebra, &document.content)?;
            serde_json::to_string_pretty(&tree)?
        }
    };

    Ok(RenderedDocument::new(rendered))
}
