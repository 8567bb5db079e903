// src/formatting/page.rs
//! Wraps rendered HTML in a standalone page with Handlebars.

use crate::constants::{DEFAULT_PAGE_TEMPLATE, PAGE_TEMPLATE_NAME};
use crate::error::AppError;
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

/// Renders `body` into the page template under `title`.
///
/// Uses the built-in template unless `template` names a `.hbs` file.
pub fn render_page(title: &str, body: &str, template: Option<&Path>) -> Result<String, AppError> {
    let handlebars = load_template(template)?;

    log::debug!("Rendering standalone page '{}' ({} bytes)", title, body.len());

    handlebars
        .render(PAGE_TEMPLATE_NAME, &json!({ "title": title, "body": body }))
        .map_err(|e| AppError::TemplateRenderError {
            name: PAGE_TEMPLATE_NAME.to_string(),
            message: e.to_string(),
        })
}

/// Loads and registers the page template.
fn load_template(template: Option<&Path>) -> Result<Handlebars<'static>, AppError> {
    let template_content = match template {
        Some(path) => std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
            path: path.display().to_string(),
            source: e,
        })?,
        None => DEFAULT_PAGE_TEMPLATE.to_string(),
    };

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string(PAGE_TEMPLATE_NAME, &template_content)
        .map_err(|e| AppError::TemplateRenderError {
            name: PAGE_TEMPLATE_NAME.to_string(),
            message: e.to_string(),
        })?;

    Ok(handlebars)
}
