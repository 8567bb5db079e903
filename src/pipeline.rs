// src/pipeline.rs
//! Pipeline capability traits: abstract the three stages of rendering a document.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::ChessDocument;
use crate::output::OutputReport;
use crate::types::RenderedDocument;
use std::path::Path;

/// Loads a parsed document bundle.
pub trait DocumentSource {
    fn load(&self, path: &Path) -> Result<ChessDocument, AppError>;
}

/// Folds a document into its rendered representation.
pub trait DocumentComposer {
    fn compose(&self, document: &ChessDocument, title: &str) -> Result<RenderedDocument, AppError>;
}

/// Delivers rendered documents to their destinations.
pub trait DocumentDelivery {
    fn deliver(&self, rendered: Vec<(&Path, RenderedDocument)>) -> Result<OutputReport, AppError>;
}
