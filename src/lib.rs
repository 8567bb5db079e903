// src/lib.rs
//! chessdoc library: folds annotated chess documents into any representation.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `FoldError`, `ValidationError`
//! - **Configuration**: `RenderConfig`, `OutputFormat`
//! - **Domain model**: `Content`, `Block`, `Fragment`, `Code`, `Moves`, etc.
//! - **Domain types**: `Ply`, `ZeroTurn`, `OneTurn`, `Line`
//! - **Fold engine**: `DocumentAlgebra`, `DocumentFolder`, `fold`
//! - **Move tree port**: `MoveTreeBuilder`, `MoveTable`, `NoPositions`
//! - **Formatting**: `MarkupAlgebra`, `MarkdownAlgebra`, `TaggedAlgebra`, `render_document`

mod algebras;
mod analytics;
mod config;
pub mod constants;
mod error;
mod fold;
mod formatting;
mod model;
mod move_table;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, FoldError, TurnKind};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, OutputFormat, RenderConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, Castles, ChessDocument, Code, Content, ContinueMove, Fragment, Glyphs, Move,
    MoveNotation, Moves, OneMove, RawCode, TwoMove,
};

// --- Domain Types ---
pub use crate::types::{Line, OneTurn, Ply, RenderedDocument, ZeroTurn};

// --- Fold Engine ---
pub use crate::algebras::DocumentAlgebra;
pub use crate::fold::{fold, DocumentFolder, VariationContext};

// --- Move Tree Port ---
pub use crate::algebras::{MoveTreeBuilder, MoveTreeBuilderExt, MoveView, NoPositions, Position};
pub use crate::move_table::{LineRecord, MoveTable};

// --- Formatting ---
pub use crate::formatting::html::MarkupAlgebra;
pub use crate::formatting::markdown::MarkdownAlgebra;
pub use crate::formatting::markup::{html_escape, Element, Markup};
pub use crate::formatting::tagged::{unfold, Tagged, TaggedAlgebra, UnfoldError};
pub use crate::formatting::{render_document, render_page};

// --- Analytics ---
pub use crate::analytics::{measure_document, CountingAlgebra, DocumentStats};

// --- Output ---
pub use crate::output::{
    deliver, output_path_for, sanitize_filename, Delivered, Delivery, DeliveryTarget,
    FailedDelivery, OutputPlan, OutputReport,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{DocumentComposer, DocumentDelivery, DocumentSource};
