//! Capability algebras for chessdoc.
//!
//! This module defines the traits that represent **capabilities**, not
//! implementations:
//!
//! - [`DocumentAlgebra`]: how each document node kind is constructed in
//!   some output representation
//! - [`MoveTreeBuilder`]: how a line and ply resolve to a board position
//!
//! # Architecture
//!
//! ```text
//! Caller (main.rs / library user)
//!         ↓ supplies
//! DocumentAlgebra impl ──closes over──→ MoveTreeBuilder impl
//!         ↑ called by
//! DocumentFolder (fold/)
//! ```
//!
//! The folder only ever talks to the algebra. Position lookups stay inside
//! algebra implementations, so the fold itself is a pure structural walk.
//!
//! # Laws
//!
//! Each trait documents algebraic laws that all implementations must satisfy.
//! These are verified via law tests in each module's test suite.

pub mod builder;
pub mod document;

// Re-exports for convenience
pub use builder::{MoveTreeBuilder, MoveTreeBuilderExt, MoveView, NoPositions, Position};
pub use document::DocumentAlgebra;
