// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning decides where each rendered document goes without touching the
//! filesystem; [`deliver`] is the only place that performs output I/O.

mod paths;
mod types;
mod writer;

pub use paths::{output_path_for, sanitize_filename};
pub use types::{Delivered, Delivery, DeliveryTarget, FailedDelivery, OutputPlan, OutputReport};
pub use writer::deliver;
