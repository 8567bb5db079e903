use thiserror::Error;

mod domain_types;
mod turns;

pub use domain_types::*;
pub use turns::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid file path: {path} - {reason}")]
    InvalidFilePath { path: String, reason: String },

    #[error("Invalid template name: {name} - {reason}")]
    InvalidTemplateName { name: String, reason: String },
}
