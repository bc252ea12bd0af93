//! Spec layer: download the OpenAPI document and expose its paths.
//!
//! This module is intentionally separate from probing and reporting.
//! It owns:
//! - SpecDocument (ordered path -> operations mapping)
//! - the loader and its fatal error type

pub mod document;
pub mod load;

pub use document::SpecDocument;
pub use load::{LoadError, load_specification};
