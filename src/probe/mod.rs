//! Endpoint probing: path materialization, request dispatch, classification.

pub mod classify;
pub mod placeholder;
pub mod request;

pub use classify::{Category, Hint, extract_hint};
pub use placeholder::{PlaceholderTable, materialize_path, parse_assignment};
pub use request::{ProbeResult, send_probe};
