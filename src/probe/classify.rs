//! Status classification and error-body hint extraction.

use serde_json::Value;

/// Number of characters of an unparsable error body shown in the report.
pub const RAW_PREVIEW_CHARS: usize = 50;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    NotFound,
    ParamError,
    Failed,
}

impl Category {
    /// 0 is the transport-failure sentinel and lands in `Failed`.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Category::Success,
            404 => Category::NotFound,
            400 | 422 => Category::ParamError,
            _ => Category::Failed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Success => "SUCCESS",
            Category::NotFound => "NOT FOUND",
            Category::ParamError => "PARAM ERROR",
            Category::Failed => "FAILED",
        }
    }
}

/// What could be recovered from a 400/422 response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Message taken from a structured error document.
    Message(String),
    /// Leading characters of a body that was not a JSON object.
    Raw(String),
}

/// Pull a readable message out of an error body.
///
/// Looks at `detail`, then `message`, skipping empty values, and falls back to
/// "Unknown error" when neither holds anything.
pub fn extract_hint(body: &str) -> Hint {
    let doc = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(doc)) => doc,
        _ => return Hint::Raw(body.chars().take(RAW_PREVIEW_CHARS).collect()),
    };

    let message = ["detail", "message"]
        .iter()
        .filter_map(|key| doc.get(*key))
        .find(|value| is_truthy(value))
        .map(render_message)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    Hint::Message(message)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Strings as-is, lists as `[a, b]` with JSON elements, anything else as JSON.
fn render_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(Value::to_string).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}
