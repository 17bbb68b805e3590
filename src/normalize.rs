//! Turns raw model reply text into a [`GenerationResult`].
//!
//! Parsing never fails. Text that cannot be read as a JSON object is treated
//! as `{}`, and missing or non-array fields become empty lists. Extraction
//! tries, in order:
//! 1. The whole reply as JSON
//! 2. JSON inside a markdown code block
//! 3. The span from the first `{` to the last `}`

use crate::types::{canonical_hashtag, GenerationResult};
use serde_json::{Map, Value};

/// Normalize a raw reply. Idempotent and infallible.
pub fn normalize(raw: &str) -> GenerationResult {
    let value = parse_object(raw).unwrap_or_else(|| Value::Object(Map::new()));

    GenerationResult {
        captions: string_list(&value, "captions").map(str::to_string).collect(),
        hashtags: string_list(&value, "hashtags")
            .map(canonical_hashtag)
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

fn parse_object(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    if let Some(val) = as_object(trimmed) {
        return Some(val);
    }

    if let Some(block) = extract_json_block(trimmed) {
        if let Some(val) = as_object(&block) {
            return Some(val);
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    as_object(&trimmed[start..=end])
}

fn as_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

/// Extract JSON from ```json ... ``` code blocks.
fn extract_json_block(text: &str) -> Option<String> {
    let markers = ["```json", "```JSON", "```"];
    for marker in markers {
        if let Some(start) = text.find(marker) {
            let content_start = start + marker.len();
            if let Some(end) = text[content_start..].find("```") {
                return Some(text[content_start..content_start + end].trim().to_string());
            }
        }
    }
    None
}

/// String entries of an array field. Absent, non-array, and non-string
/// entries yield nothing.
fn string_list<'a>(value: &'a Value, field: &str) -> impl Iterator<Item = &'a str> {
    value
        .get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}
