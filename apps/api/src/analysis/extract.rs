//! Best-effort structured extractor — locates a JSON payload inside free model text.
//!
//! Policy: the FIRST greedy match wins. For objects that is everything from the first
//! `{` to the last `}` in the text; for arrays, the first `[` to the last `]`. Prose
//! around the block is ignored. Multiple candidate blocks are NOT disambiguated — they
//! are swallowed into one span and usually fail to decode. Do not make this smarter
//! without changing every caller's fallback expectations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

static OBJECT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("object pattern is valid"));
static ARRAY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"));

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON {0} block found in model response")]
    NoMatch(&'static str),

    #[error("JSON block could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Returns the brace-delimited span, newlines included, or `None`.
pub fn extract_object(text: &str) -> Option<&str> {
    OBJECT_BLOCK.find(text).map(|m| m.as_str())
}

/// Returns the bracket-delimited span, newlines included, or `None`.
pub fn extract_array(text: &str) -> Option<&str> {
    ARRAY_BLOCK.find(text).map(|m| m.as_str())
}

pub fn decode_object<T: DeserializeOwned>(text: &str) -> Result<T, ExtractError> {
    let block = extract_object(text).ok_or(ExtractError::NoMatch("object"))?;
    Ok(serde_json::from_str(block)?)
}

pub fn decode_array<T: DeserializeOwned>(text: &str) -> Result<T, ExtractError> {
    let block = extract_array(text).ok_or(ExtractError::NoMatch("array"))?;
    Ok(serde_json::from_str(block)?)
}
