//! The request payload sent to the generation service.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A numeric field as the user entered it.
///
/// Text that parses as a number is carried as a number; anything else
/// (blank, `"three"`, `"1e999"`) is carried verbatim so the service decides
/// what to make of it. Nothing is rejected on this side of the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entered<T> {
    /// The text parsed as a number
    Value(T),
    /// The text did not parse and is sent as-is
    Raw(String),
}

impl<T> Entered<T> {
    /// The parsed value, if the text was numeric.
    pub fn value(&self) -> Option<&T> {
        match self {
            Entered::Value(v) => Some(v),
            Entered::Raw(_) => None,
        }
    }
}

impl Entered<i64> {
    /// Parse an integer field such as duration or group size.
    pub fn parse(raw: &str) -> Self {
        match i64::from_str(raw.trim()) {
            Ok(v) => Entered::Value(v),
            Err(_) => Entered::Raw(raw.to_string()),
        }
    }
}

impl Entered<f64> {
    /// Parse a decimal field such as the budget amount.
    ///
    /// Non-finite values have no JSON representation and stay raw.
    pub fn parse(raw: &str) -> Self {
        match f64::from_str(raw.trim()) {
            Ok(v) if v.is_finite() => Entered::Value(v),
            _ => Entered::Raw(raw.to_string()),
        }
    }
}

/// Split a comma-delimited field into its tokens.
///
/// Tokens are kept in order and untrimmed. An empty input yields an empty
/// list, never a list holding one empty token.
///
/// ```rust
/// use trailhead_core::split_list;
///
/// assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Normalized trip constraints, built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: String,
    /// Trip length in days
    pub duration: Entered<i64>,
    pub group_size: Entered<i64>,
    pub budget_amount: Entered<f64>,
    /// Three-letter currency code, not checked against ISO 4217
    pub budget_currency: String,
    pub interests: Vec<String>,
    pub must_see: String,
    pub custom_request: String,
    /// ISO 8601 calendar date, or empty
    pub from_date: String,
    pub activities: Vec<String>,
}
