//! Form Validation
//!
//! Client-side checks for the server page's edit forms.

use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;

static RATIO_RE: OnceLock<Regex> = OnceLock::new();
static AGGR_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn ratio_re() -> &'static Regex {
    RATIO_RE.get_or_init(|| Regex::new(r"^[0-9.]+$").expect("valid regex"))
}

fn aggr_name_re() -> &'static Regex {
    AGGR_NAME_RE.get_or_init(|| Regex::new(r"^[a-zA-Z]+[0-9]+$").expect("valid regex"))
}

// ========================
// Reservation ratio
// ========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioError {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio should be a number between 0 and 1")
    }
}

impl std::error::Error for RatioError {}

/// Shown under the ratio input until a validation error replaces it
pub const RATIO_EDIT_HINT: &str = "Press ENTER to Save / Press ESC to Cancel";

/// Accepts digits and dots only, parsed into `[0, 1]`
pub fn parse_reservation_ratio(input: &str) -> Result<f64, RatioError> {
    if !ratio_re().is_match(input) {
        return Err(RatioError::NotANumber);
    }
    let value: f64 = input.parse().map_err(|_| RatioError::NotANumber)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RatioError::OutOfRange)
    }
}

// ========================
// Link aggregations
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum LinkAggrError {
    InvalidName,
    TooFewInterfaces,
}

impl fmt::Display for LinkAggrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkAggrError::InvalidName => {
                write!(f, "Name must be letters followed by a number, e.g. aggr0")
            }
            LinkAggrError::TooFewInterfaces => {
                write!(f, "Select at least two interfaces to aggregate")
            }
        }
    }
}

impl std::error::Error for LinkAggrError {}

pub fn validate_link_aggr(name: &str, macs: &[String]) -> Result<(), LinkAggrError> {
    if !aggr_name_re().is_match(name.trim()) {
        return Err(LinkAggrError::InvalidName);
    }
    if macs.len() < 2 {
        return Err(LinkAggrError::TooFewInterfaces);
    }
    Ok(())
}

// ========================
// Traits
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum TraitsError {
    Syntax(String),
    NotAnObject,
}

impl fmt::Display for TraitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitsError::Syntax(msg) => write!(f, "Invalid JSON: {}", msg),
            TraitsError::NotAnObject => write!(f, "Traits must be a JSON object"),
        }
    }
}

impl std::error::Error for TraitsError {}

/// Parse the traits editor's text; blank input clears all traits
pub fn parse_traits(input: &str) -> Result<Map<String, Value>, TraitsError> {
    if input.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(TraitsError::NotAnObject),
        Err(e) => Err(TraitsError::Syntax(e.to_string())),
    }
}

// ========================
// NIC tags
// ========================

/// Comma separated tag list, blanks and duplicates removed
pub fn parse_nic_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_hint_names_both_keys() {
        assert_eq!(RATIO_EDIT_HINT, "Press ENTER to Save / Press ESC to Cancel");
        assert_ne!(RATIO_EDIT_HINT, RatioError::OutOfRange.to_string());
    }

    #[test]
    fn test_ratio_accepts_range() {
        assert_eq!(parse_reservation_ratio("0"), Ok(0.0));
        assert_eq!(parse_reservation_ratio("0.15"), Ok(0.15));
        assert_eq!(parse_reservation_ratio("1"), Ok(1.0));
        assert_eq!(parse_reservation_ratio("1.0"), Ok(1.0));
        assert_eq!(parse_reservation_ratio(".5"), Ok(0.5));
    }

    #[test]
    fn test_ratio_rejects_invalid() {
        assert_eq!(parse_reservation_ratio(""), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio("-0.1"), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio("abc"), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio(" 0.5"), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio("0.1.2"), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio("."), Err(RatioError::NotANumber));
        assert_eq!(parse_reservation_ratio("1.01"), Err(RatioError::OutOfRange));
        assert_eq!(parse_reservation_ratio("15"), Err(RatioError::OutOfRange));
    }

    #[test]
    fn test_link_aggr_validation() {
        let two = vec!["00:00:00:00:00:01".to_string(), "00:00:00:00:00:02".to_string()];
        assert_eq!(validate_link_aggr("aggr0", &two), Ok(()));
        assert_eq!(validate_link_aggr("aggr", &two), Err(LinkAggrError::InvalidName));
        assert_eq!(validate_link_aggr("0aggr", &two), Err(LinkAggrError::InvalidName));
        assert_eq!(validate_link_aggr("aggr1", &two[..1]), Err(LinkAggrError::TooFewInterfaces));
    }

    #[test]
    fn test_parse_traits() {
        let map = parse_traits(r#"{"ssd": true, "customer": "acme"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert!(parse_traits("  ").unwrap().is_empty());
        assert_eq!(parse_traits("[1, 2]"), Err(TraitsError::NotAnObject));
        assert!(matches!(parse_traits("{oops"), Err(TraitsError::Syntax(_))));
    }

    #[test]
    fn test_parse_nic_tags() {
        assert_eq!(parse_nic_tags("admin, external,,admin , "), vec!["admin", "external"]);
        assert!(parse_nic_tags("").is_empty());
    }
}
