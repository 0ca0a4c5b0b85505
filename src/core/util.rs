//! Common utilities

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("literal digit regex"));

/// Extract the first run of digits from a string as a task number.
///
/// Returns `None` when the string contains no digits or the run does not
/// fit a `u32`.
pub fn first_number(s: &str) -> Option<u32> {
    FIRST_NUMBER.find(s).and_then(|m| m.as_str().parse().ok())
}
