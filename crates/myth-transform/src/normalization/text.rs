//! Flag, list and blank-string handling for raw text fields.

/// Normalizes a raw flag column. Only the exact literal `TRUE` is true;
/// every other value, blank and absent included, is false.
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("TRUE"))
}

/// Splits a comma-delimited field into an ordered list.
///
/// Segments are kept verbatim (no trimming, no dedup). Trailing empty
/// segments are dropped, interior ones kept. Blank or absent input yields
/// `None`, never an empty list.
pub fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    match raw {
        None | Some("") => None,
        Some(value) => {
            let mut items: Vec<String> = value.split(',').map(str::to_string).collect();
            while items.last().is_some_and(String::is_empty) {
                items.pop();
            }
            Some(items)
        }
    }
}

/// Copies a text field verbatim, treating blank as absent.
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    match raw {
        None | Some("") => None,
        Some(value) => Some(value.to_string()),
    }
}
