//! Closed-vocabulary resolution for categorical fields.

use myth_model::vocabulary::Vocabulary;

/// Resolves a raw categorical value against a closed vocabulary.
///
/// Blank input and unrecognized values both degrade to `None`.
/// Unrecognized non-blank values are logged at debug level so dropped data
/// stays visible in traces.
pub fn resolve<T: Copy>(vocabulary: &Vocabulary<T>, raw: Option<&str>, field: &str) -> Option<T> {
    let value = raw.unwrap_or("");
    if value.is_empty() {
        return None;
    }
    let resolved = vocabulary.resolve(value);
    if resolved.is_none() {
        tracing::debug!(field, value, "unrecognized vocabulary value");
    }
    resolved
}
