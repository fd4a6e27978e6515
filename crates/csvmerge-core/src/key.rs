// Rust guideline compliant 2026-10-19

//! Key normalization for case- and whitespace-insensitive comparison.

/// Normalizes a raw key for equality testing.
///
/// Strips leading and trailing whitespace, then lower-cases. The result is
/// only ever compared; stored keys keep their raw form.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
