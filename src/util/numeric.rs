//! Numeric coercion, distance math, and formatting for form text values.

#[cfg(test)]
#[path = "numeric_test.rs"]
mod numeric_test;

/// Interpret control text as a number the way the form always has: empty or
/// whitespace-only text is zero, anything unparseable is NaN. NaN propagates
/// silently into derived values instead of raising a reported error.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Euclidean distance between two 3D points.
pub fn euclidean_distance(start: [f64; 3], dest: [f64; 3]) -> f64 {
    let dx = start[0] - dest[0];
    let dy = start[1] - dest[1];
    let dz = start[2] - dest[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Render a computed value back into control text. `f64`'s shortest display
/// form already drops a trailing `.0`, so whole distances render as `5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
