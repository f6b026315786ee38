//! Fixed-width, locale-invariant number formatting for monospaced display

/// Right-justifies `value` with `decimals` places in a field of `width` columns.
///
/// Wider values are never truncated.
pub fn fixed(value: f32, width: usize, decimals: usize) -> String {
    format!("{:>width$.decimals$}", value, width = width, decimals = decimals)
}

/// `fixed(value)` followed by one space and `unit` left-justified to `unit_width`.
pub fn with_unit(value: f32, unit: &str, unit_width: usize, value_width: usize, decimals: usize) -> String {
    format!("{} {:<unit_width$}", fixed(value, value_width, decimals), unit, unit_width = unit_width)
}

/// Renders a placeholder glyph in the column a number would occupy.
pub(crate) fn glyph_with_unit(glyph: &str, unit: &str, unit_width: usize, value_width: usize) -> String {
    format!("{:>value_width$} {:<unit_width$}", glyph, unit, value_width = value_width, unit_width = unit_width)
}
