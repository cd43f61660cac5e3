//! Display formatting for calculator results

/// Fractional digits rendered before trimming
pub const FRACTION_DIGITS: usize = 10;

/// Formats a finite result for the display.
///
/// Renders fixed-point with ten fractional digits (never scientific
/// notation, never locale separators), then strips trailing zeros and a
/// dangling decimal point.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rendered = format!("{:.*}", FRACTION_DIGITS, value);
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Parses a display numeral.
///
/// Entry text is always a well-formed literal (`"0."`, `"-12.5"`), so this
/// only returns `None` for text that never came from digit entry. A literal
/// too long for `f64` parses to an infinity, which callers treat as an error.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
