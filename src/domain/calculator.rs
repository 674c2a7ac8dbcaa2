/// Stateless adder. Holds nothing between calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Plain `f64` addition: no overflow checks, no extra rounding.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}

/// Renders a number the way a console log of a double reads:
/// `15` rather than `15.0`, `Infinity` rather than `inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value != 0.0 && (value.abs() >= 1e21 || value.abs() < 1e-6) {
        exponent_form(value)
    } else {
        // f64 Display already prints integral values without a fraction
        value.to_string()
    }
}

/// `{:e}` gives `1e21` / `1e-7`; the console form signs positive exponents.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
