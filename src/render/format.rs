//! Measurement text formatting (DIMRND, DIMDEC, DIMZIN, DIMDSEP, DIMPOST)

use crate::error::{DxfError, Result};
use nom::bytes::complete::{tag, take_until};
use nom::sequence::terminated;
use nom::IResult;

/// Placeholder for the measurement in text overrides and DIMPOST
pub const MEASUREMENT_PLACEHOLDER: &str = "<>";

/// DIMZIN bit: suppress leading zeros
const ZIN_LEADING: i16 = 4;
/// DIMZIN bit: suppress trailing zeros
const ZIN_TRAILING: i16 = 8;

/// Number format variables of a dimension style
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    /// Rounding increment, `None` or a value <= 0 disables rounding
    pub rounding: Option<f64>,
    /// Decimal places, `None` formats 6 places and strips trailing zeros
    ///
    /// Negative values count as `None`.
    pub decimal_places: Option<i16>,
    pub suppress_zeros: i16,
    pub decimal_separator: char,
    /// Template with a `<>` placeholder, empty for none
    pub template: String,
}

impl Default for TextFormat {
    fn default() -> Self {
        TextFormat {
            rounding: None,
            decimal_places: None,
            suppress_zeros: 0,
            decimal_separator: '.',
            template: String::new(),
        }
    }
}

impl TextFormat {
    /// Format a measurement
    ///
    /// Fails with [`DxfError::InvalidValue`] if the template has no
    /// placeholder.
    pub fn format(&self, value: f64) -> Result<String> {
        let value = match self.rounding {
            Some(increment) => round_to(value, increment),
            None => value,
        };
        let mut zin = self.suppress_zeros;
        let text = match self.decimal_places.filter(|places| *places >= 0) {
            Some(places) => format!("{:.*}", places as usize, value),
            None => {
                zin |= ZIN_TRAILING;
                format!("{:.6}", value)
            }
        };
        let mut text = suppress_zeros(&text, zin & ZIN_LEADING != 0, zin & ZIN_TRAILING != 0);
        if self.decimal_separator != '.' {
            text = text.replace('.', &self.decimal_separator.to_string());
        }
        if self.template.is_empty() {
            return Ok(text);
        }
        apply_template(&self.template, &text)
    }
}

/// Round `value` to a multiple of `increment`
///
/// An increment <= 0 leaves the value unchanged.
pub fn round_to(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// Strip leading and/or trailing zeros of a formatted decimal number
///
/// A number equal to zero becomes `"0"`, the sign is kept, a dangling
/// decimal separator is removed.
pub fn suppress_zeros(text: &str, leading: bool, trailing: bool) -> String {
    if !leading && !trailing {
        return text.to_string();
    }
    if text.parse::<f64>().map(|v| v == 0.0).unwrap_or(false) {
        return "0".to_string();
    }
    let (sign, mut digits) = match text.strip_prefix(['-', '+']) {
        Some(rest) => (&text[..1], rest),
        None => ("", text),
    };
    if leading {
        digits = digits.trim_start_matches('0');
    }
    if trailing && digits.contains('.') {
        digits = digits.trim_end_matches('0');
    }
    let digits = digits.strip_suffix(['.', ',']).unwrap_or(digits);
    format!("{}{}", sign, digits)
}

/// Replace the first `<>` of `template` by `text`
pub fn apply_template(template: &str, text: &str) -> Result<String> {
    match split_template(template) {
        Ok((suffix, prefix)) => Ok(format!("{}{}{}", prefix, text, suffix)),
        Err(_) => Err(DxfError::InvalidValue(format!(
            "dimpost template \"{}\" has no {} placeholder",
            template, MEASUREMENT_PLACEHOLDER
        ))),
    }
}

/// Prefix up to the placeholder, the remainder is the suffix
fn split_template(input: &str) -> IResult<&str, &str> {
    terminated(take_until(MEASUREMENT_PLACEHOLDER), tag(MEASUREMENT_PLACEHOLDER))(input)
}
