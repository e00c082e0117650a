//! Number formatting and parsing shared by the netlist, CSV and CLI layers.

use crate::error::{NodalError, Result};

/// Format a float with `precision` significant digits, like C's `%.{precision}g`.
///
/// Uses fixed notation when the decimal exponent is in `-4..precision`
/// and scientific notation (`1.5e-07`) otherwise. Trailing zeros and a
/// trailing decimal point are removed.
pub fn format_g(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return (if value < 0.0 { "-inf" } else { "inf" }).to_string();
    }
    if value == 0.0 {
        return (if value.is_sign_negative() { "-0" } else { "0" }).to_string();
    }

    // Round to the requested digits first; the exponent can shift (9.99 -> 1.0e1)
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci.clone();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci.clone();
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// SI multipliers accepted after a number.
const SI_SUFFIXES: [(char, f64); 9] = [
    ('p', 1e-12),
    ('n', 1e-9),
    ('u', 1e-6),
    ('µ', 1e-6),
    ('m', 1e-3),
    ('k', 1e3),
    ('K', 1e3),
    ('M', 1e6),
    ('G', 1e9),
];

/// Parse a component value with an optional SI suffix ("10k", "100n", "4.7u").
///
/// Plain and scientific notation are accepted as well ("2.2", "1e-05").
pub fn parse_value(text: &str) -> Result<f64> {
    let text = text.trim();
    let (number, multiplier) = match text.chars().last() {
        Some(last) => SI_SUFFIXES
            .iter()
            .find(|(suffix, _)| *suffix == last)
            .map_or((text, 1.0), |&(_, mult)| {
                (&text[..text.len() - last.len_utf8()], mult)
            }),
        None => return Err(NodalError::invalid_input("expected a value")),
    };

    if number.is_empty() {
        return Err(NodalError::invalid_input(format!(
            "suffix '{text}' needs a number in front of it"
        )));
    }
    number
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|_| NodalError::invalid_input(format!("'{text}' is not a number")))
}
