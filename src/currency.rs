//! Formats monetary amounts for display in a currency locale.

use crate::Error;

/// The punctuation and symbol conventions used to display amounts of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLocale {
    symbol: String,
    thousands_separator: char,
    decimal_separator: char,
}

impl CurrencyLocale {
    /// Create a currency locale.
    ///
    /// # Errors
    /// Returns [Error::InvalidCurrencyLocale] if the symbol is empty, if the
    /// two separators are the same character, or if either separator is a
    /// digit or a minus sign.
    pub fn new(
        symbol: &str,
        thousands_separator: char,
        decimal_separator: char,
    ) -> Result<Self, Error> {
        let symbol = symbol.trim();

        if symbol.is_empty() {
            return Err(Error::InvalidCurrencyLocale(
                "the currency symbol cannot be empty".to_owned(),
            ));
        }

        if thousands_separator == decimal_separator {
            return Err(Error::InvalidCurrencyLocale(format!(
                "the thousands and decimal separators must differ, got '{thousands_separator}' for both"
            )));
        }

        for separator in [thousands_separator, decimal_separator] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(Error::InvalidCurrencyLocale(format!(
                    "'{separator}' cannot be used as a separator"
                )));
            }
        }

        Ok(Self {
            symbol: symbol.to_owned(),
            thousands_separator,
            decimal_separator,
        })
    }

    /// Brazilian Real, e.g. "R$ 1.234,50".
    pub fn brazilian_real() -> Self {
        Self {
            symbol: "R$".to_owned(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// The currency symbol placed in front of amounts.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self::brazilian_real()
    }
}

/// Format `amount` as a currency string, e.g. `1234.5` becomes "R$ 1.234,50"
/// in the Brazilian Real locale.
///
/// The amount is rounded to the nearest cent. Negative amounts keep their
/// sign after the symbol ("R$ -50,00"), and amounts that round to zero cents
/// are shown without a sign.
///
/// # Errors
/// Returns [Error::NonFiniteAmount] if `amount` is NaN or infinite.
pub fn format_currency(amount: f64, locale: &CurrencyLocale) -> Result<String, Error> {
    if !amount.is_finite() {
        return Err(Error::NonFiniteAmount(amount));
    }

    let magnitude = amount.abs();
    let mut whole_units = magnitude.trunc();
    let mut cents = ((magnitude - whole_units) * 100.0).round();
    if cents >= 100.0 {
        whole_units += 1.0;
        cents = 0.0;
    }
    let sign = if amount < 0.0 && (whole_units > 0.0 || cents > 0.0) {
        "-"
    } else {
        ""
    };

    Ok(format!(
        "{} {sign}{}{}{:02}",
        locale.symbol,
        group_thousands(whole_units, locale.thousands_separator),
        locale.decimal_separator,
        cents as u8
    ))
}

/// Group the digits of a non-negative whole number into thousands.
fn group_thousands(whole_units: f64, separator: char) -> String {
    // With a precision, f64 is written out in full, never in scientific notation.
    let digits = format!("{whole_units:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
