use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PricingError;

const NBSP: char = '\u{a0}';

/// Display locales the booking site renders prices in. Both use CAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CurrencyLocale {
    #[default]
    #[serde(rename = "fr-CA")]
    FrCa,
    #[serde(rename = "en-CA")]
    EnCa,
}

impl CurrencyLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyLocale::FrCa => "fr-CA",
            CurrencyLocale::EnCa => "en-CA",
        }
    }

    fn separators(&self) -> (char, char) {
        match self {
            CurrencyLocale::FrCa => (NBSP, ','),
            CurrencyLocale::EnCa => (',', '.'),
        }
    }

    /// Format an amount with two decimals, e.g. `1 234,56 $` or `$1,234.56`.
    pub fn format(&self, amount: f64) -> String {
        let (group_sep, decimal_sep) = self.separators();

        let cents = (amount.abs() * 100.0).round() as u64;
        let negative = amount < 0.0 && cents > 0;
        let units = group_thousands(cents / 100, group_sep);
        let number = format!("{}{}{:02}", units, decimal_sep, cents % 100);
        let sign = if negative { "-" } else { "" };

        match self {
            CurrencyLocale::FrCa => format!("{}{}{}$", sign, number, NBSP),
            CurrencyLocale::EnCa => format!("{}${}", sign, number),
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl FromStr for CurrencyLocale {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "fr-ca" | "fr" => Ok(CurrencyLocale::FrCa),
            "en-ca" | "en" => Ok(CurrencyLocale::EnCa),
            _ => Err(PricingError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for CurrencyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
