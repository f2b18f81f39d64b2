use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// A validated stay: check-out is always strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, PricingError> {
        if check_out <= check_in {
            return Err(PricingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parse a range from the `YYYY-MM-DD` strings sent by the booking forms.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, PricingError> {
        Self::new(parse_iso_date(check_in)?, parse_iso_date(check_out)?)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Each night of the stay, keyed by the date the night starts on.
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        let check_out = self.check_out;
        self.check_in.iter_days().take_while(move |d| *d < check_out)
    }

    pub fn len_nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days() as u32
    }
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, PricingError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| PricingError::InvalidDate(trimmed.to_string()))
}

/// Nightly rates for a room.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RateSheet {
    pub base_price: f64,
    pub weekend_price: f64,
}

impl RateSheet {
    pub fn new(base_price: f64, weekend_price: f64) -> Result<Self, PricingError> {
        let rates = Self {
            base_price,
            weekend_price,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Rates arriving over the wire are deserialized unchecked; call this before pricing.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_amount("base_price", self.base_price)?;
        check_amount("weekend_price", self.weekend_price)
    }

    /// Lowest nightly rate, shown as "starting from" on room listings.
    pub fn starting_from(&self) -> f64 {
        self.base_price.min(self.weekend_price)
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidRate { field, value })
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct NightsBreakdown {
    pub total_nights: u32,
    pub weekday_nights: u32,
    pub weekend_nights: u32,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
pub struct PriceQuote {
    pub weekday_total: f64,
    pub weekend_total: f64,
    pub subtotal: f64,
    pub tax_amount_1: f64,
    pub tax_amount_2: f64,
    pub discount_amount: f64,
    pub total: f64,
}

/// A caller-chosen percentage taken off the pre-tax subtotal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Discount {
    pub label: String,
    pub rate: f64,
}

impl Discount {
    pub fn new(label: impl Into<String>, rate: f64) -> Result<Self, PricingError> {
        let discount = Self {
            label: label.into(),
            rate,
        };
        discount.validate()?;
        Ok(discount)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if (0.0..=1.0).contains(&self.rate) {
            Ok(())
        } else {
            Err(PricingError::InvalidDiscount(self.rate))
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct ServiceDiscount {
    pub original_total: f64,
    pub discounted_total: f64,
    pub savings: f64,
}

/// Marketing promise shown next to a quote. Never folded into `total`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Promotion {
    pub code: &'static str,
    pub label: &'static str,
    pub rate: f64,
    pub eligible: bool,
}
