use chrono::{Datelike, NaiveDate};

use crate::error::PricingError;
use crate::models::stay::{
    DateRange, Discount, NightsBreakdown, PriceQuote, Promotion, RateSheet, ServiceDiscount,
};

/// Federal sales tax (TPS/GST analogue).
pub const TAX_RATE_1: f64 = 0.05;
/// Provincial sales tax (TVQ/QST analogue).
pub const TAX_RATE_2: f64 = 0.09975;
/// Default discount on bundled spa services.
pub const SERVICE_DISCOUNT_RATE: f64 = 0.10;

pub const MULTI_NIGHT_PROMO_MIN_NIGHTS: u32 = 3;
pub const MULTI_NIGHT_PROMO_RATE: f64 = 0.20;
pub const SERVICE_BUNDLE_PROMO_MIN_SERVICES: usize = 2;
pub const SERVICE_BUNDLE_PROMO_RATE: f64 = 0.15;

pub struct PricingService;

impl PricingService {
    /// Friday, Saturday and Sunday nights are billed at the weekend rate.
    pub fn is_weekend_night(date: NaiveDate) -> bool {
        // 0 = Sunday
        matches!(date.weekday().num_days_from_sunday(), 5 | 6 | 0)
    }

    /// Classify each night from check-in (inclusive) to check-out (exclusive).
    pub fn count_nights(range: &DateRange) -> NightsBreakdown {
        range
            .nights()
            .fold(NightsBreakdown::default(), |mut acc, night| {
                acc.total_nights += 1;
                if Self::is_weekend_night(night) {
                    acc.weekend_nights += 1;
                } else {
                    acc.weekday_nights += 1;
                }
                acc
            })
    }

    /// Price the nights and add both taxes, each computed from the subtotal.
    /// An optional discount is taken as a share of the pre-tax subtotal and
    /// subtracted from the taxed total. No rounding happens here.
    pub fn compose_quote(
        nights: &NightsBreakdown,
        rates: &RateSheet,
        discount: Option<&Discount>,
    ) -> PriceQuote {
        let weekday_total = nights.weekday_nights as f64 * rates.base_price;
        let weekend_total = nights.weekend_nights as f64 * rates.weekend_price;
        let subtotal = weekday_total + weekend_total;

        let tax_amount_1 = subtotal * TAX_RATE_1;
        let tax_amount_2 = subtotal * TAX_RATE_2;
        let discount_amount = discount.map_or(0.0, |d| subtotal * d.rate);

        PriceQuote {
            weekday_total,
            weekend_total,
            subtotal,
            tax_amount_1,
            tax_amount_2,
            discount_amount,
            total: subtotal + tax_amount_1 + tax_amount_2 - discount_amount,
        }
    }

    /// Validate inputs, then count and price a stay in one call.
    pub fn quote_stay(
        range: &DateRange,
        rates: &RateSheet,
        discount: Option<&Discount>,
    ) -> Result<(NightsBreakdown, PriceQuote), PricingError> {
        rates.validate()?;
        if let Some(discount) = discount {
            discount.validate()?;
        }

        let nights = Self::count_nights(range);
        let quote = Self::compose_quote(&nights, rates, discount);
        log::debug!(
            "Quoted {} nights ({} weekend) from {}: total {:.4}",
            nights.total_nights,
            nights.weekend_nights,
            range.check_in(),
            quote.total
        );
        Ok((nights, quote))
    }

    pub fn apply_service_discount(original_total: f64, rate: f64) -> ServiceDiscount {
        let savings = original_total * rate;
        ServiceDiscount {
            original_total,
            discounted_total: original_total - savings,
            savings,
        }
    }

    /// Sum a bundle of add-on services and take the service discount off it.
    pub fn bundle_services<I>(prices: I, rate: f64) -> Result<ServiceDiscount, PricingError>
    where
        I: IntoIterator<Item = f64>,
    {
        if !(0.0..=1.0).contains(&rate) {
            return Err(PricingError::InvalidDiscount(rate));
        }

        let mut total = 0.0;
        for price in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(PricingError::InvalidRate {
                    field: "price",
                    value: price,
                });
            }
            total += price;
        }
        Ok(Self::apply_service_discount(total, rate))
    }

    /// Banners advertised next to a stay quote.
    pub fn stay_promotions(nights: &NightsBreakdown) -> Vec<Promotion> {
        vec![Promotion {
            code: "MULTI_NIGHT",
            label: "-20% for 3+ nights",
            rate: MULTI_NIGHT_PROMO_RATE,
            eligible: nights.total_nights >= MULTI_NIGHT_PROMO_MIN_NIGHTS,
        }]
    }

    /// Banners advertised next to a spa bundle.
    pub fn bundle_promotions(service_count: usize) -> Vec<Promotion> {
        vec![Promotion {
            code: "SERVICE_BUNDLE",
            label: "Save 15% bundling services",
            rate: SERVICE_BUNDLE_PROMO_RATE,
            eligible: service_count >= SERVICE_BUNDLE_PROMO_MIN_SERVICES,
        }]
    }
}

/// Round to cents, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl PriceQuote {
    pub fn rounded(&self) -> PriceQuote {
        PriceQuote {
            weekday_total: round_cents(self.weekday_total),
            weekend_total: round_cents(self.weekend_total),
            subtotal: round_cents(self.subtotal),
            tax_amount_1: round_cents(self.tax_amount_1),
            tax_amount_2: round_cents(self.tax_amount_2),
            discount_amount: round_cents(self.discount_amount),
            total: round_cents(self.total),
        }
    }
}

impl ServiceDiscount {
    pub fn rounded(&self) -> ServiceDiscount {
        ServiceDiscount {
            original_total: round_cents(self.original_total),
            discounted_total: round_cents(self.discounted_total),
            savings: round_cents(self.savings),
        }
    }
}
