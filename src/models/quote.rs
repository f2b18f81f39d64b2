use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::room::SpaService;
use super::stay::{Discount, NightsBreakdown, PriceQuote, Promotion, RateSheet, ServiceDiscount};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoteRequest {
    pub check_in: String,
    pub check_out: String,
    pub base_price: f64,
    pub weekend_price: f64,
    pub discount: Option<Discount>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoomQuoteParams {
    pub check_in: String,
    pub check_out: String,
}

/// Amounts rendered in the configured currency locale.
#[derive(Debug, Serialize, Clone)]
pub struct QuoteDisplay {
    pub weekday_total: String,
    pub weekend_total: String,
    pub subtotal: String,
    pub tax_amount_1: String,
    pub tax_amount_2: String,
    pub discount_amount: String,
    pub total: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct QuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rates: RateSheet,
    pub nights: NightsBreakdown,
    /// Each field rounded to cents on its own from the unrounded quote, so
    /// the rounded parts may not add up to the rounded `total`.
    pub quote: PriceQuote,
    pub display: QuoteDisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    pub promotions: Vec<Promotion>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BundleRequest {
    pub services: Vec<SpaService>,
    pub discount_rate: Option<f64>,
}

#[derive(Debug, Serialize, Clone)]
pub struct BundleDisplay {
    pub original_total: String,
    pub discounted_total: String,
    pub savings: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct BundleResponse {
    pub services: Vec<SpaService>,
    pub discount_rate: f64,
    pub discount: ServiceDiscount,
    pub display: BundleDisplay,
    pub promotions: Vec<Promotion>,
}
