use actix_web::{web, HttpResponse};

use crate::error::{ApiError, PricingError};
use crate::models::quote::{QuoteDisplay, QuoteRequest, QuoteResponse};
use crate::models::stay::{DateRange, Discount, PriceQuote, RateSheet};
use crate::services::currency::CurrencyLocale;
use crate::services::pricing_service::PricingService;
use crate::state::AppState;

/*
    POST /api/quotes
*/
pub async fn create_quote(
    state: web::Data<AppState>,
    input: web::Json<QuoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let range = DateRange::parse(&input.check_in, &input.check_out)?;
    let rates = RateSheet::new(input.base_price, input.weekend_price)?;

    let response = build_quote_response(None, range, rates, input.discount, state.locale)?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn build_quote_response(
    room_id: Option<String>,
    range: DateRange,
    rates: RateSheet,
    discount: Option<Discount>,
    locale: CurrencyLocale,
) -> Result<QuoteResponse, PricingError> {
    let (nights, quote) = PricingService::quote_stay(&range, &rates, discount.as_ref())?;

    Ok(QuoteResponse {
        room_id,
        check_in: range.check_in(),
        check_out: range.check_out(),
        rates,
        nights,
        quote: quote.rounded(),
        display: display_quote(&quote, locale),
        discount,
        promotions: PricingService::stay_promotions(&nights),
    })
}

fn display_quote(quote: &PriceQuote, locale: CurrencyLocale) -> QuoteDisplay {
    QuoteDisplay {
        weekday_total: locale.format(quote.weekday_total),
        weekend_total: locale.format(quote.weekend_total),
        subtotal: locale.format(quote.subtotal),
        tax_amount_1: locale.format(quote.tax_amount_1),
        tax_amount_2: locale.format(quote.tax_amount_2),
        discount_amount: locale.format(quote.discount_amount),
        total: locale.format(quote.total),
    }
}
