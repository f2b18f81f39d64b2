use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::quote::{BundleDisplay, BundleRequest, BundleResponse};
use crate::services::pricing_service::{PricingService, SERVICE_DISCOUNT_RATE};
use crate::state::AppState;

/*
    POST /api/services/bundle
*/
pub async fn bundle(
    state: web::Data<AppState>,
    input: web::Json<BundleRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let rate = input.discount_rate.unwrap_or(SERVICE_DISCOUNT_RATE);

    let discount = PricingService::bundle_services(input.services.iter().map(|s| s.price), rate)?;
    let display = BundleDisplay {
        original_total: state.locale.format(discount.original_total),
        discounted_total: state.locale.format(discount.discounted_total),
        savings: state.locale.format(discount.savings),
    };

    Ok(HttpResponse::Ok().json(BundleResponse {
        promotions: PricingService::bundle_promotions(input.services.len()),
        services: input.services,
        discount_rate: rate,
        discount: discount.rounded(),
        display,
    }))
}
