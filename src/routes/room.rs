use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::quote::RoomQuoteParams;
use crate::models::room::RoomListing;
use crate::models::stay::DateRange;
use crate::routes::quote::build_quote_response;
use crate::state::AppState;

/*
    GET /api/rooms
*/
pub async fn list_rooms(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let rooms = state.catalog.list_rooms().await?;

    let listings: Vec<RoomListing> = rooms
        .into_iter()
        .filter(|room| match room.rates.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Skipping room {} with invalid rates: {}", room.id, err);
                false
            }
        })
        .map(|room| {
            let starting_from = room.rates.starting_from();
            RoomListing {
                id: room.id,
                name: room.name,
                starting_from,
                starting_from_display: state.locale.format(starting_from),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(listings))
}

/*
    GET /api/rooms/{id}/quote?check_in=YYYY-MM-DD&check_out=YYYY-MM-DD
*/
pub async fn quote_room(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<RoomQuoteParams>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    let range = DateRange::parse(&params.check_in, &params.check_out)?;
    let room = state.catalog.get_room(&room_id).await?;

    let response = build_quote_response(Some(room.id), range, room.rates, None, state.locale)?;
    Ok(HttpResponse::Ok().json(response))
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct InvalidateInput {
    pub room_id: Option<String>,
}

/*
    POST /api/rooms/cache/invalidate
*/
pub async fn invalidate_cache(
    state: web::Data<AppState>,
    input: Option<web::Json<InvalidateInput>>,
) -> HttpResponse {
    let input = input.map(|json| json.into_inner()).unwrap_or_default();

    match input.room_id {
        Some(id) => {
            log::info!("Invalidating cached rates for room {}", id);
            state.catalog.invalidate(&id);
        }
        None => {
            log::info!("Invalidating all cached room rates");
            state.catalog.invalidate_all();
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "cached_entries": state.catalog.cached_entries(),
    }))
}
