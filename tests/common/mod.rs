use actix_web::{web, App};

use hotel_pricing_api::models::room::Room;
use hotel_pricing_api::models::stay::RateSheet;
use hotel_pricing_api::routes;
use hotel_pricing_api::services::currency::CurrencyLocale;
use hotel_pricing_api::services::room_catalog::RoomCatalog;
use hotel_pricing_api::state::AppState;

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new(locale: CurrencyLocale) -> Self {
        Self::with_catalog(RoomCatalog::from_rooms(test_rooms()), locale)
    }

    pub fn with_catalog(catalog: RoomCatalog, locale: CurrencyLocale) -> Self {
        Self {
            state: web::Data::new(AppState::new(catalog, locale)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::config)
    }
}

pub fn test_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "deluxe-king".to_string(),
            name: "Deluxe King".to_string(),
            description: Some("King bed, river view".to_string()),
            capacity: Some(2),
            rates: RateSheet {
                base_price: 189.0,
                weekend_price: 220.0,
            },
        },
        Room {
            id: "spa-suite".to_string(),
            name: "Spa Suite".to_string(),
            description: None,
            capacity: Some(4),
            rates: RateSheet {
                base_price: 1349.5,
                weekend_price: 1299.0,
            },
        },
        Room {
            id: "broken".to_string(),
            name: "Misconfigured".to_string(),
            description: None,
            capacity: None,
            rates: RateSheet {
                base_price: -10.0,
                weekend_price: 100.0,
            },
        },
    ]
}
