use actix_web::web;

pub mod health;
pub mod quote;
pub mod room;
pub mod service_bundle;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/quotes", web::post().to(quote::create_quote))
                .service(
                    web::scope("/rooms")
                        .route("", web::get().to(room::list_rooms))
                        .route("/cache/invalidate", web::post().to(room::invalidate_cache))
                        .route("/{id}/quote", web::get().to(room::quote_room)),
                )
                .route("/services/bundle", web::post().to(service_bundle::bundle)),
        );
}
