use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use hotel_pricing_api::routes;
use hotel_pricing_api::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let (config, state) = AppState::from_env().map_err(std::io::Error::other)?;
    let state = web::Data::new(state);

    log::info!(
        "Binding to {}:{} (locale {}, backend {})",
        config.host,
        config.port,
        config.locale,
        config
            .backend_api_url
            .as_ref()
            .map_or("none", |url| url.as_str())
    );

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
