use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog = check_room_catalog(&state);
    health
        .services
        .insert("room_catalog".to_string(), catalog.clone());
    health.services.insert(
        "pricing".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Rendering prices in {}", state.locale)),
        },
    );

    // A static catalog still quotes explicit rates, so it only degrades
    if catalog.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_room_catalog(state: &AppState) -> ServiceStatus {
    if state.catalog.is_backed() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Backend configured, {} cached entries",
                state.catalog.cached_entries()
            )),
        }
    } else {
        ServiceStatus {
            status: "static".to_string(),
            details: Some("BACKEND_API_URL not configured".to_string()),
        }
    }
}
