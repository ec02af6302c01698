use actix_web::{get, HttpResponse};

use crate::models::dto::response::ApiMessage;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/api/test")]
pub async fn api_test() -> HttpResponse {
    HttpResponse::Ok().json(ApiMessage {
        message: "API is working!".to_string(),
    })
}
