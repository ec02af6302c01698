use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{CreateQuizRequest, GenerateQuizRequest},
};

#[post("/api/generateQuiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();

    let quiz = state
        .quiz_generator
        .generate(&request.transcript)
        .await
        .map_err(|e| {
            log::warn!("[{}] generateQuiz failed ({}): {}", request_id, e.error_code(), e);
            e
        })?;

    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/createQuiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] Creating quiz page {}",
        request_id,
        request.quiz_filename
    );

    let response = state
        .quiz_page_service
        .create_quiz_page(request.into_inner())
        .await
        .map_err(|e| {
            log::warn!("[{}] createQuiz failed ({}): {}", request_id, e.error_code(), e);
            e
        })?;

    Ok(HttpResponse::Ok().json(response))
}
