use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateMcqRequestDto, response::McqResponseDto},
};

#[post("/api/mcq/generate")]
async fn generate_mcqs(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequestDto>,
) -> Result<HttpResponse, AppError> {
    let generation_request = request.into_inner().into_generation_request()?;
    let result = state
        .generation_service
        .generate(generation_request)
        .await?;
    Ok(HttpResponse::Ok().json(McqResponseDto::from(result)))
}
