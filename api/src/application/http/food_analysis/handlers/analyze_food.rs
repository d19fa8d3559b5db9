use axum::extract::State;
use snapmacro_core::domain::food_analysis::{
    entities::NutritionAnalysis, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-food",
    tag = "food-analysis",
    summary = "Estimate calories and macros of a meal photo",
    description = "Forwards a base64 image to the vision model and returns its structured estimate unchanged",
    request_body = AnalyzeFoodRequest,
    responses(
        (status = 200, body = NutritionAnalysis),
        (status = 400, description = "Image missing or body not JSON", body = String, content_type = "text/plain"),
        (status = 413, description = "Body exceeds the size limit", body = String, content_type = "text/plain"),
        (status = 500, description = "Analysis failed", body = String, content_type = "text/plain"),
    ),
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeFoodRequest>,
) -> Result<Response<NutritionAnalysis>, ApiError> {
    let analysis = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image: payload.image,
        })
        .await
        .map_err(|e| {
            tracing::error!("Error analyzing food: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(analysis))
}
