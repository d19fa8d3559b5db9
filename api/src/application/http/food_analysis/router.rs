use super::handlers::analyze_food::{__path_analyze_food, analyze_food};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_food))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/analyze-food", root_path),
        post(analyze_food),
    )
}
