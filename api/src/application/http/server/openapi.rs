use crate::application::http::food_analysis::router::FoodAnalysisApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SnapMacro API",
        description = "Relay between the meal capture page and a vision-language model"
    ),
    paths(crate::application::http::health::health),
    nest(
        (path = "/api", api = FoodAnalysisApiDoc),
    )
)]
pub struct ApiDoc;
