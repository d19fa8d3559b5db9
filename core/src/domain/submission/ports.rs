use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::entities::NutritionAnalysis,
    image::EncodedImage,
};

/// Client side of `POST /api/analyze-food`.
pub trait AnalysisClient: Send + Sync {
    /// One request, no retry. Any non-success answer is `CoreError::AnalysisFailed`.
    fn analyze(
        &self,
        image: EncodedImage,
    ) -> impl Future<Output = Result<NutritionAnalysis, CoreError>> + Send;
}
