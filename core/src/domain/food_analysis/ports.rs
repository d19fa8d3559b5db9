use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::NutritionAnalysis,
        value_objects::{AnalyzeFoodInput, InferencePrompt},
    },
    image::DecodedImage,
};

/// LLM Client trait for calling vision models with a response schema
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw JSON text produced under `response_schema`.
    fn generate_with_image(
        &self,
        prompt: InferencePrompt,
        image: DecodedImage,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the relay analysis
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<NutritionAnalysis, CoreError>> + Send;
}
