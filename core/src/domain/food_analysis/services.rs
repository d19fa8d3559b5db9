use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::NutritionAnalysis,
        ports::{FoodAnalysisService, LLMClient},
        schema::get_nutrition_analysis_schema,
        value_objects::{AnalyzeFoodInput, InferencePrompt},
    },
    image::decode,
};

pub const NUTRITIONIST_INSTRUCTION: &str = "You are an experienced nutritionist. Analyze the provided food image precisely. If the image is not food, return zeroed values and explain why in the explanation field.";

pub const MEAL_REQUEST_TEXT: &str = "Analyze this meal and estimate its macros.";

pub fn nutritionist_prompt() -> InferencePrompt {
    InferencePrompt {
        system_instruction: NUTRITIONIST_INSTRUCTION.to_string(),
        user_text: MEAL_REQUEST_TEXT.to_string(),
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn run_analysis(&self, input: AnalyzeFoodInput) -> Result<NutritionAnalysis, CoreError> {
        // 1. Build inline image part
        let image = decode(&input.image).map_err(|e| {
            tracing::error!("Failed to decode image payload: {}", e);
            CoreError::InvalidImage
        })?;

        // 2. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_image(nutritionist_prompt(), image, get_nutrition_analysis_schema())
            .await?;

        // 3. Parse response; shape is enforced upstream by the schema
        serde_json::from_str::<NutritionAnalysis>(&raw_response).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

impl<LLM> FoodAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(image_len = input.image.len()))]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<NutritionAnalysis, CoreError> {
        // Validate input before anything leaves the process
        if input.image.is_empty() {
            return Err(CoreError::MissingImage);
        }

        let ceiling = self.config.analysis.timeout;
        tokio::time::timeout(ceiling, self.run_analysis(input))
            .await
            .map_err(|_| {
                tracing::error!("Analysis exceeded {}s ceiling", ceiling.as_secs());
                CoreError::Timeout
            })?
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::{AnalysisConfig, LLMConfig, SnapMacroConfig},
        food_analysis::entities::{Confidence, MacroNutrients},
        image::{DecodedImage, encode_bytes},
    };

    #[derive(Clone)]
    struct StubLLM {
        reply: Result<String, CoreError>,
        delay: Duration,
        calls: Arc<AtomicUsize>,
    }

    impl StubLLM {
        fn replying(reply: Result<String, CoreError>) -> Self {
            Self {
                reply,
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl LLMClient for StubLLM {
        async fn generate_with_image(
            &self,
            prompt: InferencePrompt,
            image: DecodedImage,
            response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(prompt, nutritionist_prompt());
            assert!(!image.data.is_empty());
            assert_eq!(response_schema, get_nutrition_analysis_schema());
            tokio::time::sleep(self.delay).await;
            self.reply.clone()
        }
    }

    fn config(timeout: Duration) -> SnapMacroConfig {
        SnapMacroConfig {
            llm: LLMConfig {
                gemini_api_key: "test".to_string(),
                gemini_model: "test-model".to_string(),
                gemini_base_url: "http://localhost".to_string(),
            },
            analysis: AnalysisConfig { timeout },
        }
    }

    fn jpeg_input() -> AnalyzeFoodInput {
        AnalyzeFoodInput {
            image: encode_bytes(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10], "image/jpeg").into_inner(),
        }
    }

    fn fixed_result() -> serde_json::Value {
        json!({
            "food_name": "Grilled chicken with rice",
            "calories": 610.0,
            "macros": { "protein": 45.0, "carbs": 62.0, "fat": 14.5 },
            "confidence": "high",
            "explanation": "Lean protein with a generous rice portion."
        })
    }

    #[tokio::test]
    async fn test_empty_image_never_reaches_llm() {
        let llm = StubLLM::replying(Ok(fixed_result().to_string()));
        let calls = llm.calls.clone();
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let result = service
            .analyze_food(AnalyzeFoodInput {
                image: String::new(),
            })
            .await;

        assert_eq!(result, Err(CoreError::MissingImage));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_returns_collaborator_object() {
        let llm = StubLLM::replying(Ok(fixed_result().to_string()));
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let analysis = service.analyze_food(jpeg_input()).await.unwrap();

        assert_eq!(serde_json::to_value(&analysis).unwrap(), fixed_result());
        assert_eq!(analysis.confidence, Confidence::High);
        assert_eq!(
            analysis.macros,
            MacroNutrients {
                protein: 45.0,
                carbs: 62.0,
                fat: 14.5
            }
        );
    }

    #[tokio::test]
    async fn test_collaborator_failure_propagates() {
        let llm = StubLLM::replying(Err(CoreError::ExternalServiceError("boom".to_string())));
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let result = service.analyze_food(jpeg_input()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_malformed_response_is_an_error() {
        let llm = StubLLM::replying(Ok("{\"food_name\": \"half".to_string()));
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let result = service.analyze_food(jpeg_input()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_undecodable_image_is_rejected_before_llm() {
        let llm = StubLLM::replying(Ok(fixed_result().to_string()));
        let calls = llm.calls.clone();
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let result = service
            .analyze_food(AnalyzeFoodInput {
                image: "data:image/jpeg;base64,@@@".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidImage));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_collaborator_hits_ceiling() {
        let mut llm = StubLLM::replying(Ok(fixed_result().to_string()));
        llm.delay = Duration::from_secs(61);
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let result = service.analyze_food(jpeg_input()).await;

        assert_eq!(result, Err(CoreError::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_collaborator_within_ceiling_succeeds() {
        let mut llm = StubLLM::replying(Ok(fixed_result().to_string()));
        llm.delay = Duration::from_secs(59);
        let service = Service::new(llm, config(Duration::from_secs(60)));

        let analysis = service.analyze_food(jpeg_input()).await.unwrap();

        assert_eq!(analysis.food_name, "Grilled chicken with rice");
    }
}
