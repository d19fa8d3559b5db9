use reqwest::Client;
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::{AnalysisRequest, NutritionAnalysis},
    image::EncodedImage,
    submission::ports::AnalysisClient,
};

pub const ANALYZE_FOOD_PATH: &str = "api/analyze-food";

/// HTTP client for the relay endpoint. Trusts the relay's schema enforcement:
/// the body is parsed, not range-checked.
#[derive(Debug, Clone)]
pub struct RelayAnalysisClient {
    endpoint: Url,
    client: Client,
}

impl RelayAnalysisClient {
    /// `base_url` is treated as a directory: `https://host/app` and
    /// `https://host/app/` both resolve to `https://host/app/api/analyze-food`.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(ANALYZE_FOOD_PATH)?;

        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnalysisClient for RelayAnalysisClient {
    async fn analyze(&self, image: EncodedImage) -> Result<NutritionAnalysis, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AnalysisRequest {
                image: image.into_inner(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Relay request failed: {}", e);
                CoreError::AnalysisFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("Relay answered {}", response.status());
            return Err(CoreError::AnalysisFailed);
        }

        response.json::<NutritionAnalysis>().await.map_err(|e| {
            tracing::error!("Failed to parse relay response: {}", e);
            CoreError::AnalysisFailed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolution() {
        let client = RelayAnalysisClient::new("http://127.0.0.1:3333").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:3333/api/analyze-food"
        );

        let nested = RelayAnalysisClient::new("https://meals.example.com/app/").unwrap();
        assert_eq!(
            nested.endpoint().as_str(),
            "https://meals.example.com/app/api/analyze-food"
        );
    }

    #[test]
    fn test_base_path_without_trailing_slash_is_kept() {
        let client = RelayAnalysisClient::new("https://meals.example.com/app").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://meals.example.com/app/api/analyze-food"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(RelayAnalysisClient::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_generic_failure() {
        // Port 9 (discard) on loopback is not served in test environments.
        let client = RelayAnalysisClient::new("http://127.0.0.1:9").unwrap();
        let result = client
            .analyze(EncodedImage::from("data:image/jpeg;base64,/9j/".to_string()))
            .await;
        assert_eq!(result, Err(CoreError::AnalysisFailed));
    }
}
