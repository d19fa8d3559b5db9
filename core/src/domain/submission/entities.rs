use thiserror::Error;

use crate::domain::food_analysis::entities::NutritionAnalysis;

/// Generic message shown for any failed analysis.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Oops! I couldn't analyze this image. Please try again.";

/// What the page renders: a spinner, a result card or an error banner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub is_loading: bool,
    pub data: Option<NutritionAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("an analysis is already in flight")]
    AlreadyInFlight,
}
