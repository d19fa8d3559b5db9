use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/analyze-food`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// Base64 payload or `data:` URI of the meal photo.
    pub image: String,
}

/// Nutrition estimate returned by the relay and rendered by the result card.
///
/// The shape is the wire contract: five top-level fields, macros in grams. A photo
/// that is not food comes back zeroed with the reason in `explanation`; there is no
/// separate variant for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionAnalysis {
    pub food_name: String,
    pub calories: f64,
    pub macros: MacroNutrients,
    pub confidence: Confidence,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroNutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

impl MacroNutrients {
    /// Display order used by the result card.
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("Protein", self.protein),
            ("Carbs", self.carbs),
            ("Fat", self.fat),
        ]
    }
}

impl NutritionAnalysis {
    /// True for the all-zero payload the model returns when the photo is not food.
    ///
    /// This overloads zeroed numbers as a signal; it exists for display only and
    /// must not grow into a result kind of its own.
    pub fn looks_like_non_food(&self) -> bool {
        self.calories == 0.0
            && self.macros.protein == 0.0
            && self.macros.carbs == 0.0
            && self.macros.fat == 0.0
    }
}
