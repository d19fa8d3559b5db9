use serde_json::json;

/// Returns the JSON schema for nutrition analysis LLM responses.
///
/// Field descriptions steer the model; the collaborator enforces the shape.
pub fn get_nutrition_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "food_name": {
                "type": "string",
                "description": "Short name of the main dish"
            },
            "calories": {
                "type": "number",
                "description": "Estimated total calories (numbers only)"
            },
            "macros": {
                "type": "object",
                "properties": {
                    "protein": { "type": "number", "description": "Protein in grams" },
                    "carbs": { "type": "number", "description": "Carbohydrates in grams" },
                    "fat": { "type": "number", "description": "Fat in grams" }
                },
                "required": ["protein", "carbs", "fat"]
            },
            "confidence": {
                "type": "string",
                "enum": ["high", "medium", "low"]
            },
            "explanation": {
                "type": "string",
                "description": "Short nutritional analysis sentence (max 20 words)"
            }
        },
        "required": ["food_name", "calories", "macros", "confidence", "explanation"]
    })
}
