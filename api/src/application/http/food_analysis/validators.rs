use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A missing `image` deserializes as empty so both cases get the same answer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Image not provided"))]
    pub image: String,
}
