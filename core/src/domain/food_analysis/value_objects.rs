/// Input of a relay analysis, straight from the request body.
#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub image: String,
}

/// Instruction pair handed to the structured-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferencePrompt {
    pub system_instruction: String,
    pub user_text: String,
}
