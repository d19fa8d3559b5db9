use crate::domain::{common::SnapMacroConfig, food_analysis::ports::LLMClient};

/// Relay-side service. Business operations are implemented per domain in
/// `<domain>/services.rs`.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) config: SnapMacroConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, config: SnapMacroConfig) -> Self {
        Self { llm_client, config }
    }
}
