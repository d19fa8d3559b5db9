use crate::{
    domain::common::{SnapMacroConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type SnapMacroService = Service<GeminiLLMClient>;

pub fn create_service(config: SnapMacroConfig) -> SnapMacroService {
    let llm_client = GeminiLLMClient::from(&config.llm);
    tracing::debug!(model = %config.llm.gemini_model, "creating analysis service");

    Service::new(llm_client, config)
}
