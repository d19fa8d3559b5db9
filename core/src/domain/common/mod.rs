use std::time::Duration;

pub mod entities;
pub mod services;

/// Hard ceiling on a single relay analysis, inference included.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct SnapMacroConfig {
    pub llm: LLMConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }
}
