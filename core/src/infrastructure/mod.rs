pub mod llm;
pub mod preview;
pub mod relay;
