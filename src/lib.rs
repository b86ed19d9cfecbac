pub mod config;
pub mod environment;
pub mod generator;
pub mod llm;
pub mod logging;
pub mod page;
pub mod prompts;
pub mod render;

pub const TARGET_LLM_REQUEST: &str = "llm_request";
pub const TARGET_PAGE_WRITE: &str = "page_write";

/// Connection details for one Gemini generateContent call.
#[derive(Clone)]
pub struct LLMParams {
    pub api_key: String,
    pub model: String,
}
