use tracing::{error, info};

use crate::environment::env_var_trimmed;

/// Environment variable holding the Gemini API credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Keyword the generated article targets.
pub const TARGET_KEYWORD: &str = "2026年のAI技術トレンドとビジネスへの応用";

/// Search intent the article is written to satisfy.
pub const SEARCH_INTENT: &str = "具体的なトレンドと、企業が今すぐ取り組むべき戦略を知りたい";

/// Site the published pages are served from.
pub const BASE_URL: &str = "https://kiruha0315-debug.github.io/";

/// Gemini model used for article generation.
pub const MODEL: &str = "gemini-2.5-flash";

/// Everything one generation run needs: the baked-in editorial settings
/// plus the API credential read from the environment.
#[derive(Clone)]
pub struct Config {
    pub target_keyword: String,
    pub search_intent: String,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl Config {
    /// Loads the run configuration, reading the API credential from the
    /// environment.
    ///
    /// # Returns
    /// - `Some(Config)` when the credential is present, `None` otherwise.
    pub fn from_env() -> Option<Self> {
        let api_key = match env_var_trimmed(GEMINI_API_KEY_ENV) {
            Some(key) => key,
            None => {
                error!(
                    "{} is not set; skipping article generation.",
                    GEMINI_API_KEY_ENV
                );
                return None;
            }
        };
        info!("Gemini API credential loaded.");

        Some(Config {
            target_keyword: TARGET_KEYWORD.to_string(),
            search_intent: SEARCH_INTENT.to_string(),
            base_url: BASE_URL.to_string(),
            model: MODEL.to_string(),
            api_key,
        })
    }
}
