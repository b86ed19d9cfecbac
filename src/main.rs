use std::path::Path;

use chrono::Local;
use tracing::error;

use calliope::config::Config;
use calliope::{generator, logging, page, render};

#[tokio::main]
async fn main() {
    // A local .env may hold the API credential when run outside CI.
    dotenvy::dotenv().ok();

    logging::configure_logging();

    let config = match Config::from_env() {
        Some(config) => config,
        None => return,
    };

    let draft = match generator::generate_draft(&config).await {
        Some(draft) => draft,
        None => {
            error!("Article generation failed; no page written.");
            return;
        }
    };

    let body_html = render::markdown_to_html(&draft.body_markdown);
    let today = Local::now().date_naive();

    if let Err(e) = page::save_article(&config, &draft, &body_html, today, Path::new(".")) {
        error!("Failed to save article page: {:?}", e);
    }
}
