use calliope::config::GEMINI_API_KEY_ENV;
use calliope::environment::env_var_trimmed;
use calliope::llm;
use calliope::LLMParams;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(about = "Send one prompt to the Gemini API and print the response")]
struct Args {
    /// Prompt to send
    #[clap(short = 'P', long, default_value = "Reply with the single word 'ok'.")]
    prompt: String,

    /// Gemini model to use
    #[clap(short, long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Request JSON output and decode the response
    #[clap(short, long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let api_key = env_var_trimmed(GEMINI_API_KEY_ENV).ok_or_else(|| {
        anyhow::anyhow!("{} environment variable required", GEMINI_API_KEY_ENV)
    })?;

    let params = LLMParams {
        api_key,
        model: args.model.clone(),
    };

    info!("Testing model {} with prompt: {}", args.model, args.prompt);

    if args.json {
        match llm::generate_json_response(&args.prompt, &params).await {
            Some(value) => {
                info!("Decoded JSON response:");
                println!("\n{}", serde_json::to_string_pretty(&value)?);
                Ok(())
            }
            None => {
                error!("Failed to get JSON response from Gemini");
                Err(anyhow::anyhow!("Failed to get JSON response from Gemini"))
            }
        }
    } else {
        match llm::generate_text_response(&args.prompt, &params).await {
            Some(response) => {
                info!("Response from Gemini:");
                println!("\n{}", response);
                Ok(())
            }
            None => {
                error!("Failed to get response from Gemini");
                Err(anyhow::anyhow!("Failed to get response from Gemini"))
            }
        }
    }
}
