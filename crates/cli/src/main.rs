use api_shared::{SearchRes, TopHeadlinesRes};
use clap::{Parser, Subcommand};
use news_core::{
    clean_articles,
    config::base_url_from_env_value,
    constants::{DEFAULT_COUNTRY, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY},
    ApiKey, NewsApiClient, NewsConfig, NonEmptyText, UpstreamPayload, UpstreamResponse,
};

#[derive(Parser)]
#[command(name = "news")]
#[command(about = "Query the upstream news API and print normalised articles")]
struct Cli {
    /// Upstream API key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Upstream base URL
    #[arg(long, env = "NEWSAPI_BASE_URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Top headlines for a country
    Top {
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
        /// Category filter (optional)
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Keyword search across all articles
    Search {
        /// Keyword to search for
        q: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        #[arg(long, default_value = DEFAULT_SORT_BY)]
        sort_by: String,
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.command.is_none() {
        println!("Use 'news --help' for commands");
        return Ok(());
    }

    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}

/// Executes one subcommand and returns the JSON to print.
///
/// Caller input is validated before the API key is looked at, matching the REST API.
async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let Cli {
        api_key,
        base_url,
        command,
    } = cli;

    match command {
        None => Ok(String::new()),
        Some(Commands::Top {
            country,
            category,
            page_size,
        }) => {
            let (api_key, client) = connect(api_key, base_url)?;
            let response = client
                .fetch_top_headlines(&api_key, &country, category.as_deref(), page_size)
                .await?;
            let mut payload = success_payload(response)?;
            Ok(serde_json::to_string_pretty(&TopHeadlinesRes {
                total_results: payload.total_results,
                articles: clean_articles(payload.take_articles()),
            })?)
        }
        Some(Commands::Search {
            q,
            page_size,
            sort_by,
            language,
        }) => {
            let query =
                NonEmptyText::new(q).map_err(|_| "Query parameter 'q' cannot be empty.")?;
            let (api_key, client) = connect(api_key, base_url)?;
            let response = client
                .fetch_search_results(&api_key, query.as_str(), page_size, &sort_by, &language)
                .await?;
            let mut payload = success_payload(response)?;
            Ok(serde_json::to_string_pretty(&SearchRes {
                query: query.into_inner(),
                total_results: payload.total_results,
                articles: clean_articles(payload.take_articles()),
            })?)
        }
    }
}

fn connect(
    api_key: Option<String>,
    base_url: Option<String>,
) -> Result<(ApiKey, NewsApiClient), Box<dyn std::error::Error>> {
    let api_key = ApiKey::from_optional(api_key).ok_or("API key not configured.")?;
    let cfg = NewsConfig::new(
        Some(api_key.clone()),
        base_url_from_env_value(base_url),
        DEFAULT_COUNTRY.into(),
    )?;
    let client = NewsApiClient::new(&cfg)?;
    Ok((api_key, client))
}

// Non-2xx answers are reported with the upstream status and body, as the REST API does
fn success_payload(
    response: UpstreamResponse,
) -> Result<UpstreamPayload, Box<dyn std::error::Error>> {
    if !response.is_success() {
        return Err(format!(
            "upstream returned HTTP {}: {}",
            response.status, response.body
        )
        .into());
    }
    Ok(response.payload()?)
}
