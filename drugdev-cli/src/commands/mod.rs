pub mod interactive;
pub mod search;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};
use drugdev_formatter::{CardConfig, render_state, state_to_json};
use drugdev_search::{
    ClientConfig, EtAlPolicy, PageSize, PaperSearchClient, SearchSession, SearchState, SortOrder,
};
use indicatif::{ProgressBar, ProgressStyle};

/// NCBI access options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL", global = true)]
    pub email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "drugdev-cli", global = true)]
    pub tool: String,

    /// Override the E-utilities base URL
    #[arg(long, env = "NCBI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,
}

/// Page size and sort order selections
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Number of results to fetch (10, 20, 50 or 100)
    #[arg(short, long, default_value = "10", value_parser = parse_page_size)]
    pub limit: PageSize,

    /// Result ordering
    #[arg(short, long, value_enum, default_value_t = SortArg::Relevance)]
    pub sort: SortArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Relevance,
    PubDate,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::PubDate => SortOrder::PublicationDate,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_page_size(value: &str) -> std::result::Result<PageSize, String> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    PageSize::try_from(n).map_err(|e| e.to_string())
}

pub fn create_search_client(args: &ClientArgs) -> Result<PaperSearchClient> {
    let mut config = ClientConfig::new()
        .with_tool(args.tool.as_str())
        .with_timeout_seconds(args.timeout);

    if let Some(key) = &args.api_key {
        config = config.with_api_key(key.as_str());
    }

    if let Some(email) = &args.email {
        config = config.with_email(email.as_str());
    }

    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.as_str());
    }

    Ok(PaperSearchClient::with_config(config)?)
}

pub fn card_config(true_count_et_al: bool) -> CardConfig {
    let policy = if true_count_et_al {
        EtAlPolicy::TrueCount
    } else {
        EtAlPolicy::DisplayCap
    };
    CardConfig::default().with_et_al(policy)
}

/// Submit the session's current inputs and apply the response
///
/// Returns `false` when the query was blank and nothing was sent.
pub async fn run_search(session: &mut SearchSession, client: &PaperSearchClient) -> Result<bool> {
    let Some(ticket) = session.submit() else {
        return Ok(false);
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Searching PubMed...");

    tracing::debug!(term = %ticket.request.term, "Submitting search");
    let result = client.search(&ticket.request).await;
    spinner.finish_and_clear();

    session.apply(ticket.token, result);
    Ok(true)
}

/// Print the session state in the chosen format
pub fn print_state(state: &SearchState, format: OutputFormat, config: &CardConfig) -> Result<()> {
    let mut stdout = io::stdout();
    match format {
        OutputFormat::Text => writeln!(stdout, "{}", render_state(state, config))?,
        OutputFormat::Json => writeln!(
            stdout,
            "{}",
            serde_json::to_string_pretty(&state_to_json(state, config))?
        )?,
    }
    Ok(())
}
