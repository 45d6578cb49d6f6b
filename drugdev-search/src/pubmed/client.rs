use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Result, SearchError};
use crate::pubmed::models::{IdSearch, Paper, SearchOutcome};
use crate::pubmed::parser::parse_papers;
use crate::pubmed::query::SearchRequest;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;

/// Client running the two-step ESearch + EFetch pipeline against PubMed
#[derive(Clone)]
pub struct PaperSearchClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PaperSearchClient {
    /// Create a client with default NCBI configuration
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::PaperSearchClient;
    ///
    /// let client = PaperSearchClient::new()?;
    /// # Ok::<(), drugdev_search::SearchError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::{ClientConfig, PaperSearchClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PaperSearchClient::with_config(config)?;
    /// # Ok::<(), drugdev_search::SearchError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`SearchError::RequestError`] when the HTTP client cannot be built
    /// from `config`, for example a User-Agent that is not a valid header.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search for papers and fetch their details
    ///
    /// Runs the identifier search, then a single batch detail fetch for
    /// exactly the returned identifiers. The first failure aborts the whole
    /// search; nothing fetched before it is returned.
    ///
    /// # Errors
    ///
    /// * [`SearchError::NoResults`] - the identifier search matched nothing
    /// * any other variant - network, status or payload failure at either step
    ///
    /// # Example
    ///
    /// ```no_run
    /// use drugdev_search::{PaperSearchClient, SearchQuery};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PaperSearchClient::new()?;
    ///     let request = SearchQuery::new("cancer immunotherapy").build().unwrap();
    ///     let outcome = client.search(&request).await?;
    ///     println!("Found {} research papers", outcome.total_count);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, request), fields(page_size = %request.page_size, sort = %request.sort))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let IdSearch { total_count, ids } = self.search_ids(request).await?;

        if ids.is_empty() {
            info!("Identifier search returned no papers");
            return Err(SearchError::NoResults);
        }

        let papers = self.fetch_papers(&ids).await?;
        info!(
            total_count,
            requested = ids.len(),
            parsed = papers.len(),
            "Search completed"
        );

        Ok(SearchOutcome {
            total_count,
            papers,
        })
    }

    /// Run the identifier search (ESearch)
    #[instrument(skip(self, request))]
    pub async fn search_ids(&self, request: &SearchRequest) -> Result<IdSearch> {
        let query = request
            .query_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}/esearch.fcgi?{}", self.base_url, query);

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let search_result: ESearchResult = response.json().await?;
        let data = search_result.esearchresult;

        // NCBI sometimes reports errors inside a 200 response
        if let Some(error_msg) = data.error {
            warn!(error = %error_msg, "ESearch returned an error");
            return Err(SearchError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {error_msg}"),
            });
        }

        if let Some(translation) = &data.querytranslation {
            debug!(query_translation = %translation, "ESearch query translation");
        }

        let total_count = data
            .count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .unwrap_or(data.idlist.len());

        debug!(
            total_count,
            retmax = data.retmax.as_deref().unwrap_or("unknown"),
            returned = data.idlist.len(),
            "ESearch completed"
        );

        Ok(IdSearch {
            total_count,
            ids: data.idlist,
        })
    }

    /// Fetch full records for `ids` in one EFetch call
    ///
    /// An empty slice returns an empty list without contacting the provider.
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_papers(&self, ids: &[String]) -> Result<Vec<Paper>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(bad) = ids
            .iter()
            .find(|id| id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()))
        {
            warn!(pmid = %bad, "Provider returned a non-numeric identifier");
            return Err(SearchError::InvalidPmid { pmid: bad.clone() });
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            ids.join(",")
        );

        debug!("Making batch EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let papers = parse_papers(&xml_text)?;
        if papers.len() < ids.len() {
            debug!(
                requested = ids.len(),
                parsed = papers.len(),
                "Some records were dropped or missing"
            );
        }

        Ok(papers)
    }

    /// GET `url` with NCBI identification parameters, after taking a
    /// rate-limit token. Any non-success status becomes an error.
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await;
        debug!("Making API request to: {}", final_url);

        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(SearchError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
