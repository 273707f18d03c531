use reqwest::Client;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::core::extractor::{trim_outliers, PriceMatcher};
use crate::core::queries;
use crate::domain::model::{FetchOutcome, PageCapture, PhoneQuery, PriceRange, ResultSet};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, ScoutError};

// Search endpoints serve a reduced page to unknown clients; send a plain
// browser identity.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const OUTLIER_DEVIATION: f64 = 0.5;

#[derive(Serialize)]
struct PriceRow<'a> {
    phone: &'a str,
    min_price: String,
    max_price: String,
    status: &'static str,
}

pub struct PricePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
    matcher: PriceMatcher,
}

impl<S: Storage, C: ConfigProvider> PricePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self {
            storage,
            config,
            client,
            matcher: PriceMatcher::new(),
        })
    }

    async fn fetch_page(&self, query: &PhoneQuery) -> Result<String> {
        let response = self
            .client
            .get(self.config.search_endpoint())
            .query(&[
                ("q", query.as_str()),
                ("tbm", "shop"),
                ("hl", self.config.language()),
                ("gl", self.config.country()),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn queries(&self) -> Result<Vec<PhoneQuery>> {
        let queries = match self.config.input_file() {
            Some(path) => queries::load_queries(Path::new(path))?,
            None => queries::builtin_queries(),
        };
        if queries.is_empty() {
            return Err(ScoutError::ProcessingError {
                message: "no phone names to look up".to_string(),
            });
        }
        Ok(queries)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PricePipeline<S, C> {
    /// Fetches one search page per phone, strictly in input order. A failed
    /// fetch is recorded for that phone and never aborts the batch.
    async fn extract(&self) -> Result<Vec<PageCapture>> {
        let queries = self.queries()?;
        let mut captures = Vec::with_capacity(queries.len());

        for query in queries {
            tracing::info!("Looking up prices for '{}'", query);
            let outcome = match self.fetch_page(&query).await {
                Ok(page) => FetchOutcome::Page(page),
                Err(e) => {
                    tracing::warn!("Fetch failed for '{}': {}", query, e);
                    FetchOutcome::Failed(e.to_string())
                }
            };
            captures.push(PageCapture { query, outcome });
        }

        Ok(captures)
    }

    /// Reduces each captured page to a price range, preserving capture order.
    async fn transform(&self, pages: Vec<PageCapture>) -> Result<ResultSet> {
        let mut ranges = Vec::with_capacity(pages.len());

        for capture in pages {
            let range = match capture.outcome {
                FetchOutcome::Failed(ref reason) => {
                    tracing::debug!("No page for '{}': {}", capture.query, reason);
                    PriceRange::fetch_failed(capture.query)
                }
                FetchOutcome::Page(ref page) => {
                    let mut totals = self.matcher.scan(page);
                    if self.config.trim_outliers() {
                        totals = trim_outliers(&totals, OUTLIER_DEVIATION);
                    }
                    PriceRange::from_totals(capture.query, &totals)
                }
            };
            tracing::info!("Price range: {}", range);
            ranges.push(range);
        }

        Ok(ResultSet { ranges })
    }

    /// Writes all rows at once: `phone,min_price,max_price,status`, prices
    /// with a dot decimal separator, empty cells for absent bounds.
    async fn load(&self, results: ResultSet) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for range in &results.ranges {
            writer.serialize(PriceRow {
                phone: range.phone.as_str(),
                min_price: range.min.map_or_else(String::new, |v| format!("{:.2}", v)),
                max_price: range.max.map_or_else(String::new, |v| format!("{:.2}", v)),
                status: range.status.as_str(),
            })?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| ScoutError::ProcessingError {
                message: format!("could not finish CSV output: {}", e),
            })?;

        let file_name = self.config.output_file();
        self.storage.write_file(file_name, &data).await?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}
