use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::apis::records_from_payload;
use crate::app::ports::{CatalogPort, HttpClientPort};
use crate::config::Config;
use crate::error::{Result, ScraperError};
use crate::infra::http_client::ReqwestHttp;
use crate::types::CharacterRecord;

/// Catalog served over HTTP as one JSON array
pub struct SuperheroApi {
    http: Arc<dyn HttpClientPort>,
    url: String,
}

impl SuperheroApi {
    pub fn new(http: Arc<dyn HttpClientPort>, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = ReqwestHttp::from_config(config)?;
        Ok(Self::new(Arc::new(http), config.catalog.url.clone()))
    }
}

#[async_trait]
impl CatalogPort for SuperheroApi {
    fn source_name(&self) -> &str {
        "superhero_api"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_records(&self) -> Result<Vec<CharacterRecord>> {
        debug!("Fetching character catalog");
        let response = self
            .http
            .get(&self.url)
            .await
            .map_err(|message| ScraperError::Api { message })?;

        if !response.is_success() {
            warn!(status = response.status, "Catalog request was not successful");
            return Err(ScraperError::Status {
                url: self.url.clone(),
                status: response.status,
            });
        }

        if !response.content_type.contains("json") {
            debug!(content_type = %response.content_type, "Catalog did not advertise JSON, decoding anyway");
        }

        let records = records_from_payload(&response.bytes)?;
        info!("Fetched {} characters from catalog", records.len());
        Ok(records)
    }
}
