use async_trait::async_trait;

use crate::error::Result;
use crate::types::CharacterRecord;

/// Source of the full character catalog. One call is one atomic fetch.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Short name used in logs
    fn source_name(&self) -> &str;

    async fn fetch_records(&self) -> Result<Vec<CharacterRecord>>;
}

// Transport port used by the HTTP-backed catalog
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpGetResult, String>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
