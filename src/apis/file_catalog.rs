use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::apis::records_from_payload;
use crate::app::ports::CatalogPort;
use crate::error::Result;
use crate::types::CharacterRecord;

/// Catalog snapshot saved on disk, e.g. a downloaded `all.json`
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogPort for FileCatalog {
    fn source_name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_records(&self) -> Result<Vec<CharacterRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records = records_from_payload(&bytes)?;
        info!("Loaded {} characters from file", records.len());
        Ok(records)
    }
}
