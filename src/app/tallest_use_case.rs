use tracing::{info, instrument, warn};

use crate::app::ports::CatalogPort;
use crate::error::Result;
use crate::metrics;
use crate::pipeline::selector::{catalog_stats, collect_candidates, tallest};
use crate::types::{CatalogStats, CharacterRecord, Selection, SelectionCriteria};

/// Fetches the catalog and picks the tallest character matching the criteria
pub struct TallestCharacterUseCase {
    catalog: Box<dyn CatalogPort>,
}

impl TallestCharacterUseCase {
    pub fn new(catalog: Box<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch, filter and select. Never fails: a fetch error becomes
    /// `Selection::FetchFailed`.
    #[instrument(skip(self), fields(source = self.catalog.source_name()))]
    pub async fn run(&self, criteria: &SelectionCriteria) -> Selection {
        let records = match self.catalog.fetch_records().await {
            Ok(records) => {
                metrics::catalog::fetch_success(records.len());
                records
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                metrics::catalog::fetch_error();
                return Selection::FetchFailed {
                    reason: e.to_string(),
                };
            }
        };

        let candidates = collect_candidates(&records, &criteria.gender, criteria.requires_work);
        metrics::selection::scanned(records.len(), candidates.len());
        info!(
            "{} of {} characters matched the filters",
            candidates.len(),
            records.len()
        );

        match tallest(&candidates) {
            Some(best) => {
                metrics::selection::found();
                Selection::Found {
                    record: best.record.clone(),
                    height_cm: best.height_cm,
                }
            }
            None => {
                metrics::selection::empty();
                Selection::NoMatch
            }
        }
    }

    /// The tallest matching record, or `None` when nothing matched or the
    /// catalog could not be fetched.
    pub async fn find_tallest(&self, gender: &str, requires_work: bool) -> Option<CharacterRecord> {
        self.run(&SelectionCriteria::new(gender, requires_work))
            .await
            .into_record()
    }

    pub async fn stats(&self) -> Result<CatalogStats> {
        let records = self.catalog.fetch_records().await?;
        Ok(catalog_stats(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScraperError;
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticCatalog(Vec<CharacterRecord>);

    #[async_trait]
    impl CatalogPort for StaticCatalog {
        fn source_name(&self) -> &str {
            "static"
        }

        async fn fetch_records(&self) -> Result<Vec<CharacterRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogPort for FailingCatalog {
        fn source_name(&self) -> &str {
            "failing"
        }

        async fn fetch_records(&self) -> Result<Vec<CharacterRecord>> {
            Err(ScraperError::Api {
                message: "catalog unavailable".to_string(),
            })
        }
    }

    fn use_case(records: Vec<CharacterRecord>) -> TallestCharacterUseCase {
        TallestCharacterUseCase::new(Box::new(StaticCatalog(records)))
    }

    #[tokio::test]
    async fn test_found_carries_height() {
        let selection = use_case(vec![json!({
            "name": "HeroX",
            "appearance": { "gender": "MALE", "height": ["6'2", "188 cm"] },
            "work": { "occupation": "Detective" }
        })])
        .run(&SelectionCriteria::new("male", true))
        .await;

        match selection {
            Selection::Found { record, height_cm } => {
                assert_eq!(record["name"], "HeroX");
                assert_eq!(height_cm, 188);
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_match_and_fetch_failure_are_distinguishable() {
        let no_match = use_case(vec![]).run(&SelectionCriteria::new("male", true)).await;
        assert_eq!(no_match, Selection::NoMatch);

        let failed = TallestCharacterUseCase::new(Box::new(FailingCatalog))
            .run(&SelectionCriteria::new("male", true))
            .await;
        assert!(matches!(failed, Selection::FetchFailed { ref reason } if reason.contains("unavailable")));
    }

    #[tokio::test]
    async fn test_find_tallest_collapses_failures_to_none() {
        let failing = TallestCharacterUseCase::new(Box::new(FailingCatalog));
        assert!(failing.find_tallest("female", false).await.is_none());
        assert!(use_case(vec![]).find_tallest("female", false).await.is_none());
    }

    #[tokio::test]
    async fn test_stats_propagates_fetch_error() {
        let failing = TallestCharacterUseCase::new(Box::new(FailingCatalog));
        assert!(failing.stats().await.is_err());

        let stats = use_case(vec![json!({ "appearance": { "height": ["-", "100 cm"] } })])
            .stats()
            .await
            .unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.measurable, 1);
        assert_eq!(stats.employed, 0);
    }
}
