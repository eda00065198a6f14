//! Counters for catalog fetches and selection runs.
//!
//! Recording is always on; the values are only exported when a Prometheus
//! listener port is configured.

use std::net::SocketAddr;

use crate::constants::ENV_METRICS_PORT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    CatalogFetchSuccess,
    CatalogFetchError,
    CatalogRecordsReceived,
    SelectionRecordsScanned,
    SelectionCandidates,
    SelectionFound,
    SelectionEmpty,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::CatalogFetchSuccess => "hero_scout_catalog_fetch_success_total",
            MetricName::CatalogFetchError => "hero_scout_catalog_fetch_error_total",
            MetricName::CatalogRecordsReceived => "hero_scout_catalog_records_received_total",
            MetricName::SelectionRecordsScanned => "hero_scout_records_scanned_total",
            MetricName::SelectionCandidates => "hero_scout_candidates_total",
            MetricName::SelectionFound => "hero_scout_selections_found_total",
            MetricName::SelectionEmpty => "hero_scout_selections_empty_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            CatalogFetchSuccess,
            CatalogFetchError,
            CatalogRecordsReceived,
            SelectionRecordsScanned,
            SelectionCandidates,
            SelectionFound,
            SelectionEmpty,
        ]
        .into_iter()
    }
}

/// Install the Prometheus exporter when `HERO_SCOUT_METRICS_PORT` is set.
/// Must be called from inside a tokio runtime.
pub fn init_metrics() {
    let Ok(raw) = std::env::var(ENV_METRICS_PORT) else {
        tracing::debug!("{} not set, metrics exporter disabled", ENV_METRICS_PORT);
        return;
    };
    let Some(port) = parse_metrics_port(&raw) else {
        tracing::warn!(
            "{} is not a valid port ('{}'), metrics exporter disabled",
            ENV_METRICS_PORT,
            raw
        );
        return;
    };

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!("Prometheus exporter listening on http://{}/metrics", addr),
        Err(e) => tracing::warn!("Prometheus exporter install failed (possibly already installed): {}", e),
    }
}

fn parse_metrics_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

pub mod catalog {
    use super::MetricName;

    pub fn fetch_success(records: usize) {
        ::metrics::counter!(MetricName::CatalogFetchSuccess.as_str()).increment(1);
        ::metrics::counter!(MetricName::CatalogRecordsReceived.as_str()).increment(records as u64);
    }

    pub fn fetch_error() {
        ::metrics::counter!(MetricName::CatalogFetchError.as_str()).increment(1);
    }
}

pub mod selection {
    use super::MetricName;

    pub fn scanned(records: usize, candidates: usize) {
        ::metrics::counter!(MetricName::SelectionRecordsScanned.as_str()).increment(records as u64);
        ::metrics::counter!(MetricName::SelectionCandidates.as_str()).increment(candidates as u64);
    }

    pub fn found() {
        ::metrics::counter!(MetricName::SelectionFound.as_str()).increment(1);
    }

    pub fn empty() {
        ::metrics::counter!(MetricName::SelectionEmpty.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_names_are_unique_and_prefixed() {
        let names: HashSet<_> = MetricName::all_metrics().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), MetricName::all_metrics().count());
        assert!(names.iter().all(|n| n.starts_with("hero_scout_") && n.ends_with("_total")));
    }

    #[test]
    fn test_prometheus_recorder_sees_counters() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            catalog::fetch_success(3);
            catalog::fetch_error();
            selection::scanned(3, 1);
            selection::found();
            selection::empty();
        });

        let rendered = handle.render();
        for metric in MetricName::all_metrics() {
            assert!(
                rendered.contains(metric.as_str()),
                "{} missing from:\n{}",
                metric.as_str(),
                rendered
            );
        }
    }

    #[test]
    fn test_metrics_port_parsing() {
        assert_eq!(parse_metrics_port("9898"), Some(9898));
        assert_eq!(parse_metrics_port(" 9100 "), Some(9100));
        assert_eq!(parse_metrics_port("metrics"), None);
        assert_eq!(parse_metrics_port("70000"), None);
    }
}
