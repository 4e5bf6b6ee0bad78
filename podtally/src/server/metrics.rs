//! Prometheus metrics exported on the scrape endpoint.

use podtally_base::consts::metrics;
use prometheus::{IntGauge, Opts, Registry, TextEncoder};
use snafu::ResultExt;
use tokio::sync::Mutex;

use crate::server::{Error, error};

/// The pod-count gauge and the registry it is exported from.
///
/// The gauge is named `<namespace>_pod_count`. Scrapes are serialized, so
/// the text a scrape returns always carries that scrape's own sample.
pub struct PodCountMetrics {
    registry: Registry,
    pod_count: IntGauge,
    scrape_lock: Mutex<()>,
}

impl PodCountMetrics {
    pub fn new(namespace: &str) -> Result<Self, Error> {
        let metric_namespace = metric_name_component(namespace);
        let help = format!("Number of pods in the {namespace} namespace");
        let opts = Opts::new(metrics::POD_COUNT, help).namespace(metric_namespace.clone());
        let metric = format!("{metric_namespace}_{}", metrics::POD_COUNT);

        let registry = Registry::new();
        let pod_count = IntGauge::with_opts(opts)
            .with_context(|_| error::RegisterMetricSnafu { metric: metric.clone() })?;
        registry
            .register(Box::new(pod_count.clone()))
            .with_context(|_| error::RegisterMetricSnafu { metric })?;

        Ok(Self { registry, pod_count, scrape_lock: Mutex::new(()) })
    }

    /// Awaits `sample` and renders the registry with its result.
    ///
    /// `None` means the cluster could not be queried and is reported as `-1`.
    pub async fn scrape<F>(&self, sample: F) -> Result<String, prometheus::Error>
    where
        F: Future<Output = Option<usize>>,
    {
        let _guard = self.scrape_lock.lock().await;
        match sample.await {
            Some(count) => self.set_pod_count(count),
            None => self.set_pod_count_unavailable(),
        }
        self.encode()
    }

    /// Records a successful count.
    fn set_pod_count(&self, count: usize) {
        self.pod_count.set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    /// Records that the cluster could not be queried.
    fn set_pod_count_unavailable(&self) { self.pod_count.set(metrics::POD_COUNT_UNAVAILABLE); }

    /// Renders every registered metric in the Prometheus text format.
    fn encode(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

/// Turns a Kubernetes namespace into a valid metric name component.
///
/// Namespaces may contain `-` and start with a digit, metric names may not.
fn metric_name_component(namespace: &str) -> String {
    let mut component = namespace
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();
    if component.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        component.insert(0, '_');
    }
    component
}
