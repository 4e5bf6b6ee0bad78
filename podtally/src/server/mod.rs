//! The HTTP boundary: count, list and metrics endpoints over one namespace.
//!
//! Query strings are parsed and validated here; the inventory crate only ever
//! sees valid sort keys and directions.

mod error;
mod handlers;
mod metrics;
mod query;

use std::net::SocketAddr;

use actix_web::{App, HttpServer, web};
use podtally_base::consts::http;
use podtally_inventory::{Clock, PodCatalog, PodQueryService, SystemClock};
use snafu::ResultExt;

pub use self::error::Error;
use self::metrics::PodCountMetrics;

/// Everything a request handler needs, shared by all workers.
pub struct ApiState<C> {
    service: PodQueryService<C>,
    namespace: String,
    metrics: PodCountMetrics,
    clock: Box<dyn Clock + Send + Sync>,
}

impl<C> ApiState<C>
where
    C: PodCatalog,
{
    /// # Errors
    ///
    /// Returns [`Error::RegisterMetric`] if the pod-count gauge cannot be
    /// created for `namespace`.
    pub fn new<K>(catalog: C, namespace: impl Into<String>, clock: K) -> Result<Self, Error>
    where
        K: Clock + Send + Sync + 'static,
    {
        let namespace = namespace.into();
        let metrics = PodCountMetrics::new(&namespace)?;
        Ok(Self {
            service: PodQueryService::new(catalog),
            namespace,
            metrics,
            clock: Box::new(clock),
        })
    }
}

/// Registers the endpoints, including the legacy `/npods` and `/pods` paths.
pub fn routes<C>(cfg: &mut web::ServiceConfig)
where
    C: PodCatalog + 'static,
{
    let _unused = cfg
        .route(http::COUNT_PATH, web::get().to(handlers::count::<C>))
        .route(http::LEGACY_COUNT_PATH, web::get().to(handlers::count::<C>))
        .route(http::LIST_PATH, web::get().to(handlers::list::<C>))
        .route(http::LEGACY_LIST_PATH, web::get().to(handlers::list::<C>))
        .route(http::METRICS_PATH, web::get().to(handlers::metrics::<C>));
}

/// Serves the pods of `namespace` on `socket_address` until the process is
/// asked to stop.
///
/// # Errors
///
/// Returns an error if the metrics cannot be registered, the socket cannot be
/// bound, or the server stops abnormally.
pub async fn serve<C>(catalog: C, namespace: String, socket_address: SocketAddr) -> Result<(), Error>
where
    C: PodCatalog + Send + Sync + 'static,
{
    let state = web::Data::new(ApiState::new(catalog, namespace, SystemClock)?);
    tracing::info!("Serving pods of namespace {} on {socket_address}", state.namespace);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::<C>))
        .bind(socket_address)
        .context(error::BindHttpServerSnafu { socket_address })?
        .run()
        .await
        .context(error::RunHttpServerSnafu { socket_address })?;

    tracing::info!("HTTP server on {socket_address} stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::{dev::ServiceResponse, http::StatusCode, test};
    use chrono::{TimeZone, Utc};
    use k8s_openapi::api::core::v1::Pod;
    use podtally_inventory::FixedClock;
    use serde_json::{Value, json};

    use super::*;

    const NAMESPACE: &str = "bbedward";

    struct StaticCatalog(Vec<Pod>);

    impl PodCatalog for StaticCatalog {
        async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, kube::Error> {
            Ok(self
                .0
                .iter()
                .filter(|pod| pod.metadata.namespace.as_deref() == Some(namespace))
                .cloned()
                .collect())
        }
    }

    struct UnreachableCatalog;

    impl PodCatalog for UnreachableCatalog {
        async fn list_pods(&self, _namespace: &str) -> Result<Vec<Pod>, kube::Error> {
            Err(kube::Error::Service(std::io::Error::other("connection refused").into()))
        }
    }

    fn pod(name: &str, created: &str, restarts: i32) -> Pod {
        serde_json::from_value(json!({
            "metadata": { "name": name, "namespace": NAMESPACE, "creationTimestamp": created },
            "status": {
                "containerStatuses": [{
                    "name": "okteto",
                    "image": "okteto/go:latest",
                    "imageID": "",
                    "ready": true,
                    "restartCount": restarts,
                }],
            },
        }))
        .unwrap()
    }

    /// Served deliberately out of order so unsorted responses are
    /// distinguishable from sorted ones.
    fn february_pods() -> Vec<Pod> {
        vec![
            pod("pod2", "2022-02-02T00:00:00Z", 1),
            pod("pod3", "2022-02-03T00:00:00Z", 2),
            pod("pod1", "2022-02-01T00:00:00Z", 0),
        ]
    }

    async fn get<C>(catalog: C, uri: &str) -> ServiceResponse
    where
        C: PodCatalog + 'static,
    {
        let clock = FixedClock(Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap());
        let state = ApiState::new(catalog, NAMESPACE, clock).unwrap();
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(routes::<C>))
                .await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    async fn names(response: ServiceResponse) -> Vec<String> {
        let body: Vec<Value> = test::read_body_json(response).await;
        body.iter().map(|pod| pod["name"].as_str().unwrap().to_string()).collect()
    }

    #[actix_web::test]
    async fn test_count() {
        for uri in ["/count", "/npods"] {
            let response = get(StaticCatalog(february_pods()), uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(test::read_body(response).await, "3");
        }
    }

    #[actix_web::test]
    async fn test_count_failure() {
        let response = get(UnreachableCatalog, "/count").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to list pods in namespace bbedward"));
    }

    #[actix_web::test]
    async fn test_list_sorted_by_name() {
        let response = get(StaticCatalog(february_pods()), "/pods?sort=name&order=asc").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([
                { "name": "pod1", "createdTs": "2022-02-01T00:00:00Z", "restarts": 0 },
                { "name": "pod2", "createdTs": "2022-02-02T00:00:00Z", "restarts": 1 },
                { "name": "pod3", "createdTs": "2022-02-03T00:00:00Z", "restarts": 2 },
            ])
        );
    }

    #[actix_web::test]
    async fn test_list_sorted_by_age_and_restarts() {
        let response = get(StaticCatalog(february_pods()), "/list?sort=age").await;
        assert_eq!(names(response).await, ["pod3", "pod2", "pod1"]);

        let response = get(StaticCatalog(february_pods()), "/list?sort=age&order=desc").await;
        assert_eq!(names(response).await, ["pod1", "pod2", "pod3"]);

        let response = get(StaticCatalog(february_pods()), "/list?sort=restarts&order=desc").await;
        assert_eq!(names(response).await, ["pod3", "pod2", "pod1"]);
    }

    #[actix_web::test]
    async fn test_list_unsorted_keeps_catalog_order() {
        let response = get(StaticCatalog(february_pods()), "/list").await;
        assert_eq!(names(response).await, ["pod2", "pod3", "pod1"]);

        let response = get(StaticCatalog(february_pods()), "/list?order=sideways").await;
        assert_eq!(names(response).await, ["pod2", "pod3", "pod1"]);
    }

    #[actix_web::test]
    async fn test_list_repeated_keys_keep_first_value() {
        let response = get(StaticCatalog(february_pods()), "/list?sort=name&sort=age").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(names(response).await, ["pod1", "pod2", "pod3"]);

        let uri = "/list?sort=name&order=desc&order=asc";
        let response = get(StaticCatalog(february_pods()), uri).await;
        assert_eq!(names(response).await, ["pod3", "pod2", "pod1"]);

        let response = get(StaticCatalog(february_pods()), "/list?order=a&order=b").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(names(response).await, ["pod2", "pod3", "pod1"]);
    }

    #[actix_web::test]
    async fn test_list_invalid_sort() {
        let response = get(StaticCatalog(february_pods()), "/pods?sort=id").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body["message"],
            r#"invalid sort option. Valid options are "name", "age", or "restarts""#
        );
    }

    #[actix_web::test]
    async fn test_list_invalid_sort_order() {
        let response = get(StaticCatalog(february_pods()), "/pods?sort=name&order=sideways").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["message"], r#"invalid sort direction. Valid options are "asc" or "desc""#);
    }

    #[actix_web::test]
    async fn test_list_validates_before_querying_cluster() {
        let response = get(UnreachableCatalog, "/list?sort=id").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_failure() {
        let response = get(UnreachableCatalog, "/list?sort=name").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("connection refused"));
    }

    #[actix_web::test]
    async fn test_metrics() {
        let response = get(StaticCatalog(february_pods()), "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("bbedward_pod_count 3"));
    }

    #[actix_web::test]
    async fn test_metrics_report_sentinel_on_failure() {
        let response = get(UnreachableCatalog, "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("bbedward_pod_count -1"));
    }
}
