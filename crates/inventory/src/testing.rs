//! Pod fixtures and fake catalogs shared by the unit tests of this crate.

use k8s_openapi::api::core::v1::Pod;
use serde_json::{Value, json};

use crate::PodCatalog;

pub const NAMESPACE: &str = "bbedward";

pub fn container_status(name: &str, restart_count: i32) -> Value {
    json!({
        "name": name,
        "image": "okteto/go:latest",
        "imageID": "",
        "ready": true,
        "restartCount": restart_count,
    })
}

/// Builds a pod in [`NAMESPACE`] with one container per restart count.
pub fn pod(name: &str, created: &str, restart_counts: &[i32]) -> Pod {
    let statuses = restart_counts
        .iter()
        .enumerate()
        .map(|(idx, count)| container_status(&format!("container-{idx}"), *count))
        .collect::<Vec<_>>();

    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": NAMESPACE,
            "creationTimestamp": created,
        },
        "status": { "containerStatuses": statuses },
    }))
    .expect("fixture pod should deserialize")
}

/// The three pods created on the first three days of February 2022 with
/// 0, 1 and 2 restarts.
pub fn february_pods() -> Vec<Pod> {
    vec![
        pod("pod1", "2022-02-01T00:00:00Z", &[0]),
        pod("pod2", "2022-02-02T00:00:00Z", &[1]),
        pod("pod3", "2022-02-03T00:00:00Z", &[2]),
    ]
}

/// A catalog serving a fixed set of pods, filtered by namespace.
pub struct StaticCatalog(pub Vec<Pod>);

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

/// A catalog whose every call fails as if the API server were unreachable.
pub struct UnreachableCatalog;

impl PodCatalog for UnreachableCatalog {
    async fn list_pods(&self, _namespace: &str) -> Result<Vec<Pod>, kube::Error> {
        Err(kube::Error::Service(std::io::Error::other("connection refused").into()))
    }
}
