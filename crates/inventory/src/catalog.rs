use k8s_openapi::api::core::v1::Pod;
use kube::{Api, api::ListParams};

/// Read access to the pods of a namespace.
///
/// This is the only point where the inventory talks to the cluster. The
/// production implementation is [`kube::Client`]; tests plug in fakes.
/// Implementations must be safe to share between concurrent requests.
pub trait PodCatalog {
    /// Lists the pods currently reported for `namespace`, in the order the
    /// cluster returns them.
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, kube::Error>;
}

impl PodCatalog for kube::Client {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, kube::Error> {
        let pods = Api::<Pod>::namespaced(self.clone(), namespace)
            .list(&ListParams::default())
            .await?;
        Ok(pods.items)
    }
}

