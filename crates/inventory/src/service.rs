use k8s_openapi::api::core::v1::Pod;
use snafu::ResultExt;

use crate::{PodCatalog, PodSummary, error, error::Error};

/// Answers count and list queries for the pods of a namespace.
///
/// Nothing is cached: every call goes to the catalog and reflects the cluster
/// state at call time.
#[derive(Clone, Debug)]
pub struct PodQueryService<C> {
    catalog: C,
}

impl<C> PodQueryService<C>
where
    C: PodCatalog,
{
    pub const fn new(catalog: C) -> Self { Self { catalog } }

    /// Returns the number of pods currently reported for `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListPods`] if the catalog call fails.
    pub async fn count(&self, namespace: &str) -> Result<usize, Error> {
        let pods = self.fetch(namespace).await?;
        Ok(pods.len())
    }

    /// Returns one summary per pod of `namespace`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListPods`] if the catalog call fails.
    pub async fn list(&self, namespace: &str) -> Result<Vec<PodSummary>, Error> {
        let pods = self.fetch(namespace).await?;
        Ok(pods.iter().map(PodSummary::from).collect())
    }

    async fn fetch(&self, namespace: &str) -> Result<Vec<Pod>, Error> {
        let pods = self
            .catalog
            .list_pods(namespace)
            .await
            .with_context(|_| error::ListPodsSnafu { namespace: namespace.to_string() })?;
        tracing::debug!("Listed {} pods in namespace {namespace}", pods.len());
        Ok(pods)
    }
}
