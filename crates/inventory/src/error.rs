use snafu::Snafu;

/// Errors raised while querying the cluster for pods.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The cluster API call listing the pods of `namespace` failed.
    ///
    /// Network, authentication and authorization failures all end up here;
    /// the call is never retried.
    #[snafu(display("Failed to list pods in namespace {namespace}, error: {source}"))]
    ListPods {
        namespace: String,
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },
}
