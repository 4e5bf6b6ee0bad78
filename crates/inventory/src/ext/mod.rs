//! Extensions to the `k8s_openapi` `Pod` type used when summarizing pods.

mod pod;

pub use self::pod::PodExt;
