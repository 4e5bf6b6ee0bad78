use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;

pub trait PodExt {
    /// The declared name of the pod, empty when the record carries none.
    fn pod_name(&self) -> &str;

    /// The creation time recorded by the API server.
    fn creation_time(&self) -> Option<DateTime<Utc>>;

    /// Sum of the restart counts of the pod's regular containers.
    ///
    /// Init and ephemeral containers are not counted. Negative counts are
    /// treated as zero and the sum saturates at `u32::MAX`.
    fn total_restarts(&self) -> u32;
}

impl PodExt for Pod {
    fn pod_name(&self) -> &str { self.metadata.name.as_deref().unwrap_or_default() }

    fn creation_time(&self) -> Option<DateTime<Utc>> {
        let timestamp = &self.metadata.creation_timestamp.as_ref()?.0;
        let nanos = u32::try_from(timestamp.subsec_nanosecond()).unwrap_or_default();
        DateTime::from_timestamp(timestamp.as_second(), nanos)
    }

    fn total_restarts(&self) -> u32 {
        self.status
            .as_ref()
            .and_then(|status| status.container_statuses.as_ref())
            .into_iter()
            .flatten()
            .map(|container| u32::try_from(container.restart_count).unwrap_or_default())
            .fold(0, u32::saturating_add)
    }
}
