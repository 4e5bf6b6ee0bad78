use chrono::{DateTime, TimeDelta, Utc};
use k8s_openapi::api::core::v1::Pod;
use serde::{Deserialize, Serialize};

use crate::PodExt;

/// A flat, read-only view of one pod, rebuilt from the cluster on every query.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSummary {
    pub name: String,

    /// Serialized as an RFC 3339 timestamp.
    pub created_ts: DateTime<Utc>,

    pub restarts: u32,
}

impl PodSummary {
    /// Time elapsed between the creation of the pod and `now`.
    ///
    /// Negative when the cluster clock is ahead of `now`.
    #[inline]
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta { now - self.created_ts }
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        let created_ts = pod.creation_time().unwrap_or_else(|| {
            tracing::debug!("Pod {} carries no creation timestamp", pod.pod_name());
            DateTime::default()
        });
        Self { name: pod.pod_name().to_string(), created_ts, restarts: pod.total_restarts() }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::testing::pod;

    #[test]
    fn test_projection() {
        let summary = PodSummary::from(&pod("pod2", "2022-02-02T00:00:00Z", &[1]));

        assert_eq!(summary.name, "pod2");
        assert_eq!(summary.created_ts, Utc.with_ymd_and_hms(2022, 2, 2, 0, 0, 0).unwrap());
        assert_eq!(summary.restarts, 1);
    }

    #[test]
    fn test_serialized_field_names() {
        let summary = PodSummary::from(&pod("pod1", "2022-02-01T00:00:00Z", &[0]));
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "pod1",
                "createdTs": "2022-02-01T00:00:00Z",
                "restarts": 0,
            })
        );
    }

    #[test]
    fn test_age_is_relative_to_now() {
        let summary = PodSummary::from(&pod("pod1", "2022-02-01T00:00:00Z", &[0]));
        let now = Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 30).unwrap();

        assert_eq!(summary.age(now), TimeDelta::try_seconds(30).unwrap());
    }
}
