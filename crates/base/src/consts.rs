use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// The namespace reported on when neither the configuration file nor the
/// command line names one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// The address the HTTP server binds to by default.
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

pub mod http {
    //! Paths served by the HTTP boundary.

    pub const COUNT_PATH: &str = "/count";
    pub const LIST_PATH: &str = "/list";
    pub const METRICS_PATH: &str = "/metrics";

    /// Legacy paths kept for clients of the first deployment.
    pub const LEGACY_COUNT_PATH: &str = "/npods";
    pub const LEGACY_LIST_PATH: &str = "/pods";
}

pub mod metrics {
    //! Names of the exported Prometheus metrics.

    /// Suffix of the pod-count gauge; the full name is
    /// `<namespace>_pod_count`.
    pub const POD_COUNT: &str = "pod_count";

    /// Value reported by the pod-count gauge when the cluster query fails.
    pub const POD_COUNT_UNAVAILABLE: i64 = -1;
}
