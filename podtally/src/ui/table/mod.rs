mod pod_summary_ext;

pub use self::pod_summary_ext::PodSummaryListExt;
