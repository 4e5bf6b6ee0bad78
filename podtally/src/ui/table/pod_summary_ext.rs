//! Table rendering for lists of pod summaries.

use podtally_inventory::{Clock, PodSummary, format_age};

/// Renders pod summaries as a borderless table in the order given.
pub trait PodSummaryListExt {
    /// The table has the columns "NAME", "AGE", "RESTARTS" and "CREATED";
    /// ages are measured against `clock`.
    fn render_table(&self, clock: &impl Clock) -> String;
}

impl PodSummaryListExt for [PodSummary] {
    fn render_table(&self, clock: &impl Clock) -> String {
        let rows = self.iter().map(|pod| pod_column(pod, clock)).collect::<Vec<_>>();
        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
            .set_header(vec!["NAME", "AGE", "RESTARTS", "CREATED"])
            .add_rows(rows)
            .to_string()
    }
}

fn pod_column(pod: &PodSummary, clock: &impl Clock) -> [String; 4] {
    [
        pod.name.clone(),
        format_age(pod.created_ts, clock),
        pod.restarts.to_string(),
        pod.created_ts.to_rfc3339(),
    ]
}
