use serde::Serialize;

use crate::models::ChatExport;
use crate::utils::time::format_epoch_seconds;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub threads: usize,
    pub nodes: usize,
    pub messages: usize,
    pub placeholder_nodes: usize,
    pub earliest_create_time: Option<String>,
    pub latest_update_time: Option<String>,
}

#[must_use]
pub fn summarize(export: &ChatExport) -> ExportSummary {
    let mut summary = ExportSummary {
        threads: export.len(),
        ..ExportSummary::default()
    };
    let mut earliest: Option<f64> = None;
    let mut latest: Option<f64> = None;

    for thread in export.threads() {
        summary.nodes += thread.mapping.len();
        for node in thread.mapping.values() {
            if node.is_placeholder() {
                summary.placeholder_nodes += 1;
            } else {
                summary.messages += 1;
            }
        }

        earliest = Some(earliest.map_or(thread.create_time, |seen| seen.min(thread.create_time)));
        latest = Some(latest.map_or(thread.update_time, |seen| seen.max(thread.update_time)));
    }

    summary.earliest_create_time = earliest.and_then(format_epoch_seconds);
    summary.latest_update_time = latest.and_then(format_epoch_seconds);
    summary
}
