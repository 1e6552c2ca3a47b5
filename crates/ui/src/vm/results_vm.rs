use senti_core::model::{AnalysisRecord, ResultSet};

use super::scroll_vm::ScrollVm;
use super::time_fmt::format_timestamp;

/// Everything the table needs to paint one result row.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRowVm {
    pub dom_id: String,
    pub css_class: String,
    pub style: String,
    pub id_label: String,
    pub text: String,
    pub sentiment_label: &'static str,
    pub badge_class: String,
    pub timestamp_label: String,
}

#[must_use]
pub fn row_dom_id(record: &AnalysisRecord) -> String {
    format!("result-row-{}", record.id)
}

/// Rows in the exact order the service returned them, with a staggered
/// animation delay per row.
#[must_use]
pub fn map_result_rows(set: &ResultSet, scroll: &ScrollVm) -> Vec<ResultRowVm> {
    set.results
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let dom_id = row_dom_id(record);
            let css_class = format!(
                "sentiment-{} {}",
                record.sentiment.as_str(),
                scroll.reveal_class(&dom_id)
            );
            ResultRowVm {
                css_class,
                style: format!("animation-delay: {:.1}s;", index as f64 * 0.1),
                id_label: record.id.to_string(),
                text: record.text.clone(),
                sentiment_label: record.sentiment.label(),
                badge_class: format!("sentiment-badge {}", record.sentiment.as_str()),
                timestamp_label: format_timestamp(record.timestamp.as_deref()),
                dom_id,
            }
        })
        .collect()
}
