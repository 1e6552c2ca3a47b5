use senti_core::model::{Sentiment, SentimentCounts};

/// Fixed color per bar. Part of the contract with the chart surface:
/// [positive, neutral, negative] rendered green / dark orange / red.
const BAR_COLORS: [&str; 3] = ["#22c55e", "#d66000", "#ef4444"];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
    /// Bar height as a percentage of the tallest bar.
    pub height_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub bars: Vec<ChartBar>,
}

/// Map the aggregate counts to the three-bar series the chart renders.
#[must_use]
pub fn chart_series(counts: SentimentCounts) -> ChartSeries {
    let max = Sentiment::ORDERED
        .iter()
        .map(|sentiment| counts.count(*sentiment))
        .max()
        .unwrap_or(0);

    let bars = Sentiment::ORDERED
        .iter()
        .zip(BAR_COLORS)
        .map(|(sentiment, color)| {
            let value = counts.count(*sentiment);
            let height_percent = if max == 0 {
                0.0
            } else {
                f64::from(value) / f64::from(max) * 100.0
            };
            ChartBar {
                label: sentiment.label(),
                value,
                color,
                height_percent,
            }
        })
        .collect();

    ChartSeries {
        title: "Sentiment Distribution",
        bars,
    }
}
