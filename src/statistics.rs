//! Usage statistics over the canonical document sequence.
//!
//! Produces the data behind two charts: a bar chart of search counts per
//! document and a pie chart of hit rates per document. The report is a
//! read-only snapshot; nothing flows back into the store.

use crate::domain::Document;
use serde::Serialize;
use serde_json::{json, Value};

const BAR_COLOR: &str = "#155aef";

/// One bar: a document name and its search count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCountBar {
    pub name: String,
    pub value: u64,
}

/// One pie slice: a document name and its hit rate in percent, one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitRateSlice {
    pub name: String,
    pub value: f64,
}

/// Chart data for the statistics panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub search_counts: Vec<SearchCountBar>,
    pub hit_rates: Vec<HitRateSlice>,
}

impl StatisticsReport {
    /// Builds both series in document order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docshelf::statistics::StatisticsReport;
    /// use docshelf::{DocType, Document};
    ///
    /// let mut doc = Document::new("1", "plan.pdf", DocType::Pdf);
    /// doc.statistics.search_count = 150;
    /// doc.statistics.hit_rate = 0.856;
    ///
    /// let report = StatisticsReport::from_documents(&[doc]);
    /// assert_eq!(report.search_counts[0].value, 150);
    /// assert!((report.hit_rates[0].value - 85.6).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_documents(documents: &[Document]) -> Self {
        let search_counts = documents
            .iter()
            .map(|doc| SearchCountBar {
                name: doc.doc_name.clone(),
                value: doc.statistics.search_count,
            })
            .collect();

        let hit_rates = documents
            .iter()
            .map(|doc| HitRateSlice {
                name: doc.doc_name.clone(),
                value: (doc.statistics.hit_rate * 1000.0).round() / 10.0,
            })
            .collect();

        tracing::debug!(documents = documents.len(), "statistics report built");
        Self { search_counts, hit_rates }
    }

    #[must_use]
    pub fn total_searches(&self) -> u64 {
        self.search_counts.iter().map(|bar| bar.value).sum()
    }

    /// Chart option objects for a web charting front-end, bar chart first.
    #[must_use]
    pub fn to_chart_options(&self) -> [Value; 2] {
        let names: Vec<&str> = self.search_counts.iter().map(|bar| bar.name.as_str()).collect();
        let counts: Vec<u64> = self.search_counts.iter().map(|bar| bar.value).collect();

        let bar = json!({
            "title": { "text": "Search count per document", "left": "center" },
            "tooltip": { "trigger": "axis" },
            "xAxis": {
                "type": "category",
                "data": names,
                "axisLabel": { "interval": 0, "rotate": 45 }
            },
            "yAxis": { "type": "value", "name": "Searches" },
            "series": [{ "data": counts, "type": "bar", "color": BAR_COLOR }],
            "grid": { "bottom": 100 }
        });

        let pie = json!({
            "title": { "text": "Hit rate per document", "left": "center" },
            "tooltip": { "trigger": "item" },
            "series": [{
                "type": "pie",
                "radius": "50%",
                "data": self.hit_rates,
                "label": { "formatter": "{b}: {c}%" }
            }]
        });

        [bar, pie]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocType;

    fn doc(id: &str, searches: u64, hit_rate: f64) -> Document {
        let mut doc = Document::new(id, format!("doc-{id}"), DocType::Pdf);
        doc.statistics.search_count = searches;
        doc.statistics.hit_rate = hit_rate;
        doc
    }

    #[test]
    fn series_follow_document_order() {
        let report = StatisticsReport::from_documents(&[doc("1", 10, 0.5), doc("2", 30, 0.123)]);
        let names: Vec<&str> = report.search_counts.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["doc-1", "doc-2"]);
        assert_eq!(report.total_searches(), 40);
        assert!((report.hit_rates[1].value - 12.3).abs() < 1e-9);
    }

    #[test]
    fn chart_options_carry_series() {
        let report = StatisticsReport::from_documents(&[doc("1", 7, 0.25)]);
        let [bar, pie] = report.to_chart_options();
        assert_eq!(bar["series"][0]["data"][0], 7);
        assert_eq!(bar["xAxis"]["data"][0], "doc-1");
        assert_eq!(pie["series"][0]["data"][0]["name"], "doc-1");
        assert_eq!(pie["series"][0]["data"][0]["value"], 25.0);
    }

    #[test]
    fn empty_library_yields_empty_series() {
        let report = StatisticsReport::from_documents(&[]);
        assert!(report.search_counts.is_empty());
        assert!(report.hit_rates.is_empty());
    }
}
