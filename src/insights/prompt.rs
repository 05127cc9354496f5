//! Condensed statistics and the instruction sent to the model.

use serde::{Deserialize, Serialize};

use crate::format;
use crate::models::{Quote, ServiceCount};
use crate::queries::{ChartQuery, MetricsQuery, TimeRange};

/// Aggregate-only view of the filtered quotes.
///
/// Deliberately carries no per-record fields, so nothing identifying a
/// customer can reach the external service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub range: TimeRange,
    pub total_quotes: usize,
    pub total_revenue: f64,
    pub average_quote_value: f64,
    pub service_counts: Vec<ServiceCount>,
}

impl InsightSummary {
    pub fn from_quotes(quotes: &[Quote], range: TimeRange) -> Self {
        let metrics = MetricsQuery::new(quotes).compute();
        Self {
            range,
            total_quotes: metrics.total_quotes,
            total_revenue: metrics.total_revenue,
            average_quote_value: metrics.average_quote_value,
            service_counts: ChartQuery::new(quotes).count_by_service(),
        }
    }

    /// Per-service counts as a compact JSON object, e.g. `{"Repair":4}`.
    fn service_breakdown(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .service_counts
            .iter()
            .map(|c| (c.service_type.to_string(), serde_json::Value::from(c.count)))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    pub fn to_prompt(&self) -> String {
        format!(
            "You are an expert business analyst for a Roofing Company using an AI Quotebot.\n\
             Analyze the following performance metrics for the {range} and provide 3 brief, \
             actionable insights or observations.\n\
             Focus on revenue opportunities, conversion trends, or operational advice.\n\
             \n\
             Data Summary:\n\
             - Total Quotes Generated: {count}\n\
             - Total Potential Revenue: {revenue}\n\
             - Average Quote Value: {average}\n\
             - Breakdown by Service: {breakdown}\n\
             \n\
             Format the output as a simple HTML unordered list (<ul><li>...</li></ul>) \
             without markdown code blocks. Keep it professional and motivating.\n",
            range = self.range.label().to_lowercase(),
            count = self.total_quotes,
            revenue = format::currency(self.total_revenue),
            average = format::currency(self.average_quote_value.floor()),
            breakdown = self.service_breakdown(),
        )
    }
}
