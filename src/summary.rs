use crate::helpers::format_thousands;
use crate::projection::ProjectionSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline figures for the last projected year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FinalYearSummary {
    pub year: u32,
    pub coal_processed: f64,
    pub graphene_produced: f64,
    pub revenue: f64,
    pub production_cost: f64,
    pub roi: f64,
}

impl FinalYearSummary {
    /// `None` only for an empty series, which `project` never returns.
    pub fn from_series(series: &ProjectionSeries) -> Option<Self> {
        let last = series.len().checked_sub(1)?;
        Some(Self {
            year: series.years[last],
            coal_processed: series.coal_processed[last],
            graphene_produced: series.graphene_produced[last],
            revenue: series.revenue[last],
            production_cost: series.production_cost[last],
            roi: series.roi[last],
        })
    }

    pub fn roi_pct(&self) -> f64 {
        self.roi * 100.0
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Year {}:", self.year),
            format!("Coal processed: {:.2} tonnes", self.coal_processed),
            format!("Graphene produced: {:.2} kg", self.graphene_produced),
            format!("Revenue: ${}", format_thousands(self.revenue)),
            format!("Production cost: ${}", format_thousands(self.production_cost)),
            format!("ROI: {:.2} ({:.2}%)", self.roi, self.roi_pct()),
        ]
    }
}

impl fmt::Display for FinalYearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(revenue: f64, production_cost: f64) -> FinalYearSummary {
        FinalYearSummary {
            year: 7,
            coal_processed: 266.0019,
            graphene_produced: 13300.09,
            revenue,
            production_cost,
            roi: (revenue - production_cost) / production_cost,
        }
    }

    #[test]
    fn renders_six_lines() {
        let lines = summary(3_000_000.0, 2_000_000.0).lines();
        assert_eq!(
            lines,
            vec![
                "Year 7:",
                "Coal processed: 266.00 tonnes",
                "Graphene produced: 13300.09 kg",
                "Revenue: $3,000,000.00",
                "Production cost: $2,000,000.00",
                "ROI: 0.50 (50.00%)",
            ]
        );
    }

    #[test]
    fn losses_render_negative() {
        let s = summary(0.0, 1_250.5);
        assert_eq!(s.lines()[3], "Revenue: $0.00");
        assert_eq!(s.lines()[5], "ROI: -1.00 (-100.00%)");
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(FinalYearSummary::from_series(&ProjectionSeries::default()).is_none());
    }

    #[test]
    fn display_joins_lines() {
        let text = summary(2.0, 1.0).to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("Year 7:\n"));
    }
}
