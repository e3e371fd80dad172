use crate::chart::RoiChart;
use crate::error::RoiError;
use crate::inputs::{ModelInputs, RawInputs};
use crate::projection::{project, ProjectionSeries};
use crate::report::ProjectionReport;
use crate::summary::FinalYearSummary;
use std::path::PathBuf;

/// Configuration for one simulation request
pub struct SimulationProps {
    pub raw_inputs: RawInputs,
    pub chart: RoiChart,
    pub chart_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub debug: bool,
}

impl SimulationProps {
    pub fn new(raw_inputs: RawInputs) -> Self {
        Self {
            raw_inputs,
            chart: RoiChart::default(),
            chart_path: None,
            json_path: None,
            debug: false,
        }
    }

    pub fn with_chart(mut self, chart: RoiChart, path: impl Into<PathBuf>) -> Self {
        self.chart = chart;
        self.chart_path = Some(path.into());
        self
    }

    pub fn with_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// What the presentation layer renders after a successful run.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub inputs: ModelInputs,
    pub series: ProjectionSeries,
    /// `None` only when the series is empty
    pub summary: Option<FinalYearSummary>,
}

/// One request/response cycle: parse, project, write outputs.
pub struct Simulation {
    props: SimulationProps,
}

impl Simulation {
    pub fn new(props: SimulationProps) -> Self {
        Self { props }
    }

    fn debug_print(&self, message: &str) {
        if self.props.debug {
            println!("{}", message);
        }
    }

    /// Nothing is written unless parsing and projection both succeed.
    pub fn run(&self) -> Result<SimulationOutcome, RoiError> {
        let start = std::time::Instant::now();

        let inputs = self.props.raw_inputs.parse()?;
        self.debug_print(&format!("parsed inputs: {:?}", inputs));

        let series = project(&inputs)?;
        self.debug_print(&format!(
            "projected {} years in {:.3}ms",
            series.len(),
            start.elapsed().as_secs_f64() * 1000.0
        ));

        let summary = FinalYearSummary::from_series(&series);

        if let Some(path) = &self.props.chart_path {
            self.debug_print(&format!("writing ROI chart to {}", path.display()));
            self.props.chart.save_png(&series.roi, path)?;
        }

        if let Some(path) = &self.props.json_path {
            self.debug_print(&format!("writing JSON report to {}", path.display()));
            ProjectionReport::new(inputs, series.clone()).save_to_json(path)?;
        }

        Ok(SimulationOutcome {
            inputs,
            series,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::InputField;

    #[test]
    fn default_run_summarises_final_year() {
        let outcome = Simulation::new(SimulationProps::new(RawInputs::default()))
            .run()
            .unwrap();
        let summary = outcome.summary.expect("summary for a non-empty series");
        assert_eq!(summary.year, 20);
        assert_eq!(outcome.series.len(), 21);
        assert_eq!(summary.roi, outcome.series.roi[20]);
    }

    #[test]
    fn parse_error_writes_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let chart_path = dir.path().join("roi.png");
        let json_path = dir.path().join("roi.json");
        let props = SimulationProps::new(
            RawInputs::default().with(InputField::InitialCoal, "lots"),
        )
        .with_chart(RoiChart::new(100, 80), &chart_path)
        .with_json(&json_path);

        let err = Simulation::new(props).run().unwrap_err();
        assert!(err.is_input_error());
        assert!(!chart_path.exists());
        assert!(!json_path.exists());
    }

    #[test]
    fn writes_chart_and_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let chart_path = dir.path().join("roi.png");
        let json_path = dir.path().join("roi.json");
        let props = SimulationProps::new(
            RawInputs::default().with(InputField::ProjectionYears, "3"),
        )
        .with_chart(RoiChart::new(160, 100), &chart_path)
        .with_json(&json_path)
        .with_debug(true);

        let outcome = Simulation::new(props).run().unwrap();
        assert_eq!(outcome.series.len(), 4);
        assert!(chart_path.exists());
        assert!(json_path.exists());
    }
}
