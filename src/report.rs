use crate::error::RoiError;
use crate::inputs::ModelInputs;
use crate::projection::ProjectionSeries;
use crate::summary::FinalYearSummary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything one run produced, in a form that can be dumped as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectionReport {
    pub inputs: ModelInputs,
    pub series: ProjectionSeries,
    pub summary: Option<FinalYearSummary>,
}

impl ProjectionReport {
    pub fn new(inputs: ModelInputs, series: ProjectionSeries) -> Self {
        let summary = FinalYearSummary::from_series(&series);
        Self {
            inputs,
            series,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String, RoiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, output_path: P) -> Result<(), RoiError> {
        if let Some(parent) = output_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn json_carries_inputs_series_and_summary() {
        let inputs = ModelInputs::default().with_years(2);
        let report = ProjectionReport::new(inputs, project(&inputs).unwrap());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["inputs"]["projection_years"], 2);
        assert_eq!(value["series"]["roi"].as_array().unwrap().len(), 3);
        assert_eq!(value["summary"]["year"], 2);
    }

    #[test]
    fn saved_json_reads_back() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("out").join("report.json");
        let inputs = ModelInputs::default().with_years(1);
        let report = ProjectionReport::new(inputs, project(&inputs).unwrap());
        report.save_to_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let loaded: ProjectionReport = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded.inputs, report.inputs);
        assert_eq!(loaded.series.years, vec![0, 1]);
    }
}
