use crate::constants::{
    COAL_GROWTH_RATE, GRAPHENE_PRICE_GROWTH_RATE, KG_PER_TONNE, PRODUCTION_COST_GROWTH_RATE,
};
use crate::error::RoiError;
use crate::growth::{compound, pct_to_fraction};
use crate::inputs::ModelInputs;
use serde::{Deserialize, Serialize};

/// Per-year results, every series indexed by year `0..=projection_years`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProjectionSeries {
    pub years: Vec<u32>,
    /// tonnes
    pub coal_processed: Vec<f64>,
    /// currency per kg
    pub graphene_price: Vec<f64>,
    /// currency per kg
    pub production_cost_per_kg: Vec<f64>,
    /// kg
    pub graphene_produced: Vec<f64>,
    pub revenue: Vec<f64>,
    pub energy_cost: Vec<f64>,
    pub production_cost: Vec<f64>,
    pub roi: Vec<f64>,
}

/// One year of the projection; `roi` is checked before it is pushed.
struct YearRow {
    coal_processed: f64,
    graphene_price: f64,
    production_cost_per_kg: f64,
    graphene_produced: f64,
    revenue: f64,
    energy_cost: f64,
    production_cost: f64,
}

impl YearRow {
    fn compute(inputs: &ModelInputs, year: u32) -> Self {
        let coal_processed = compound(inputs.initial_coal, COAL_GROWTH_RATE, year);
        let graphene_price = compound(inputs.initial_graphene_price, GRAPHENE_PRICE_GROWTH_RATE, year);
        let production_cost_per_kg =
            compound(inputs.initial_production_cost, PRODUCTION_COST_GROWTH_RATE, year);

        let graphene_produced = coal_processed
            * pct_to_fraction(inputs.coal_purity_pct)
            * pct_to_fraction(inputs.conversion_yield_pct)
            * KG_PER_TONNE;

        let revenue = graphene_produced * graphene_price;
        let energy_cost = coal_processed * inputs.energy_per_tonne * inputs.energy_unit_cost;
        let production_cost = graphene_produced * production_cost_per_kg
            + energy_cost
            + inputs.fixed_annual_operating_cost;

        Self {
            coal_processed,
            graphene_price,
            production_cost_per_kg,
            graphene_produced,
            revenue,
            energy_cost,
            production_cost,
        }
    }

    fn roi(&self, year: u32) -> Result<f64, RoiError> {
        if self.production_cost == 0.0 {
            return Err(RoiError::DivisionByZero { year });
        }
        let roi = (self.revenue - self.production_cost) / self.production_cost;
        if !roi.is_finite() {
            return Err(RoiError::NonFiniteRoi { year });
        }
        Ok(roi)
    }
}

impl ProjectionSeries {
    fn push(&mut self, year: u32, row: YearRow, roi: f64) {
        self.years.push(year);
        self.coal_processed.push(row.coal_processed);
        self.graphene_price.push(row.graphene_price);
        self.production_cost_per_kg.push(row.production_cost_per_kg);
        self.graphene_produced.push(row.graphene_produced);
        self.revenue.push(row.revenue);
        self.energy_cost.push(row.energy_cost);
        self.production_cost.push(row.production_cost);
        self.roi.push(roi);
    }

    /// Number of projected years, year 0 included.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn final_year(&self) -> Option<u32> {
        self.years.last().copied()
    }
}

/// Projects coal throughput, graphene output, revenue, cost and ROI for every
/// year from 0 through `inputs.projection_years`.
///
/// Fails with [`RoiError::DivisionByZero`] on the first year whose total
/// production cost is zero, and with [`RoiError::NonFiniteRoi`] if the ROI
/// would otherwise be NaN or infinite.
pub fn project(inputs: &ModelInputs) -> Result<ProjectionSeries, RoiError> {
    // grown per year; a huge year count ends in NonFiniteRoi, not a huge allocation
    let mut series = ProjectionSeries::default();

    for year in 0..=inputs.projection_years {
        let row = YearRow::compute(inputs, year);
        let roi = row.roi(year)?;
        series.push(year, row, roi);
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_zero_applies_no_growth() {
        let inputs = ModelInputs::default().with_years(0);
        let series = project(&inputs).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.coal_processed[0], inputs.initial_coal);
        assert_eq!(series.graphene_price[0], inputs.initial_graphene_price);
        assert_eq!(series.production_cost_per_kg[0], inputs.initial_production_cost);
        assert_eq!(series.final_year(), Some(0));
    }

    #[test]
    fn default_year_zero_values() {
        let series = project(&ModelInputs::default().with_years(0)).unwrap();

        // 100 t * 0.5 * 0.1 * 1000
        assert!((series.graphene_produced[0] - 5000.0).abs() < 1e-9);
        assert!((series.revenue[0] - 20_882_000_000.0).abs() < 1e-3);
        assert!((series.energy_cost[0] - 30_900_000.0).abs() < 1e-6);
        // 5000 * 3e6 + 30.9e6 + 400e6
        assert!((series.production_cost[0] - 15_430_900_000.0).abs() < 1e-3);
        let expected_roi = (20_882_000_000.0 - 15_430_900_000.0) / 15_430_900_000.0;
        assert!((series.roi[0] - expected_roi).abs() < 1e-12);
    }

    #[test]
    fn zero_cost_inputs_are_a_division_by_zero() {
        let inputs = ModelInputs::default()
            .with_conversion(0.0, 10.0)
            .with_energy(0.0, 309.0)
            .with_fixed_operating_cost(0.0)
            .with_years(4);
        match project(&inputs) {
            Err(RoiError::DivisionByZero { year }) => assert_eq!(year, 0),
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn huge_year_count_stops_at_overflow() {
        let inputs = ModelInputs::default().with_years(u32::MAX);
        match project(&inputs) {
            Err(RoiError::NonFiniteRoi { year }) => assert!(year > 0 && year < 10_000),
            other => panic!("expected NonFiniteRoi, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn non_finite_roi_is_reported() {
        let inputs = ModelInputs::default().with_prices(f64::INFINITY, 3_000_000.0);
        match project(&inputs) {
            Err(RoiError::NonFiniteRoi { year }) => assert_eq!(year, 0),
            other => panic!("expected NonFiniteRoi, got {:?}", other),
        }
    }
}
