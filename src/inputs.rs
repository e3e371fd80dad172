use crate::constants::DEFAULT_SCENARIO;
use crate::error::RoiError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The nine scalar parameters of one projection request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// tonnes of coal processed in year 0
    pub initial_coal: f64,
    /// sale price per kg in year 0
    pub initial_graphene_price: f64,
    /// production cost per kg in year 0
    pub initial_production_cost: f64,
    pub coal_purity_pct: f64,
    pub conversion_yield_pct: f64,
    /// kWh per tonne of coal
    pub energy_per_tonne: f64,
    /// currency per kWh
    pub energy_unit_cost: f64,
    pub fixed_annual_operating_cost: f64,
    pub projection_years: u32,
}

impl Default for ModelInputs {
    fn default() -> Self {
        DEFAULT_SCENARIO
    }
}

impl ModelInputs {
    pub fn with_initial_coal(mut self, tonnes: f64) -> Self {
        self.initial_coal = tonnes;
        self
    }

    pub fn with_prices(mut self, graphene_price: f64, production_cost: f64) -> Self {
        self.initial_graphene_price = graphene_price;
        self.initial_production_cost = production_cost;
        self
    }

    pub fn with_conversion(mut self, purity_pct: f64, yield_pct: f64) -> Self {
        self.coal_purity_pct = purity_pct;
        self.conversion_yield_pct = yield_pct;
        self
    }

    pub fn with_energy(mut self, kwh_per_tonne: f64, cost_per_kwh: f64) -> Self {
        self.energy_per_tonne = kwh_per_tonne;
        self.energy_unit_cost = cost_per_kwh;
        self
    }

    pub fn with_fixed_operating_cost(mut self, cost: f64) -> Self {
        self.fixed_annual_operating_cost = cost;
        self
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.projection_years = years;
        self
    }
}

/// One user-editable input field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    InitialCoal,
    GraphenePrice,
    ProductionCost,
    CoalPurity,
    ConversionYield,
    EnergyPerTonne,
    EnergyUnitCost,
    FixedOperatingCost,
    ProjectionYears,
}

impl InputField {
    pub const ALL: [InputField; 9] = [
        InputField::InitialCoal,
        InputField::GraphenePrice,
        InputField::ProductionCost,
        InputField::CoalPurity,
        InputField::ConversionYield,
        InputField::EnergyPerTonne,
        InputField::EnergyUnitCost,
        InputField::FixedOperatingCost,
        InputField::ProjectionYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::InitialCoal => "initial coal processed (tonnes)",
            InputField::GraphenePrice => "initial graphene sale price ($/kg)",
            InputField::ProductionCost => "initial graphene production cost ($/kg)",
            InputField::CoalPurity => "coal purity (%)",
            InputField::ConversionYield => "coal to graphene conversion yield (%)",
            InputField::EnergyPerTonne => "energy consumed per tonne of coal (kWh)",
            InputField::EnergyUnitCost => "energy unit cost ($/kWh)",
            InputField::FixedOperatingCost => "fixed annual operating cost ($)",
            InputField::ProjectionYears => "projection years",
        }
    }

    pub fn default_text(self) -> String {
        let d = DEFAULT_SCENARIO;
        match self {
            InputField::InitialCoal => d.initial_coal.to_string(),
            InputField::GraphenePrice => d.initial_graphene_price.to_string(),
            InputField::ProductionCost => d.initial_production_cost.to_string(),
            InputField::CoalPurity => d.coal_purity_pct.to_string(),
            InputField::ConversionYield => d.conversion_yield_pct.to_string(),
            InputField::EnergyPerTonne => d.energy_per_tonne.to_string(),
            InputField::EnergyUnitCost => d.energy_unit_cost.to_string(),
            InputField::FixedOperatingCost => d.fixed_annual_operating_cost.to_string(),
            InputField::ProjectionYears => d.projection_years.to_string(),
        }
    }
}

/// Field text exactly as entered, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    values: [String; 9],
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            values: InputField::ALL.map(InputField::default_text),
        }
    }
}

impl RawInputs {
    pub fn set(&mut self, field: InputField, text: impl Into<String>) {
        self.values[field as usize] = text.into();
    }

    pub fn with(mut self, field: InputField, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn get(&self, field: InputField) -> &str {
        &self.values[field as usize]
    }

    /// Parses every field, failing on the first one that is not a number.
    pub fn parse(&self) -> Result<ModelInputs, RoiError> {
        use InputField::*;
        Ok(ModelInputs {
            initial_coal: self.parse_field(InitialCoal)?,
            initial_graphene_price: self.parse_field(GraphenePrice)?,
            initial_production_cost: self.parse_field(ProductionCost)?,
            coal_purity_pct: self.parse_field(CoalPurity)?,
            conversion_yield_pct: self.parse_field(ConversionYield)?,
            energy_per_tonne: self.parse_field(EnergyPerTonne)?,
            energy_unit_cost: self.parse_field(EnergyUnitCost)?,
            fixed_annual_operating_cost: self.parse_field(FixedOperatingCost)?,
            projection_years: self.parse_field(ProjectionYears)?,
        })
    }

    fn parse_field<T: FromStr>(&self, field: InputField) -> Result<T, RoiError> {
        let text = self.get(field);
        text.trim().parse::<T>().map_err(|_| RoiError::InputParse {
            field: field.label(),
            value: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_default_inputs() {
        let parsed = RawInputs::default().parse().expect("defaults should parse");
        assert_eq!(parsed, ModelInputs::default());
        assert_eq!(parsed.initial_graphene_price, 4_176_400.0);
        assert_eq!(parsed.projection_years, 20);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let raw = RawInputs::default()
            .with(InputField::CoalPurity, "  75 ")
            .with(InputField::ProjectionYears, "5\n");
        let parsed = raw.parse().unwrap();
        assert_eq!(parsed.coal_purity_pct, 75.0);
        assert_eq!(parsed.projection_years, 5);
    }

    #[test]
    fn non_numeric_text_names_the_field() {
        let raw = RawInputs::default().with(InputField::EnergyUnitCost, "cheap");
        match raw.parse() {
            Err(RoiError::InputParse { field, value }) => {
                assert_eq!(field, InputField::EnergyUnitCost.label());
                assert_eq!(value, "cheap");
            }
            other => panic!("expected InputParse, got {:?}", other),
        }
    }

    #[test]
    fn fractional_year_count_is_rejected() {
        let raw = RawInputs::default().with(InputField::ProjectionYears, "2.5");
        let err = raw.parse().unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn first_bad_field_wins() {
        let raw = RawInputs::default()
            .with(InputField::GraphenePrice, "")
            .with(InputField::ProjectionYears, "x");
        match raw.parse() {
            Err(RoiError::InputParse { field, .. }) => {
                assert_eq!(field, InputField::GraphenePrice.label())
            }
            other => panic!("expected InputParse, got {:?}", other),
        }
    }

    #[test]
    fn builder_overrides_fields() {
        let inputs = ModelInputs::default()
            .with_initial_coal(10.0)
            .with_conversion(0.0, 10.0)
            .with_years(3);
        assert_eq!(inputs.initial_coal, 10.0);
        assert_eq!(inputs.coal_purity_pct, 0.0);
        assert_eq!(inputs.projection_years, 3);
        assert_eq!(inputs.energy_unit_cost, 309.0);
    }
}
