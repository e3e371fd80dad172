use crate::inputs::ModelInputs;

// === Growth policy ===
pub const COAL_GROWTH_RATE: f64 = 0.15; // throughput, per year
pub const GRAPHENE_PRICE_GROWTH_RATE: f64 = 0.05;
pub const PRODUCTION_COST_GROWTH_RATE: f64 = 0.05; // per-kg cost, per year

// yield fractions are applied per tonne; this turns the result into kg
pub const KG_PER_TONNE: f64 = 1000.0;

// === Default scenario ===
pub const DEFAULT_INITIAL_COAL_T: f64 = 100.0;
pub const DEFAULT_GRAPHENE_PRICE_PER_KG: f64 = 4_176_400.0;
pub const DEFAULT_PRODUCTION_COST_PER_KG: f64 = 3_000_000.0;
pub const DEFAULT_COAL_PURITY_PCT: f64 = 50.0;
pub const DEFAULT_CONVERSION_YIELD_PCT: f64 = 10.0;
pub const DEFAULT_ENERGY_KWH_PER_TONNE: f64 = 1000.0;
pub const DEFAULT_ENERGY_COST_PER_KWH: f64 = 309.0;
pub const DEFAULT_FIXED_OPERATING_COST: f64 = 400_000_000.0;
pub const DEFAULT_PROJECTION_YEARS: u32 = 20;

pub static DEFAULT_SCENARIO: ModelInputs = ModelInputs {
    initial_coal: DEFAULT_INITIAL_COAL_T,
    initial_graphene_price: DEFAULT_GRAPHENE_PRICE_PER_KG,
    initial_production_cost: DEFAULT_PRODUCTION_COST_PER_KG,
    coal_purity_pct: DEFAULT_COAL_PURITY_PCT,
    conversion_yield_pct: DEFAULT_CONVERSION_YIELD_PCT,
    energy_per_tonne: DEFAULT_ENERGY_KWH_PER_TONNE,
    energy_unit_cost: DEFAULT_ENERGY_COST_PER_KWH,
    fixed_annual_operating_cost: DEFAULT_FIXED_OPERATING_COST,
    projection_years: DEFAULT_PROJECTION_YEARS,
};

// ===== Chart =====
pub const CHART_WIDTH_PX: u32 = 800;
pub const CHART_HEIGHT_PX: u32 = 500;
pub const CHART_MARGIN_PX: u32 = 20;
pub const CHART_MARKER_RADIUS_PX: i32 = 4;
pub const CHART_ROI_TICKS: u32 = 5;
pub const CHART_MAX_SIDE_PX: u32 = 8192;
pub const CHART_FONT_PX: f32 = 14.0;
pub const CHART_TITLE_FONT_PX: f32 = 18.0;
pub const CHART_LABEL_GAP_PX: i32 = 6;
pub const CHART_TITLE: &str = "Return on Investment (ROI) over time";
pub const CHART_X_LABEL: &str = "Year";
pub const CHART_Y_LABEL: &str = "ROI";
