//! graphene-roi CLI - year-by-year ROI projection for graphene made from coal.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use graphene_roi::chart::RoiChart;
use graphene_roi::constants::{CHART_HEIGHT_PX, CHART_MAX_SIDE_PX, CHART_WIDTH_PX};
use graphene_roi::simulation::{Simulation, SimulationProps};
use graphene_roi::{InputField, RawInputs};

/// Project coal throughput, graphene output, revenue, cost and ROI per year.
///
/// Numeric fields are taken as text so a typo is reported against the field
/// it was typed into.
#[derive(Parser)]
#[command(name = "graphene-roi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial coal processed (tonnes).
    #[arg(long, default_value = "100")]
    initial_coal: String,

    /// Initial graphene sale price ($/kg).
    #[arg(long, default_value = "4176400")]
    graphene_price: String,

    /// Initial graphene production cost ($/kg).
    #[arg(long, default_value = "3000000")]
    production_cost: String,

    /// Coal purity (%).
    #[arg(long, default_value = "50")]
    purity: String,

    /// Coal to graphene conversion yield (%).
    #[arg(long, default_value = "10")]
    conversion_yield: String,

    /// Energy consumed per tonne of coal (kWh).
    #[arg(long, default_value = "1000")]
    energy_per_tonne: String,

    /// Energy unit cost ($/kWh).
    #[arg(long, default_value = "309")]
    energy_cost: String,

    /// Fixed annual operating cost ($).
    #[arg(long, default_value = "400000000")]
    fixed_cost: String,

    /// Number of years to project (year 0 is always included).
    #[arg(short, long, default_value = "20")]
    years: String,

    /// Write the ROI line chart to this PNG file.
    #[arg(short, long)]
    chart: Option<PathBuf>,

    /// Chart width in pixels.
    #[arg(long, default_value_t = CHART_WIDTH_PX,
          value_parser = clap::value_parser!(u32).range(1..=CHART_MAX_SIDE_PX as i64))]
    width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = CHART_HEIGHT_PX,
          value_parser = clap::value_parser!(u32).range(1..=CHART_MAX_SIDE_PX as i64))]
    height: u32,

    /// Write inputs, every series and the summary to this JSON file.
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Do not print the final-year summary.
    #[arg(short, long)]
    quiet: bool,

    /// Print progress messages.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn raw_inputs(&self) -> RawInputs {
        RawInputs::default()
            .with(InputField::InitialCoal, &self.initial_coal)
            .with(InputField::GraphenePrice, &self.graphene_price)
            .with(InputField::ProductionCost, &self.production_cost)
            .with(InputField::CoalPurity, &self.purity)
            .with(InputField::ConversionYield, &self.conversion_yield)
            .with(InputField::EnergyPerTonne, &self.energy_per_tonne)
            .with(InputField::EnergyUnitCost, &self.energy_cost)
            .with(InputField::FixedOperatingCost, &self.fixed_cost)
            .with(InputField::ProjectionYears, &self.years)
    }

    fn into_props(self) -> SimulationProps {
        let mut props = SimulationProps::new(self.raw_inputs()).with_debug(self.debug);
        if let Some(path) = self.chart {
            props = props.with_chart(RoiChart::new(self.width, self.height), path);
        }
        if let Some(path) = self.json {
            props = props.with_json(path);
        }
        props
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match Simulation::new(cli.into_props()).run() {
        Ok(outcome) => {
            if !quiet {
                if let Some(summary) = outcome.summary {
                    println!("{}", summary);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_input_error() => {
            eprintln!("Input error: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
