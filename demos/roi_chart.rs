use graphene_roi::chart::RoiChart;
use graphene_roi::simulation::{Simulation, SimulationProps};
use graphene_roi::{InputField, RawInputs};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📈 Graphene ROI projection");
    println!("==========================");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let years = if args.len() > 1 { args[1].clone() } else { "20".to_string() };
    let output = "output/roi_chart.png";

    println!("📋 Configuration:");
    println!("  Years: {}", years);
    println!("  Chart: {}", output);
    println!();

    let raw = RawInputs::default().with(InputField::ProjectionYears, years);
    let props = SimulationProps::new(raw)
        .with_chart(RoiChart::new(1024, 640), output)
        .with_debug(true);

    let outcome = Simulation::new(props).run()?;

    println!();
    if let Some(summary) = outcome.summary {
        println!("{}", summary);
    }
    println!("✅ Chart written to {}", output);

    Ok(())
}
