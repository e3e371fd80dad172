use graphene_roi::report::ProjectionReport;
use graphene_roi::{project, ModelInputs};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Default output path
    let output_path = if args.len() > 1 {
        args[1].clone()
    } else {
        "public/roi_projection.json".to_string()
    };

    println!("Projecting default scenario...");
    let inputs = ModelInputs::default();
    let series = match project(&inputs) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("Projection failed: {}", e);
            std::process::exit(1);
        }
    };

    let report = ProjectionReport::new(inputs, series);

    println!("Exporting to JSON: {}", output_path);
    match report.save_to_json(&output_path) {
        Ok(()) => {
            println!("Successfully exported projection to {}", output_path);
            println!("Exported data contains:");
            println!("  - Years: {}", report.series.len());
            if let Some(summary) = &report.summary {
                println!("  - Final year ROI: {:.2}%", summary.roi_pct());
            }
        }
        Err(e) => {
            eprintln!("Failed to export projection: {}", e);
            std::process::exit(1);
        }
    }
}
