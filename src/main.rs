use std::env;
use std::fs;

use strand::report::{ColoristImages, HairstylistImages, VisagismImages};
use strand::report::{ColoristReport, HairstylistReport, VisagismReport};
use strand::{PipelineError, ReportPipeline};

/// A simple CLI to render a consultation report JSON into a PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Renders a consultation report payload into a paginated PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <hairstylist|colorist|visagism> <path/to/report.json> [output.pdf]",
            args[0]
        );
        std::process::exit(1);
    }

    let kind = args[1].as_str();
    let data = fs::read_to_string(&args[2])?;
    let value: serde_json::Value = serde_json::from_str(&data)?;

    // The mark asset ships with the application; the CLI renders without
    // one.
    let pipeline = ReportPipeline::new(None);

    let exported = match kind {
        "hairstylist" => {
            let report = HairstylistReport::from_json(value)?;
            pipeline.export_hairstylist(&report, HairstylistImages::default())?
        }
        "colorist" => {
            let report = ColoristReport::from_json(value)?;
            pipeline.export_colorist(&report, ColoristImages::default())?
        }
        "visagism" => {
            let report = VisagismReport::from_json(value)?;
            pipeline.export_visagism(&report, VisagismImages::default())?
        }
        other => {
            return Err(PipelineError::Other(format!(
                "unknown report kind '{other}'"
            )));
        }
    };

    let output_path = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| exported.filename.clone());
    fs::write(&output_path, &exported.bytes)?;
    println!(
        "Wrote {} ({} bytes)",
        output_path,
        exported.bytes.len()
    );
    Ok(())
}
