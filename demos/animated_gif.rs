use atmo_convection::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use atmo_convection::gif_exporter::GifExporter;
use atmo_convection::png_exporter::PngExporter;
use atmo_convection::Phase;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let output_path = args.get(1).cloned().unwrap_or_else(|| "convection.gif".to_string());
    let step: u16 = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 3,
    };

    let exporter = GifExporter::new(CANVAS_WIDTH as u16, CANVAS_HEIGHT as u16)?;
    let frames = exporter.export_cycle(step, &output_path)?;
    println!("Animated GIF created: {} ({} frames)", output_path, frames);

    // still of the widest ridge opening alongside the animation
    let still = format!("{}.png", output_path.trim_end_matches(".gif"));
    PngExporter::new(CANVAS_WIDTH, CANVAS_HEIGHT)?.export_frame(Phase::new(90), &still)?;
    println!("Still frame created: {}", still);
    Ok(())
}
