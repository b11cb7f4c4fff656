use atmo_convection::{DiagramSnapshot, Frame, Phase};
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    // Default output path
    let output_path = if args.len() > 1 {
        args[1].clone()
    } else {
        "public/convection_frame.json".to_string()
    };
    let phase = match args.get(2) {
        Some(raw) => Phase::new(raw.parse()?),
        None => Phase::ZERO,
    };

    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let frame = Frame::generate(phase);
    DiagramSnapshot::new(&frame).save_to_json(&output_path)?;

    info!(
        phase = phase.degrees(),
        flow_indicators = frame.flow_indicators.len(),
        particles = frame.particles.len(),
        plate_offset = frame.plate_offset,
        "exported frame to {}",
        output_path
    );
    Ok(())
}
