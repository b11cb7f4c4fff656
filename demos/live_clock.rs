use atmo_convection::layout::ConvectionLayout;
use atmo_convection::{AnimationClock, Frame};
use std::env;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the animation clock in real time and logs a summary every 30 ticks.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let seconds: u64 = match env::args().nth(1) {
        Some(raw) => raw.parse()?,
        None => 3,
    };

    let clock = AnimationClock::start(ConvectionLayout::default(), |frame: &Frame| {
        if frame.phase.degrees() % 30 == 0 {
            let rising = frame.particles.iter().filter(|p| p.rising).count();
            info!(
                phase = frame.phase.degrees(),
                rising,
                sinking = frame.particles.len() - rising,
                plate_offset = frame.plate_offset,
                "frame"
            );
        }
    });

    tokio::select! {
        _ = tokio::time::sleep(Duration::from_secs(seconds)) => {}
        _ = tokio::signal::ctrl_c() => info!("interrupted"),
    }

    let last = clock.stop().await;
    info!(phase = last.degrees(), "done");
    Ok(())
}
