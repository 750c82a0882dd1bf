use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sovereign_app::desk::BriefingDesk;
use sovereign_app::frame_loop::{spawn_frame_loop, LoopConfig, TraceSink};
use sovereign_core::briefing::BriefingRecord;
use sovereign_field::engine::FieldConfig;
use sovereign_field::render::render_svg;
use sovereign_intel::{BriefingRequester, IntelConfig};

/// Run the vector field and request one intelligence briefing.
#[derive(Debug, Parser)]
#[command(name = "sovereign", version)]
struct Args {
    /// Vector to brief on.
    #[arg(long, default_value = "LIVE-FEED-01")]
    vector_id: String,

    /// Vector category passed to the analyst.
    #[arg(long, default_value = "kinetic")]
    context: String,

    /// Field RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Keep animating this long after the briefing arrives.
    #[arg(long, default_value_t = 500)]
    linger_ms: u64,

    /// Write the final frame as SVG to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut frame_loop = spawn_frame_loop(
        LoopConfig {
            field: FieldConfig {
                seed: args.seed,
                ..Default::default()
            },
            ..Default::default()
        },
        TraceSink::default(),
    )?;

    let requester = BriefingRequester::from_config(IntelConfig::from_env())
        .context("Invalid intelligence service configuration")?;
    let desk = BriefingDesk::with_briefing(BriefingRecord::standing_overview(Utc::now()));

    info!(vector_id = %args.vector_id, context = %args.context, "Requesting briefing");
    desk.request(&requester, &args.vector_id, &args.context).await;

    let view = desk.view();
    println!("{}", serde_json::to_string_pretty(&view.briefing)?);

    tokio::time::sleep(Duration::from_millis(args.linger_ms)).await;
    frame_loop.stop();

    if let Some(path) = args.svg {
        let snapshot = frame_loop
            .latest_snapshot()
            .context("Frame loop produced no frames")?;
        std::fs::write(&path, render_svg(&snapshot))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), frame = snapshot.clock.frame, "Final frame written");
    }

    Ok(())
}
