use std::io;
use std::path::PathBuf;

use anyhow::Result;
use argh::FromArgs;
use shoji::server::{self, ServerState};
use shoji::settings;
use tracing_subscriber::EnvFilter;

/// Window placement engine. Reads placement requests as JSON lines on stdin
/// and answers each with one JSON line on stdout.
#[derive(FromArgs)]
struct Args {
    /// settings file (default: <config dir>/shoji/settings.json)
    #[argh(option)]
    config: Option<PathBuf>,

    /// step for larger/smaller
    #[argh(option)]
    size_step: Option<f64>,

    /// step for the move actions
    #[argh(option)]
    move_step: Option<f64>,

    /// share of the usable width and height taken by almost-maximize
    #[argh(option)]
    almost_maximize: Option<f64>,

    /// uniform gap between each display edge and placed windows
    #[argh(option)]
    edge_gap: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Args = argh::from_env();

    let mut settings = settings::load(args.config.as_deref())?;
    if let Some(step) = args.size_step {
        settings.size_step = step;
    }
    if let Some(step) = args.move_step {
        settings.move_step = step;
    }
    if let Some(fraction) = args.almost_maximize {
        settings.almost_maximize_width = fraction;
        settings.almost_maximize_height = fraction;
    }
    if let Some(gap) = args.edge_gap {
        settings.screen_edge_gaps = shoji_ipc::EdgeInsets::uniform(gap);
    }
    settings::validate(&settings)?;

    tracing::info!("shoji starting");
    tracing::debug!("Settings: {:?}", settings);

    let mut state = ServerState::new(settings);
    let stdin = io::stdin();
    server::run(&mut state, stdin.lock(), io::stdout().lock())
}
