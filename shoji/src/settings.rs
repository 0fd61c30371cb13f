use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use shoji_ipc::Settings;

const SETTINGS_FILE: &str = "settings.json";

/// `$XDG_CONFIG_HOME/shoji/settings.json` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shoji").join(SETTINGS_FILE))
}

/// Loads settings from `path`, or from the default location when `path` is
/// `None`. A missing default file means built-in defaults; a missing
/// explicit file is an error.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_path() {
            Some(path) => (path, false),
            None => return Ok(Settings::default()),
        },
    };

    if !explicit && !path.exists() {
        tracing::debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings = parse(&contents)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    tracing::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn parse(json: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(json).context("Malformed settings JSON")?;
    validate(&settings)?;
    Ok(settings)
}

pub fn validate(settings: &Settings) -> Result<()> {
    ensure!(
        settings.size_step.is_finite() && settings.size_step >= 0.0,
        "size_step must be a non-negative number, got {}",
        settings.size_step
    );
    ensure!(
        settings.move_step.is_finite() && settings.move_step >= 0.0,
        "move_step must be a non-negative number, got {}",
        settings.move_step
    );

    let minimum = settings.minimum_size;
    ensure!(
        minimum.width.is_finite()
            && minimum.height.is_finite()
            && minimum.width >= 0.0
            && minimum.height >= 0.0,
        "minimum_size must be non-negative, got {}x{}",
        minimum.width,
        minimum.height
    );

    for (name, value) in [
        ("almost_maximize_width", settings.almost_maximize_width),
        ("almost_maximize_height", settings.almost_maximize_height),
    ] {
        ensure!(
            value > 0.0 && value <= 1.0,
            "{} must be in (0, 1], got {}",
            name,
            value
        );
    }

    let gaps = settings.screen_edge_gaps;
    ensure!(
        [gaps.top, gaps.left, gaps.bottom, gaps.right]
            .iter()
            .all(|g| g.is_finite() && *g >= 0.0),
        "screen_edge_gaps must be non-negative"
    );

    Ok(())
}
