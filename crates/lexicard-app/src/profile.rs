use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexicard_config::Config;

/// Load the profile at `path`, or build the config from the environment when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No profile given, using environment and defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading profile from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open profile {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(config)
}
