//! Configure command handler for saving endpoint, model and key.

use anyhow::Result;
use tracing::warn;

use crate::config::{Config, ConfigStore, ConfigUpdate};
use crate::error::TzhError;
use crate::status;
use crate::ui::Style;

/// Runs `tzh c`: merges the given flags onto the saved config and saves it.
pub fn run_configure(update: ConfigUpdate) -> Result<()> {
    let store = ConfigStore::new()?;
    let changed = Changed::from(&update);
    let config = apply_update(&store, update)?;

    if let Some(endpoint) = changed.endpoint.then_some(&config.endpoint) {
        status!("{} {}", Style::label("Endpoint set to:"), Style::value(endpoint));
    }
    if let Some(model) = changed.model.then_some(&config.model) {
        status!("{} {}", Style::label("Model set to:"), Style::value(model));
    }
    if changed.api_key {
        status!("{}", Style::label("API key updated"));
    }
    status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(store.config_path().display())
    );

    Ok(())
}

/// Merges `update` onto whatever `store` holds and writes the result.
///
/// An unreadable existing file is replaced, since `tzh c` is how users
/// repair it.
pub fn apply_update(store: &ConfigStore, update: ConfigUpdate) -> Result<Config, TzhError> {
    if update.is_empty() {
        return Err(TzhError::Usage(
            "Nothing to configure.\n\n\
             Usage: tzh c --endpoint <url> --model <name> --api-key <key>"
                .to_string(),
        ));
    }

    let base = match store.load_optional() {
        Ok(base) => base,
        Err(e @ TzhError::ConfigInvalid { .. }) => {
            warn!(error = %e, "replacing unreadable config");
            None
        }
        Err(e) => return Err(e),
    };

    let config = update.apply(base)?;
    store.save(&config)?;
    Ok(config)
}

struct Changed {
    endpoint: bool,
    model: bool,
    api_key: bool,
}

impl From<&ConfigUpdate> for Changed {
    fn from(update: &ConfigUpdate) -> Self {
        Self {
            endpoint: update.endpoint.is_some(),
            model: update.model.is_some(),
            api_key: update.api_key.is_some(),
        }
    }
}
