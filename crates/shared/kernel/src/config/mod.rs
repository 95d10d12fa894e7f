use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use techdeck_domain::config::DeckConfig;
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "techdeck";

/// Prefix of environment overrides, e.g. `TECHDECK__LAYOUT__COLS=4`.
pub const ENV_PREFIX: &str = "TECHDECK";

/// Loads a configuration structure from a file with environment overrides on top.
///
/// 1. **Base File**: `path` (any format the `config` crate understands, extension optional).
///    Defaults to `techdeck` in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `TECHDECK__`, nested keys separated
///    by double underscores (`TECHDECK__LAYOUT__IMAGE_BASE` maps to `layout.image_base`).
///    Numeric and boolean values are parsed, so `TECHDECK__LAYOUT__COLS=4` sets a number.
///
/// # Errors
/// Returns [`KernelError::Config`] if the file is missing, an override is malformed, or the
/// merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use techdeck_kernel::config::load_config;
/// use techdeck_domain::config::DeckConfig;
///
/// let cfg: DeckConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// [`load_config`] reading overrides from `vars` instead of the process environment.
///
/// Keys keep their environment spelling (`TECHDECK__LAYOUT__COLS`). `None` reads the real
/// environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let environment =
        Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true).source(vars);

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// [`load_config`] specialised to [`DeckConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_deck_config(path: Option<impl AsRef<Path>>) -> Result<DeckConfig, KernelError> {
    load_config(path)
}
