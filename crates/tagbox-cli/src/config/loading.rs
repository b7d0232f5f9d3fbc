use crate::config::TagboxConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "tagbox.config.json";

const ENV_PREFIX: &str = "TAGBOX_";
const ENV_KEYS: [&str; 3] = ["include", "extensions", "max_fix_passes"];

impl TagboxConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI paths > environment variables > config file > defaults
    ///
    /// `config_path` and the default config file are resolved against `cwd`.
    pub fn load(cli_paths: &[PathBuf], config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                let path = crate::commands::utils::resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // TAGBOX_INCLUDE, TAGBOX_EXTENSIONS, TAGBOX_MAX_FIX_PASSES
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));

        // Positional paths replace `include` only when given
        if !cli_paths.is_empty() {
            figment = figment.merge(Serialized::default("include", cli_paths));
        }

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }
}
