use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub use config::FileFormat;

/// Prefix for environment overrides (`PAGEBAR__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "PAGEBAR";
/// Nesting separator inside environment variable names.
pub const ENV_SEPARATOR: &str = "__";
/// Base file name tried when no path is given (any supported extension).
pub const DEFAULT_CONFIG_NAME: &str = "pagebar";

#[pagebar_derive::pagebar_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `PAGEBAR__*` environment variables.
///
/// 1. **Base File**: `path` (format picked from its extension), or `pagebar.{toml,json,yaml,...}`
///    in the working directory when `path` is `None`.
/// 2. **Environment Overrides**: `PAGEBAR__SECTION__KEY` maps to `section.key`.
///    Environment keys are lowercased, so they only reach lowercase config keys.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, malformed, or does not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use pagebar_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     locale: String,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment())
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Same layering as [`load_config`], with the base document supplied inline.
///
/// Used by hosts that embed a default configuration in the binary.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the document is malformed or does not match `T`.
pub fn load_config_str<T>(contents: &str, format: FileFormat) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from_str(contents, format))
        .add_source(environment())
        .build()
        .context("Failed to build embedded config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize embedded config")
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator(ENV_SEPARATOR).separator(ENV_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        locale: String,
        #[serde(default)]
        editor: Editor,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Editor {
        #[serde(default)]
        zoom_enabled: bool,
    }

    #[test]
    fn inline_toml_keeps_camel_case_keys() {
        let probe: Probe = load_config_str(
            "locale = \"en\"\n[editor]\nzoomEnabled = true\n",
            FileFormat::Toml,
        )
        .unwrap();
        assert_eq!(probe.locale, "en");
        assert!(probe.editor.zoom_enabled);
    }

    #[test]
    fn missing_required_key_is_reported() {
        let err = load_config_str::<Probe>("[editor]\n", FileFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize embedded config"));
    }
}
