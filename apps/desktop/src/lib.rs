use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use pagebar::domain::config::SidebarConfig;
use pagebar::kernel::config::{ConfigError, FileFormat, load_config, load_config_str};
use pagebar::kernel::i18n::{Catalog, Translations};
use pagebar_logger::LogSettings;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

mod app;

pub use app::{PIN_ACTION, Root};

/// Demo configuration compiled into the binary, used when no file is found.
pub const EMBEDDED_CONFIG: &str = include_str!("../pagebar.toml");

/// Window geometry for the demo host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { title: "Pagebar Desktop".to_owned(), width: 1200.0, height: 800.0 }
    }
}

/// Everything the desktop host reads from `pagebar.toml` and `PAGEBAR__*` overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub window: WindowSettings,
    pub logging: LogSettings,
    pub sidebar: SidebarConfig,
    pub translations: Translations,
}

/// Where a [`HostConfig`] was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => f.write_str("embedded defaults"),
        }
    }
}

impl HostConfig {
    /// Reads `path`, or [`EMBEDDED_CONFIG`] when there is none. `PAGEBAR__*`
    /// overrides apply either way.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file is missing or either document fails to deserialize.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, ConfigSource), ConfigError> {
        match path {
            Some(path) => Ok((load_config(Some(&path))?, ConfigSource::File(path))),
            None => {
                Ok((load_config_str(EMBEDDED_CONFIG, FileFormat::Toml)?, ConfigSource::Embedded))
            }
        }
    }
}

#[derive(Debug)]
pub struct DesktopApp {
    window: WindowSettings,
    sidebar: SidebarConfig,
    catalog: Catalog,
}

impl DesktopApp {
    /// Takes window, sidebar and the active translation catalog from a loaded config.
    #[must_use]
    pub fn from_config(config: HostConfig) -> Self {
        let catalog = config.translations.active_or_empty();
        Self { window: config.window, sidebar: config.sidebar, catalog }
    }

    /// The entry point for launching the app. `root` reads the sidebar config and
    /// catalog from context.
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.window.title)
            .with_inner_size(LogicalSize { width: self.window.width, height: self.window.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(self.sidebar)
            .with_context(self.catalog)
            .launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar::domain::features::Feature;
    use pagebar::kernel::i18n::Translator;
    use std::io::Write;

    #[test]
    fn host_config_loads_every_section() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[window]
title = "Editor"

[logging]
level = "debug"
console = false

[sidebar.editor]
undoRedoEnabled = true
previewEnabled = true
customOptions = [{{ id = "pin", label = "Pin" }}]

[sidebar.sticky]
shouldStickToTop = true

[translations]
locale = "de"

[translations.catalogs.de]
"Preview page" = "Vorschau"
"#
        )
        .unwrap();

        let (config, source) = HostConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.window.title, "Editor");
        assert!((config.window.width - 1200.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.console);
        assert!(config.sidebar.editor.is_enabled(Feature::Preview));
        assert!(!config.sidebar.editor.is_enabled(Feature::Zoom));
        assert!(config.sidebar.sticky.is_some_and(|sticky| sticky.should_stick_to_top));

        let app = DesktopApp::from_config(config);
        assert_eq!(app.catalog.label("Preview page"), "Vorschau");
        assert_eq!(app.sidebar.editor.custom_options.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn embedded_defaults_load_without_a_file() {
        let (config, source) = HostConfig::load(None).unwrap();

        assert_eq!(source, ConfigSource::Embedded);
        assert_eq!(source.to_string(), "embedded defaults");
        assert!(config.sidebar.editor.is_enabled(Feature::UndoRedo));
        assert!(!config.sidebar.editor.is_enabled(Feature::Layout));
        assert_eq!(config.translations.active_or_empty().label("undo"), "Undo");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HostConfig::load(Some(dir.path().join("absent.toml"))).is_err());
    }
}
