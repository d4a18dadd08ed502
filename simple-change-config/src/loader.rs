//! Resolve slider options from the environment, files, or defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use simple_change_model::SliderConfig;

use crate::options::SliderOptions;
use crate::util::{non_empty, parse_bool, parse_count};

pub const CONFIG_PATH_VAR: &str = "SIMPLE_CHANGE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "SIMPLE_CHANGE_CONFIG_JSON";
pub const ITEMS_PER_PAGE_VAR: &str = "SIMPLE_CHANGE_ITEMS_PER_PAGE";
pub const SHOW_CONTROLS_VAR: &str = "SIMPLE_CHANGE_SHOW_CONTROLS";
pub const SHOW_NAVIGATION_VAR: &str = "SIMPLE_CHANGE_SHOW_NAVIGATION";

const DEFAULT_FILES: &[&str] = &[
    "simple-change.toml",
    "simple-change.json",
    "config/simple-change.toml",
    "config/simple-change.json",
];

/// Source that produced the slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SliderConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Loads [`SliderConfig`] with the following evaluation order:
/// 1) `$SIMPLE_CHANGE_CONFIG_PATH` (TOML or JSON file),
/// 2) `$SIMPLE_CHANGE_CONFIG_JSON` (inline JSON),
/// 3) the first default file found under the base directory,
/// 4) defaults.
///
/// Per-field overrides (`$SIMPLE_CHANGE_ITEMS_PER_PAGE`,
/// `$SIMPLE_CHANGE_SHOW_CONTROLS`, `$SIMPLE_CHANGE_SHOW_NAVIGATION`) are
/// applied on top of whichever source won.
#[derive(Debug, Clone)]
pub struct SliderConfigLoader {
    base_dir: PathBuf,
}

impl Default for SliderConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderConfigLoader {
    /// Loader that searches for default files in the working directory.
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn load_from_env(
        &self,
    ) -> anyhow::Result<(SliderConfig, SliderConfigSource)> {
        self.load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`load_from_env`](Self::load_from_env) with variables read
    /// through `lookup`.
    pub fn load_with<F>(
        &self,
        lookup: F,
    ) -> anyhow::Result<(SliderConfig, SliderConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut options, source) = self.resolve_options(&lookup)?;
        apply_env_overrides(&mut options, &lookup)?;

        let config = SliderConfig::try_from(options).with_context(|| {
            format!("invalid slider options from {source:?}")
        })?;

        tracing::info!(
            ?source,
            items_per_page = config.items_per_page,
            show_controls = config.show_controls,
            show_navigation = config.show_navigation,
            "slider configuration resolved"
        );
        Ok((config, source))
    }

    fn resolve_options<F>(
        &self,
        lookup: &F,
    ) -> anyhow::Result<(SliderOptions, SliderConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = non_empty(lookup, CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str.trim());
            let options = load_from_file(&path)?;
            return Ok((options, SliderConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty(lookup, CONFIG_JSON_VAR) {
            let options = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((options, SliderConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let options = load_from_file(&path)?;
            return Ok((options, SliderConfigSource::File(path)));
        }

        Ok((SliderOptions::default(), SliderConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<SliderOptions> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read slider options from {}", path.display())
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents).with_context(|| {
            format!("invalid slider options {}", path.display())
        }),
        Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
            anyhow!("invalid slider options {}: {}", path.display(), err)
        }),
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> anyhow::Result<SliderOptions> {
    // Try TOML first, then JSON for convenience.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse slider options {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<SliderOptions> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid slider options json: {err}"))
}

fn apply_env_overrides<F>(
    options: &mut SliderOptions,
    lookup: &F,
) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = non_empty(lookup, ITEMS_PER_PAGE_VAR) {
        options.items_per_page = parse_count(&raw).ok_or_else(|| {
            anyhow!(
                "{ITEMS_PER_PAGE_VAR} must be a positive integer, got {raw:?}"
            )
        })?;
    }

    for (name, field) in [
        (SHOW_CONTROLS_VAR, &mut options.show_controls),
        (SHOW_NAVIGATION_VAR, &mut options.show_navigation),
    ] {
        if let Some(raw) = non_empty(lookup, name) {
            *field = parse_bool(&raw).ok_or_else(|| {
                anyhow!("{name} must be a boolean, got {raw:?}")
            })?;
        }
    }

    Ok(())
}
