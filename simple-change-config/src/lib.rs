//! Slider configuration loading for simple-change.
//!
//! Options are written with the camelCase names page authors already use
//! (`itemsPerPage`, `showControls`, ...) in TOML or JSON, and resolved from a
//! file, inline JSON or defaults, then adjusted by per-field environment
//! overrides. The result is a validated [`SliderConfig`].

pub mod loader;
pub mod options;
pub mod util;

pub use loader::{SliderConfigLoader, SliderConfigSource};
pub use options::SliderOptions;
pub use simple_change_model::SliderConfig;
