//! Core data model definitions shared across simple-change crates.

pub mod config;
pub mod error;
pub mod ids;
pub mod view;

// Intentionally curated re-exports for downstream consumers.
pub use config::{EffectType, NavigationPosition, SliderConfig};
pub use error::{InvalidConfig, Result as SliderResult, SliderError};
pub use ids::ContainerId;
pub use view::PageView;
