//! Slider configuration as consumed by the engine.
//!
//! User-facing option documents (camelCase keys, env overrides) are parsed by
//! `simple-change-config`; this type only carries validated values.

use crate::error::InvalidConfig;

/// Where the dot-navigation strip sits relative to the slide track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NavigationPosition {
    /// Strip is placed before the track.
    Top,
    /// Strip is placed after the track.
    #[default]
    Bottom,
}

/// Transition style applied when the page changes.
///
/// Only a horizontal scroll is implemented. Other styles are rejected when
/// options are parsed instead of being accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EffectType {
    /// Track is translated left by `page_width * current_index`.
    #[default]
    ScrollLeft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    /// Slide items shown per page. Must be at least 1.
    pub items_per_page: usize,
    /// Build previous/next controls.
    pub show_controls: bool,
    /// Build the dot-navigation strip.
    pub show_navigation: bool,
    pub navigation_position: NavigationPosition,
    pub effect_type: EffectType,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            items_per_page: 1,
            show_controls: true,
            show_navigation: true,
            navigation_position: NavigationPosition::Bottom,
            effect_type: EffectType::ScrollLeft,
        }
    }
}

impl SliderConfig {
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    pub fn with_navigation(mut self, show: bool) -> Self {
        self.show_navigation = show;
        self
    }

    pub fn with_navigation_position(
        mut self,
        position: NavigationPosition,
    ) -> Self {
        self.navigation_position = position;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.items_per_page == 0 {
            return Err(InvalidConfig::ZeroItemsPerPage);
        }
        Ok(())
    }

    /// Number of pages needed to show `total_items`.
    pub fn page_count(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page.max(1))
    }
}
