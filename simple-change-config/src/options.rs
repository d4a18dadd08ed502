use serde::{Deserialize, Serialize};
use simple_change_model::{
    EffectType, InvalidConfig, NavigationPosition, SliderConfig,
};

/// Slider options as written by users.
///
/// Unknown keys are rejected. `infinite` is recognised only so it can be
/// refused with a clear message: wrap-around is always on and no separate
/// continuous-loop mode exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SliderOptions {
    pub items_per_page: usize,
    pub show_controls: bool,
    pub show_navigation: bool,
    pub navigation_position: NavigationPosition,
    pub effect_type: EffectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite: Option<bool>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        SliderConfig::default().into()
    }
}

impl From<SliderConfig> for SliderOptions {
    fn from(config: SliderConfig) -> Self {
        Self {
            items_per_page: config.items_per_page,
            show_controls: config.show_controls,
            show_navigation: config.show_navigation,
            navigation_position: config.navigation_position,
            effect_type: config.effect_type,
            infinite: None,
        }
    }
}

impl TryFrom<SliderOptions> for SliderConfig {
    type Error = InvalidConfig;

    fn try_from(options: SliderOptions) -> Result<Self, Self::Error> {
        if options.infinite.is_some() {
            return Err(InvalidConfig::Unsupported("infinite"));
        }

        let config = SliderConfig {
            items_per_page: options.items_per_page,
            show_controls: options.show_controls,
            show_navigation: options.show_navigation,
            navigation_position: options.navigation_position,
            effect_type: options.effect_type,
        };
        config.validate()?;
        Ok(config)
    }
}
