//! Paginated content slider engine.
//!
//! The host UI owns the element tree; this crate owns the logic around it.
//! A [`SliderRegistry`] maps each container to its [`Slider`], which measures
//! the container once, describes the controls and navigation strip to build
//! ([`Scaffold`]), and turns click events into [`PageView`]s through the
//! [`PagingController`] state machine.
//!
//! Page width is captured when a slider is attached and is not re-measured
//! if the container is resized. Detach and re-attach to pick up a new width.

pub mod container;
pub mod paging;
pub mod registry;
pub mod render;
pub mod scaffold;
pub mod slider;

pub use container::{SLIDE_MARKER, SlideContainer, SlideLayout, StaticContainer};
pub use paging::PagingController;
pub use registry::SliderRegistry;
pub use render::{NoopRenderer, Renderer};
pub use scaffold::{
    ControlStrip, NavigationItem, NavigationStrip, Region, Scaffold,
};
pub use slider::{Slider, SliderEvent};

pub use simple_change_model::{
    ContainerId, EffectType, InvalidConfig, NavigationPosition, PageView,
    SliderConfig, SliderError, SliderResult,
};
