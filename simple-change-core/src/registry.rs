//! Registry for managing slider instances keyed by container identity

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use simple_change_model::{
    ContainerId, PageView, SliderConfig, SliderError, SliderResult,
};

use crate::container::SlideContainer;
use crate::render::Renderer;
use crate::slider::{Slider, SliderEvent};

#[derive(Debug, Default)]
pub struct SliderRegistry {
    sliders: HashMap<ContainerId, Slider>,
}

impl SliderRegistry {
    pub fn new() -> Self {
        Self {
            sliders: HashMap::new(),
        }
    }

    /// Attach a slider to `container`.
    ///
    /// Attaching a container that already has a slider is a no-op: the
    /// existing instance is returned unchanged and `config` is ignored.
    pub fn attach<C>(
        &mut self,
        container: &C,
        config: SliderConfig,
    ) -> SliderResult<&mut Slider>
    where
        C: SlideContainer + ?Sized,
    {
        match self.sliders.entry(container.id()) {
            Entry::Occupied(entry) => {
                if entry.get().config() != &config {
                    tracing::warn!(
                        container = %entry.key(),
                        "slider already attached; ignoring new options"
                    );
                }
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let slider = Slider::attach(container, config)?;
                Ok(entry.insert(slider))
            }
        }
    }

    /// Drop the slider owned by `id`, returning it if one was attached.
    pub fn detach(&mut self, id: &ContainerId) -> Option<Slider> {
        let removed = self.sliders.remove(id);
        if removed.is_some() {
            tracing::debug!(container = %id, "slider detached");
        }
        removed
    }

    pub fn get(&self, id: &ContainerId) -> Option<&Slider> {
        self.sliders.get(id)
    }

    pub fn get_mut(&mut self, id: &ContainerId) -> Option<&mut Slider> {
        self.sliders.get_mut(id)
    }

    pub fn contains(&self, id: &ContainerId) -> bool {
        self.sliders.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Route `event` to the slider attached to `id`.
    pub fn dispatch<R>(
        &mut self,
        id: &ContainerId,
        event: SliderEvent,
        renderer: &mut R,
    ) -> SliderResult<PageView>
    where
        R: Renderer + ?Sized,
    {
        let slider = self
            .sliders
            .get_mut(id)
            .ok_or(SliderError::NotAttached(*id))?;
        slider.handle(event, renderer)
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<ContainerId> {
        self.sliders.keys().copied().collect()
    }
}
