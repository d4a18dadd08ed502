//! A slider attached to one container: layout, paging and scaffold together.

use simple_change_model::{
    ContainerId, PageView, SliderConfig, SliderResult,
};

use crate::container::{SlideContainer, SlideLayout};
use crate::paging::PagingController;
use crate::render::Renderer;
use crate::scaffold::{
    NAVIGATION_ITEM_CLASS, NEXT_CLASS, PREVIOUS_CLASS, Scaffold,
};

/// Navigation requests coming from the host's click handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    Next,
    Previous,
    /// Jump to a page. Signed because hosts read it from `data-item`.
    GoTo(i64),
}

impl SliderEvent {
    /// Map a click on a scaffold element to an event.
    ///
    /// `classes` is the element's class list, `data_item` its `data-item`
    /// attribute if any. Returns `None` for elements that do not navigate.
    pub fn from_click(classes: &str, data_item: Option<&str>) -> Option<Self> {
        let has =
            |wanted: &str| classes.split_whitespace().any(|c| c == wanted);

        if has(PREVIOUS_CLASS) {
            Some(SliderEvent::Previous)
        } else if has(NEXT_CLASS) {
            Some(SliderEvent::Next)
        } else if has(NAVIGATION_ITEM_CLASS) {
            data_item
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .map(SliderEvent::GoTo)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slider {
    id: ContainerId,
    config: SliderConfig,
    layout: SlideLayout,
    paging: PagingController,
    scaffold: Scaffold,
}

impl Slider {
    /// Measure `container` and build the slider for it.
    pub fn attach<C>(container: &C, config: SliderConfig) -> SliderResult<Self>
    where
        C: SlideContainer + ?Sized,
    {
        let layout = SlideLayout::measure(container, &config)?;
        let paging =
            PagingController::new(layout.page_width(), layout.page_count)?;
        let scaffold = Scaffold::build(&config, layout.page_count);

        tracing::debug!(
            container = %container.id(),
            page_count = layout.page_count,
            controls = config.show_controls,
            navigation = config.show_navigation,
            "slider attached"
        );

        Ok(Self {
            id: container.id(),
            config,
            layout,
            paging,
            scaffold,
        })
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    pub fn paging(&self) -> &PagingController {
        &self.paging
    }

    pub fn scaffold(&self) -> &Scaffold {
        &self.scaffold
    }

    pub fn current_view(&self) -> PageView {
        self.paging.view()
    }

    /// Apply `event`, update the active navigation item and render.
    ///
    /// On error nothing changes and the renderer is not called.
    pub fn handle<R>(
        &mut self,
        event: SliderEvent,
        renderer: &mut R,
    ) -> SliderResult<PageView>
    where
        R: Renderer + ?Sized,
    {
        let view = match event {
            SliderEvent::Next => self.paging.next(),
            SliderEvent::Previous => self.paging.previous(),
            SliderEvent::GoTo(index) => self.paging.go_to_signed(index)?,
        };

        self.scaffold.set_active(view.active_index);
        renderer.render(view);
        Ok(view)
    }

    /// Render the current page without moving.
    pub fn sync<R>(&self, renderer: &mut R) -> PageView
    where
        R: Renderer + ?Sized,
    {
        let view = self.paging.view();
        renderer.render(view);
        view
    }
}
