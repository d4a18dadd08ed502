//! Host container abstraction and the layout measured from it.

use simple_change_model::{
    ContainerId, InvalidConfig, SliderConfig, SliderResult,
};

/// Marker class identifying slide items inside a container.
pub const SLIDE_MARKER: &str = "sc-item";

/// Element a slider is attached to, as seen through the host UI.
pub trait SlideContainer {
    /// Stable identity used as the registry key.
    fn id(&self) -> ContainerId;

    /// Rendered width in pixels.
    fn width(&self) -> f32;

    /// Number of child elements carrying `marker`.
    fn count_items(&self, marker: &str) -> usize;
}

/// In-memory container for headless hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticContainer {
    id: ContainerId,
    width: f32,
    /// Marker classes of each child, in document order.
    children: Vec<String>,
}

impl StaticContainer {
    pub fn new(id: ContainerId, width: f32) -> Self {
        Self {
            id,
            width,
            children: Vec::new(),
        }
    }

    /// Container holding `count` slide items and nothing else.
    pub fn with_slides(id: ContainerId, width: f32, count: usize) -> Self {
        let mut container = Self::new(id, width);
        container
            .children
            .extend(std::iter::repeat_n(SLIDE_MARKER.to_string(), count));
        container
    }

    pub fn push_child(&mut self, class: impl Into<String>) {
        self.children.push(class.into());
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl SlideContainer for StaticContainer {
    fn id(&self) -> ContainerId {
        self.id
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn count_items(&self, marker: &str) -> usize {
        self.children
            .iter()
            .filter(|class| class.split_whitespace().any(|c| c == marker))
            .count()
    }
}

/// Geometry derived once when a slider is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    pub container_width: f32,
    /// Width each item gets so `items_per_page` fit one page.
    pub item_width: f32,
    pub total_items: usize,
    pub page_count: usize,
}

impl SlideLayout {
    pub fn measure<C>(
        container: &C,
        config: &SliderConfig,
    ) -> SliderResult<Self>
    where
        C: SlideContainer + ?Sized,
    {
        config.validate()?;

        let container_width = container.width();
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(InvalidConfig::NonPositiveWidth(container_width).into());
        }

        let total_items = container.count_items(SLIDE_MARKER);
        let page_count = config.page_count(total_items);
        if page_count == 0 {
            return Err(InvalidConfig::NoPages.into());
        }

        let item_width =
            (container_width / config.items_per_page as f32).floor();

        tracing::debug!(
            container = %container.id(),
            container_width,
            item_width,
            total_items,
            page_count,
            "measured slider container"
        );

        Ok(Self {
            container_width,
            item_width,
            total_items,
            page_count,
        })
    }

    /// Width of one page. Equal to the container width at measure time.
    pub fn page_width(&self) -> f32 {
        self.container_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_change_model::SliderError;

    #[test]
    fn counts_only_marked_children() {
        let mut container =
            StaticContainer::with_slides(ContainerId::new(), 900.0, 3);
        container.push_child("sc-controls");
        container.push_child("featured sc-item");
        container.push_child("sc-items");

        assert_eq!(container.count_items(SLIDE_MARKER), 4);
    }

    #[test]
    fn layout_splits_width_across_items_per_page() {
        let container =
            StaticContainer::with_slides(ContainerId::new(), 1000.0, 7);
        let config = SliderConfig::default().with_items_per_page(3);

        let layout = SlideLayout::measure(&container, &config).unwrap();
        assert_eq!(layout.page_count, 3);
        assert_eq!(layout.item_width, 333.0);
        assert_eq!(layout.page_width(), 1000.0);
        assert_eq!(layout.total_items, 7);
    }

    #[test]
    fn empty_container_has_no_pages() {
        let container = StaticContainer::new(ContainerId::new(), 500.0);
        let err = SlideLayout::measure(&container, &SliderConfig::default())
            .unwrap_err();
        assert_eq!(err, SliderError::InvalidConfig(InvalidConfig::NoPages));
    }

    #[test]
    fn collapsed_container_is_rejected() {
        let container =
            StaticContainer::with_slides(ContainerId::new(), 0.0, 2);
        let err = SlideLayout::measure(&container, &SliderConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            SliderError::InvalidConfig(InvalidConfig::NonPositiveWidth(0.0))
        );
    }

    #[test]
    fn zero_items_per_page_is_rejected_before_measuring() {
        let container =
            StaticContainer::with_slides(ContainerId::new(), 500.0, 2);
        let config = SliderConfig::default().with_items_per_page(0);
        assert_eq!(
            SlideLayout::measure(&container, &config).unwrap_err(),
            SliderError::InvalidConfig(InvalidConfig::ZeroItemsPerPage)
        );
    }
}
