//! Presentational scaffolding built around the slide track.
//!
//! The host turns this description into real elements. Class names and ids
//! match the stylesheet shipped with the slider markup.

use simple_change_model::{NavigationPosition, SliderConfig};

pub const CONTROLS_CLASS: &str = "sc-controls";
pub const CONTROL_BUTTON_CLASS: &str = "sc-controls-btn";
pub const PREVIOUS_CLASS: &str = "sc-prev";
pub const NEXT_CLASS: &str = "sc-next";
pub const NAVIGATION_CLASS: &str = "sc-navigation";
pub const NAVIGATION_ITEM_CLASS: &str = "sc-navigation-item";
pub const NAVIGATION_ITEM_ID_PREFIX: &str = "sc-navigation-item-";
pub const ACTIVE_CLASS: &str = "active";

/// Previous/next buttons. Always placed before the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlStrip {
    pub class: &'static str,
    pub previous_class: String,
    pub next_class: String,
}

impl Default for ControlStrip {
    fn default() -> Self {
        Self {
            class: CONTROLS_CLASS,
            previous_class: format!("{CONTROL_BUTTON_CLASS} {PREVIOUS_CLASS}"),
            next_class: format!("{CONTROL_BUTTON_CLASS} {NEXT_CLASS}"),
        }
    }
}

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: String,
    /// Page this dot jumps to; exposed to the host as `data-item`.
    pub data_item: usize,
    pub active: bool,
}

impl NavigationItem {
    fn new(index: usize) -> Self {
        Self {
            id: format!("{NAVIGATION_ITEM_ID_PREFIX}{index}"),
            data_item: index,
            active: false,
        }
    }

    pub fn class_list(&self) -> String {
        if self.active {
            format!(
                "{CONTROL_BUTTON_CLASS} {NAVIGATION_ITEM_CLASS} {ACTIVE_CLASS}"
            )
        } else {
            format!("{CONTROL_BUTTON_CLASS} {NAVIGATION_ITEM_CLASS}")
        }
    }
}

/// Dot strip with one item per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStrip {
    pub class: &'static str,
    pub position: NavigationPosition,
    pub items: Vec<NavigationItem>,
}

impl NavigationStrip {
    pub fn new(page_count: usize, position: NavigationPosition) -> Self {
        let mut items: Vec<NavigationItem> =
            (0..page_count).map(NavigationItem::new).collect();
        if let Some(first) = items.first_mut() {
            first.active = true;
        }

        Self {
            class: NAVIGATION_CLASS,
            position,
            items,
        }
    }

    /// Move the active state to `index`. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        for item in &mut self.items {
            item.active = item.data_item == index;
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.data_item)
    }
}

/// Region of the container, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Controls,
    Navigation,
    Track,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub controls: Option<ControlStrip>,
    pub navigation: Option<NavigationStrip>,
}

impl Scaffold {
    pub fn build(config: &SliderConfig, page_count: usize) -> Self {
        let controls = config.show_controls.then(ControlStrip::default);
        let navigation = config.show_navigation.then(|| {
            NavigationStrip::new(page_count, config.navigation_position)
        });

        Self {
            controls,
            navigation,
        }
    }

    /// Order in which the host should lay out the container's regions.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::with_capacity(3);
        if self.controls.is_some() {
            regions.push(Region::Controls);
        }
        match self.navigation.as_ref().map(|nav| nav.position) {
            Some(NavigationPosition::Top) => {
                regions.push(Region::Navigation);
                regions.push(Region::Track);
            }
            Some(NavigationPosition::Bottom) => {
                regions.push(Region::Track);
                regions.push(Region::Navigation);
            }
            None => regions.push(Region::Track),
        }
        regions
    }

    pub fn set_active(&mut self, index: usize) {
        if let Some(navigation) = self.navigation.as_mut() {
            navigation.set_active(index);
        }
    }
}
