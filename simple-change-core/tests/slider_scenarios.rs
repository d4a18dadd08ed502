//! End-to-end slider behaviour as a host would drive it.

use anyhow::Result;
use simple_change_core::{
    ContainerId, NavigationPosition, PageView, Region, SlideContainer,
    SliderConfig, SliderError, SliderEvent, SliderRegistry, StaticContainer,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_change_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn four_page_walkthrough() -> Result<()> {
    init_tracing();

    let container =
        StaticContainer::with_slides(ContainerId::from_name("#hero"), 300.0, 4);
    let id = container.id();
    let mut registry = SliderRegistry::new();
    registry.attach(&container, SliderConfig::default())?;

    let mut rendered: Vec<PageView> = Vec::new();
    let mut render = |view: PageView| rendered.push(view);

    let view = registry.dispatch(&id, SliderEvent::Next, &mut render)?;
    assert_eq!(view, PageView::new(300.0, 1));

    for _ in 0..3 {
        registry.dispatch(&id, SliderEvent::Next, &mut render)?;
    }
    let slider = registry.get(&id).expect("attached");
    assert_eq!(slider.current_view(), PageView::new(0.0, 0));

    let view = registry.dispatch(&id, SliderEvent::Previous, &mut render)?;
    assert_eq!(view, PageView::new(900.0, 3));

    let view = registry.dispatch(&id, SliderEvent::GoTo(2), &mut render)?;
    assert_eq!(view, PageView::new(600.0, 2));

    let err = registry
        .dispatch(&id, SliderEvent::GoTo(5), &mut render)
        .unwrap_err();
    assert!(matches!(
        err,
        SliderError::OutOfRange {
            index: 5,
            page_count: 4
        }
    ));

    assert_eq!(rendered.len(), 6);
    assert_eq!(rendered.last(), Some(&PageView::new(600.0, 2)));
    Ok(())
}

#[test]
fn clicks_on_scaffold_drive_the_slider() -> Result<()> {
    init_tracing();

    let container =
        StaticContainer::with_slides(ContainerId::from_name("#news"), 800.0, 5);
    let config = SliderConfig::default()
        .with_items_per_page(2)
        .with_navigation_position(NavigationPosition::Top);
    let mut registry = SliderRegistry::new();
    let slider = registry.attach(&container, config)?;

    assert_eq!(
        slider.scaffold().regions(),
        vec![Region::Controls, Region::Navigation, Region::Track]
    );

    let nav = slider.scaffold().navigation.clone().expect("navigation built");
    assert_eq!(nav.items.len(), 3);

    let dot = &nav.items[2];
    let event = SliderEvent::from_click(
        &dot.class_list(),
        Some(dot.data_item.to_string().as_str()),
    )
    .expect("dot navigates");
    let view = slider.handle(event, &mut simple_change_core::NoopRenderer)?;
    assert_eq!(view, PageView::new(1600.0, 2));

    let controls = slider.scaffold().controls.clone().expect("controls built");
    let next = SliderEvent::from_click(&controls.next_class, None)
        .expect("next navigates");
    let view = slider.handle(next, &mut simple_change_core::NoopRenderer)?;
    assert_eq!(view, PageView::new(0.0, 0));

    let active = slider
        .scaffold()
        .navigation
        .as_ref()
        .and_then(|nav| nav.active_index());
    assert_eq!(active, Some(0));
    Ok(())
}

#[test]
fn independent_containers_do_not_share_state() -> Result<()> {
    let first = StaticContainer::with_slides(ContainerId::new(), 100.0, 3);
    let second = StaticContainer::with_slides(ContainerId::new(), 100.0, 3);
    let mut registry = SliderRegistry::new();
    registry.attach(&first, SliderConfig::default())?;
    registry.attach(&second, SliderConfig::default())?;

    registry.dispatch(
        &first.id(),
        SliderEvent::Previous,
        &mut simple_change_core::NoopRenderer,
    )?;

    let first_view = registry.get(&first.id()).map(|s| s.current_view());
    let second_view = registry.get(&second.id()).map(|s| s.current_view());
    assert_eq!(first_view, Some(PageView::new(200.0, 2)));
    assert_eq!(second_view, Some(PageView::new(0.0, 0)));
    Ok(())
}

#[test]
fn resize_is_not_picked_up_until_reattach() -> Result<()> {
    let mut container =
        StaticContainer::with_slides(ContainerId::new(), 400.0, 2);
    let id = container.id();
    let mut registry = SliderRegistry::new();
    registry.attach(&container, SliderConfig::default())?;

    container.set_width(500.0);
    let view = registry.dispatch(
        &id,
        SliderEvent::Next,
        &mut simple_change_core::NoopRenderer,
    )?;
    assert_eq!(view.offset, 400.0);

    registry.detach(&id);
    registry.attach(&container, SliderConfig::default())?;
    let view = registry.dispatch(
        &id,
        SliderEvent::Next,
        &mut simple_change_core::NoopRenderer,
    )?;
    assert_eq!(view.offset, 500.0);
    Ok(())
}
