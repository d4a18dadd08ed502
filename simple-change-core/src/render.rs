use simple_change_model::PageView;

/// Host-side collaborator that draws a page.
///
/// Called after every successful transition: apply `view.offset` to the slide
/// track and mark the navigation item at `view.active_index` active. Never
/// called when a transition is rejected.
pub trait Renderer {
    fn render(&mut self, view: PageView);
}

impl<F> Renderer for F
where
    F: FnMut(PageView),
{
    fn render(&mut self, view: PageView) {
        self(view)
    }
}

/// Renderer that does nothing, for hosts that poll [`PageView`]s instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _view: PageView) {}
}
