/// What the host needs to draw after a paging transition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageView {
    /// Distance in pixels the slide track is moved to the left.
    pub offset: f32,
    /// Navigation item that should carry the active state.
    pub active_index: usize,
}

impl PageView {
    pub const fn new(offset: f32, active_index: usize) -> Self {
        Self {
            offset,
            active_index,
        }
    }

    /// Horizontal translation to apply to the track (negative = left).
    pub fn translate_x(&self) -> f32 {
        // Subtraction keeps the first page at +0.0 rather than -0.0.
        0.0 - self.offset
    }

    /// CSS `left` value for hosts that position the track absolutely.
    pub fn css_left(&self) -> String {
        format!("{}px", self.translate_x())
    }
}

#[cfg(test)]
mod tests {
    use super::PageView;

    #[test]
    fn translation_moves_left() {
        let view = PageView::new(600.0, 2);
        assert_eq!(view.translate_x(), -600.0);
        assert_eq!(view.css_left(), "-600px");
    }

    #[test]
    fn first_page_has_no_translation() {
        let view = PageView::new(0.0, 0);
        assert_eq!(view.translate_x(), 0.0);
        assert_eq!(view.css_left(), "0px");
    }
}
