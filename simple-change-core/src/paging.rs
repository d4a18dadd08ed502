//! Paging state machine
//!
//! Owns the current page index of one slider and turns each navigation
//! request into the offset and active navigation index the host renders.
//! Advance and retreat wrap around; direct jumps are bounds-checked.

use simple_change_model::{InvalidConfig, PageView, SliderError, SliderResult};

#[derive(Debug, Clone, PartialEq)]
pub struct PagingController {
    current_index: usize,
    page_count: usize,
    /// Container width captured at attach. Never re-measured.
    page_width: f32,
}

impl PagingController {
    /// Controller positioned on the first page.
    pub fn new(page_width: f32, page_count: usize) -> SliderResult<Self> {
        Self::with_index(page_width, page_count, 0)
    }

    /// Controller positioned on `initial_index`.
    pub fn with_index(
        page_width: f32,
        page_count: usize,
        initial_index: usize,
    ) -> SliderResult<Self> {
        if page_count < 1 {
            return Err(InvalidConfig::NoPages.into());
        }
        if !page_width.is_finite() || page_width <= 0.0 {
            return Err(InvalidConfig::NonPositiveWidth(page_width).into());
        }
        if initial_index >= page_count {
            return Err(SliderError::OutOfRange {
                index: initial_index as i64,
                page_count,
            });
        }

        Ok(Self {
            current_index: initial_index,
            page_count,
            page_width,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.page_count
    }

    /// View for the current page without changing it.
    pub fn view(&self) -> PageView {
        PageView::new(
            self.page_width * self.current_index as f32,
            self.current_index,
        )
    }

    /// Advance one page, wrapping from the last page to the first.
    pub fn next(&mut self) -> PageView {
        self.current_index = if self.current_index < self.page_count - 1 {
            self.current_index + 1
        } else {
            0
        };

        tracing::debug!(
            index = self.current_index,
            page_count = self.page_count,
            "slider advanced"
        );
        self.view()
    }

    /// Retreat one page, wrapping from the first page to the last.
    pub fn previous(&mut self) -> PageView {
        self.current_index = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.page_count - 1
        };

        tracing::debug!(
            index = self.current_index,
            page_count = self.page_count,
            "slider retreated"
        );
        self.view()
    }

    /// Jump straight to `index`. Out-of-range targets leave the state as is.
    pub fn go_to(&mut self, index: usize) -> SliderResult<PageView> {
        if index >= self.page_count {
            tracing::warn!(
                index,
                page_count = self.page_count,
                "rejected jump outside page range"
            );
            return Err(SliderError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                page_count: self.page_count,
            });
        }

        self.current_index = index;
        tracing::debug!(index, page_count = self.page_count, "slider jumped");
        Ok(self.view())
    }

    /// Same as [`go_to`](Self::go_to) for hosts that read the target from an
    /// untyped attribute. Negative targets are out of range.
    pub fn go_to_signed(&mut self, index: i64) -> SliderResult<PageView> {
        match usize::try_from(index) {
            Ok(index) => self.go_to(index),
            Err(_) => {
                tracing::warn!(
                    index,
                    page_count = self.page_count,
                    "rejected negative jump target"
                );
                Err(SliderError::OutOfRange {
                    index,
                    page_count: self.page_count,
                })
            }
        }
    }
}
