use crate::ids::ContainerId;

/// Reasons a slider could not be built from its inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("slider needs at least one page")]
    NoPages,

    #[error("page width must be positive, got {0}")]
    NonPositiveWidth(f32),

    #[error("items per page must be at least 1")]
    ZeroItemsPerPage,

    #[error("option `{0}` is not supported")]
    Unsupported(&'static str),
}

/// Errors surfaced by slider construction and navigation.
///
/// None of these are retried. When one is returned the caller must leave the
/// displayed state as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliderError {
    #[error("invalid slider configuration: {0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("page {index} is out of range (page count {page_count})")]
    OutOfRange { index: i64, page_count: usize },

    #[error("no slider attached to container {0}")]
    NotAttached(ContainerId),
}

impl SliderError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SliderError::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, SliderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_converts_into_slider_error() {
        let err: SliderError = InvalidConfig::NonPositiveWidth(0.0).into();
        assert_eq!(
            err.to_string(),
            "invalid slider configuration: page width must be positive, got 0"
        );
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn out_of_range_message_names_index_and_bound() {
        let err = SliderError::OutOfRange {
            index: -1,
            page_count: 4,
        };
        assert!(err.is_out_of_range());
        assert_eq!(err.to_string(), "page -1 is out of range (page count 4)");
    }
}
