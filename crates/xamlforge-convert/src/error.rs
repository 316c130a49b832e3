use thiserror::Error;
use xamlforge_markup::MarkupError;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failures that abort a conversion.
///
/// Everything here is a broken input contract: the design tree handed to the
/// converter is malformed and output built from it would be silently wrong.
/// Recoverable problems (unknown node or paint types, missing fonts or image
/// handles) are logged and skipped instead.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("color channel {channel} out of range [0, 1]: {value}")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    #[error("{what} on node '{node}' must have at least one entry")]
    EmptyCollection { what: &'static str, node: String },

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("invalid design tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}
