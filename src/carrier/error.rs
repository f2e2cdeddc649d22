//! Errors surfaced at the carrier boundary.

use thiserror::Error;

use crate::{frame::FrameError, sequence::SequenceError};

/// Opaque failure reported by an image decoder or the text transform.
pub type DecodeSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while turning carrier text or images back into frames.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// The image could not be scanned or its text is not valid base64.
    #[error("carrier decode error: {0}")]
    Decode(#[source] DecodeSource),
    /// The decoded bytes do not form a well-formed frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// The frame was refused by the sequence it was fed into.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl CarrierError {
    pub(crate) fn decode(source: impl Into<DecodeSource>) -> Self { Self::Decode(source.into()) }
}

/// Errors produced while rendering a sequence to images.
#[derive(Debug, Error)]
pub enum RenderError<E> {
    /// Only complete sequences can be rendered.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    /// The image encoder refused a frame; its error is passed through as-is.
    #[error("carrier encoder failed: {0}")]
    Encoder(#[source] E),
}
