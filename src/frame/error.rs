//! Error types emitted by the frame codec and the chunker.
//!
//! Both enums carry the offending values so callers and behavioural tests can
//! tell exactly which input was refused.

use thiserror::Error;

use super::FrameSize;

/// Errors produced while decoding or constructing a single frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer bytes than a full header were supplied.
    #[error("malformed frame header: need 4 bytes, found {len}")]
    MalformedHeader {
        /// Number of bytes that were available.
        len: usize,
    },
    /// The declared frame size is not one of the supported capacities.
    #[error("invalid frame size {found}: expected one of 32, 64, 128, 256, 512, 1024")]
    InvalidFrameSize {
        /// Raw size field carried by the header.
        found: u16,
    },
    /// A payload does not fit the slot reserved by its frame size.
    #[error("frame payload of {len} bytes exceeds slot capacity of {capacity} bytes")]
    PayloadTooLong {
        /// Length of the rejected payload.
        len: usize,
        /// Payload capacity of the declared frame size.
        capacity: usize,
    },
}

/// Errors produced while parsing a frame size from text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseFrameSizeError {
    /// The text is not an unsigned integer.
    #[error("invalid frame size {input:?}: not an unsigned integer")]
    NotANumber {
        /// Trimmed input text.
        input: String,
    },
    /// The number is not one of the supported capacities.
    #[error("invalid frame size {found}: expected one of 32, 64, 128, 256, 512, 1024")]
    Unsupported {
        /// Parsed value.
        found: u64,
    },
}

/// Errors produced while splitting a buffer into frames.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// Zero-length input cannot be told apart from "no data yet".
    #[error("cannot split an empty buffer into frames")]
    EmptyInput,
    /// The buffer needs more than 255 frames at the chosen frame size.
    #[error("input of {len} bytes exceeds the {limit} byte ceiling for {frame_size}-byte frames")]
    OversizedInput {
        /// Length of the rejected buffer.
        len: usize,
        /// Frame size requested by the caller.
        frame_size: FrameSize,
        /// Largest buffer that fits in 255 frames of `frame_size`.
        limit: usize,
    },
}
