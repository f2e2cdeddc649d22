//! Error and status types for sequence reassembly.

use thiserror::Error;

use crate::frame::{FrameError, FrameIndex, FrameSize};

/// Result of absorbing a frame into a [`Sequence`](super::Sequence).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbsorbStatus {
    /// The frame filled an empty slot; more frames are still required.
    Incomplete,
    /// The frame filled the last empty slot.
    Complete,
    /// The slot was already filled; nothing changed.
    Duplicate,
    /// The sequence was already complete; the frame was not inspected.
    AlreadyComplete,
}

/// Errors produced while absorbing frames or reading a sequence.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// A header declared a sequence of zero frames.
    #[error("invalid sequence metadata: total frame count is zero")]
    ZeroTotal,
    /// A header carried an index outside `[0, total)`.
    #[error("invalid sequence metadata: frame index {index} outside sequence of {total}")]
    IndexOutOfRange {
        /// Index carried by the frame.
        index: FrameIndex,
        /// Total carried by the frame.
        total: u8,
    },
    /// A frame disagrees with the frame size or total fixed by the first
    /// frame.
    #[error(
        "invalid sequence metadata: expected {expected_total} frames of {expected_size} bytes, \
         found {found_total} frames of {found_size} bytes"
    )]
    MetadataConflict {
        /// Frame size fixed for the sequence.
        expected_size: FrameSize,
        /// Total fixed for the sequence.
        expected_total: u8,
        /// Frame size carried by the rejected frame.
        found_size: FrameSize,
        /// Total carried by the rejected frame.
        found_total: u8,
    },
    /// A frame other than the last carries less than a full payload.
    #[error(
        "invalid sequence metadata: frame {index} of {total} carries {len} bytes, expected \
         {expected}"
    )]
    TruncatedFrame {
        /// Index carried by the frame.
        index: FrameIndex,
        /// Total carried by the frame.
        total: u8,
        /// Payload length of the frame.
        len: usize,
        /// Payload capacity of the frame size.
        expected: usize,
    },
    /// The sequence is not complete yet.
    #[error("sequence incomplete: {received} of {} frames received", expected_total(.total))]
    Incomplete {
        /// Number of filled slots.
        received: usize,
        /// Declared frame count, unknown until the first frame arrives.
        total: Option<u8>,
    },
    /// Raw frame bytes could not be decoded.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

fn expected_total(total: &Option<u8>) -> String {
    total.map_or_else(|| "?".to_owned(), |total| total.to_string())
}
