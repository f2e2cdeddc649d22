//! Out-of-order reassembly of a frame sequence.
//!
//! [`Sequence`] learns its frame size and frame count from the first frame it
//! absorbs, then fills one slot per index in whatever order frames arrive.
//! Absorption is idempotent: duplicates and frames arriving after completion
//! leave the state untouched. The lifecycle is modelled as a tagged state so
//! the frame size can never be read before it is known.

use std::num::NonZeroU8;

use log::{debug, warn};

use super::{AbsorbStatus, SequenceError};
use crate::frame::{Chunker, ChunkError, Frame, FrameHeader, FrameIndex, FrameSize};

/// Frame size and frame count fixed by the first absorbed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layout {
    frame_size: FrameSize,
    total: NonZeroU8,
}

impl Layout {
    fn from_frame(frame: &Frame) -> Result<Self, SequenceError> {
        let header = frame.header();
        let total = NonZeroU8::new(header.total()).ok_or(SequenceError::ZeroTotal)?;
        let layout = Self {
            frame_size: header.frame_size(),
            total,
        };
        layout.check_index(header.index())?;
        layout.check_payload(frame)?;
        Ok(layout)
    }

    fn slots(self) -> usize { usize::from(self.total.get()) }

    /// Check that `frame` belongs to the sequence described by `self`.
    fn admit(self, frame: &Frame) -> Result<(), SequenceError> {
        let header = frame.header();
        if header.total() == 0 {
            return Err(SequenceError::ZeroTotal);
        }
        if header.frame_size() != self.frame_size || header.total() != self.total.get() {
            return Err(SequenceError::MetadataConflict {
                expected_size: self.frame_size,
                expected_total: self.total.get(),
                found_size: header.frame_size(),
                found_total: header.total(),
            });
        }
        self.check_index(header.index())?;
        self.check_payload(frame)
    }

    fn check_index(self, index: FrameIndex) -> Result<(), SequenceError> {
        if index.get() >= self.total.get() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                total: self.total.get(),
            });
        }
        Ok(())
    }

    /// Only the last frame may carry less than a full payload.
    fn check_payload(self, frame: &Frame) -> Result<(), SequenceError> {
        let expected = self.frame_size.payload_capacity();
        let len = frame.payload().len();
        let is_last = frame.index().get() == self.total.get() - 1;
        if !is_last && len != expected {
            return Err(SequenceError::TruncatedFrame {
                index: frame.index(),
                total: self.total.get(),
                len,
                expected,
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
struct PartialSequence {
    layout: Layout,
    slots: Vec<Option<Vec<u8>>>,
    received: usize,
}

impl PartialSequence {
    fn new(layout: Layout) -> Self {
        debug!(
            "sequence started: frame_size={}, total={}",
            layout.frame_size, layout.total
        );
        Self {
            layout,
            slots: vec![None; layout.slots()],
            received: 0,
        }
    }

    /// Place an admitted frame into its slot.
    fn fill(mut self, frame: Frame) -> (SequenceState, Result<AbsorbStatus, SequenceError>) {
        let (header, payload) = frame.into_parts();
        let index = header.index();
        // Admission has already bounded the index by the slot count.
        if self.slots[index.slot()].is_some() {
            debug!("duplicate frame ignored: index={index}");
            return (SequenceState::Partial(self), Ok(AbsorbStatus::Duplicate));
        }
        self.slots[index.slot()] = Some(payload);
        self.received += 1;

        if self.received < self.layout.slots() {
            return (SequenceState::Partial(self), Ok(AbsorbStatus::Incomplete));
        }

        debug!(
            "sequence complete: frame_size={}, total={}",
            self.layout.frame_size, self.layout.total
        );
        let payloads = self.slots.into_iter().flatten().collect();
        (
            SequenceState::Complete(CompleteSequence {
                layout: self.layout,
                payloads,
            }),
            Ok(AbsorbStatus::Complete),
        )
    }
}

#[derive(Debug)]
struct CompleteSequence {
    layout: Layout,
    payloads: Vec<Vec<u8>>,
}

impl CompleteSequence {
    fn reconstruct(&self) -> Vec<u8> {
        let len = self.payloads.iter().map(Vec::len).sum();
        let mut data = Vec::with_capacity(len);
        for payload in &self.payloads {
            data.extend_from_slice(payload);
        }
        data
    }

    fn frames(&self) -> Vec<Frame> {
        let total = self.layout.total.get();
        (0..=u8::MAX)
            .zip(&self.payloads)
            .map(|(index, payload)| Frame {
                header: FrameHeader::new(FrameIndex::new(index), total, self.layout.frame_size),
                payload: payload.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Default)]
enum SequenceState {
    #[default]
    Empty,
    Partial(PartialSequence),
    Complete(CompleteSequence),
}

impl SequenceState {
    fn absorb(self, frame: Frame) -> (Self, Result<AbsorbStatus, SequenceError>) {
        match self {
            Self::Empty => match Layout::from_frame(&frame) {
                Ok(layout) => PartialSequence::new(layout).fill(frame),
                Err(err) => {
                    debug!("first frame rejected: {err}");
                    (Self::Empty, Err(err))
                }
            },
            Self::Partial(partial) => match partial.layout.admit(&frame) {
                Ok(()) => partial.fill(frame),
                Err(err) => {
                    warn!("frame rejected: {err}");
                    (Self::Partial(partial), Err(err))
                }
            },
            Self::Complete(complete) => {
                debug!("frame ignored: sequence already complete");
                (Self::Complete(complete), Ok(AbsorbStatus::AlreadyComplete))
            }
        }
    }

    fn layout(&self) -> Option<Layout> {
        match self {
            Self::Empty => None,
            Self::Partial(partial) => Some(partial.layout),
            Self::Complete(complete) => Some(complete.layout),
        }
    }
}

/// Coarse lifecycle phase of a [`Sequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencePhase {
    /// No frame absorbed yet; frame size and total are unknown.
    Empty,
    /// Some, but not all, slots are filled.
    Partial,
    /// Every slot is filled; the sequence no longer changes.
    Complete,
}

/// Reassembly context for one transported payload.
///
/// # Examples
///
/// ```
/// use qrseq::{frame::FrameSize, sequence::Sequence};
///
/// let source = Sequence::from_data(b"hello, frames", FrameSize::Bytes32).expect("split");
/// let mut frames = source.frames().expect("pre-filled sequences are complete");
/// frames.reverse();
///
/// let mut sink = Sequence::new();
/// for frame in frames {
///     sink.absorb(frame).expect("frame accepted");
/// }
/// assert!(sink.is_complete());
/// assert_eq!(sink.reconstruct().expect("complete"), b"hello, frames");
/// ```
#[derive(Debug, Default)]
pub struct Sequence {
    state: SequenceState,
}

impl Sequence {
    /// Create an empty sequence ready to absorb frames.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a complete sequence by splitting `data` into frames.
    ///
    /// # Errors
    ///
    /// Returns the [`ChunkError`] raised by [`Chunker::split`].
    pub fn from_data(data: impl AsRef<[u8]>, frame_size: FrameSize) -> Result<Self, ChunkError> {
        let batch = Chunker::new(frame_size).split(data)?;
        let total = batch.total();
        let payloads = batch
            .into_iter()
            .map(|frame| frame.into_parts().1)
            .collect();
        Ok(Self {
            state: SequenceState::Complete(CompleteSequence {
                layout: Layout { frame_size, total },
                payloads,
            }),
        })
    }

    /// Absorb one frame.
    ///
    /// Frames may arrive in any order and any number of times. Absorbing into
    /// a complete sequence or repeating an index is a no-op reported through
    /// [`AbsorbStatus`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ZeroTotal`] or
    /// [`SequenceError::IndexOutOfRange`] for a malformed header and
    /// [`SequenceError::MetadataConflict`] when the frame disagrees with the
    /// frame size or total fixed by the first frame.
    /// [`SequenceError::TruncatedFrame`] is returned for any frame but the last
    /// whose payload is shorter than the frame size allows. Rejected frames
    /// leave the sequence unchanged.
    pub fn absorb(&mut self, frame: Frame) -> Result<AbsorbStatus, SequenceError> {
        let (state, outcome) = std::mem::take(&mut self.state).absorb(frame);
        self.state = state;
        outcome
    }

    /// Decode wire bytes and absorb the resulting frame.
    ///
    /// Nothing is decoded once the sequence is complete.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Frame`] when the bytes are not a valid frame,
    /// plus every error of [`absorb`](Self::absorb).
    pub fn absorb_bytes(&mut self, bytes: &[u8]) -> Result<AbsorbStatus, SequenceError> {
        if self.is_complete() {
            return Ok(AbsorbStatus::AlreadyComplete);
        }
        let frame = Frame::decode(bytes)?;
        self.absorb(frame)
    }

    /// Return the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SequencePhase {
        match self.state {
            SequenceState::Empty => SequencePhase::Empty,
            SequenceState::Partial(_) => SequencePhase::Partial,
            SequenceState::Complete(_) => SequencePhase::Complete,
        }
    }

    /// Report whether every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool { matches!(self.state, SequenceState::Complete(_)) }

    /// Fraction of slots filled, in `[0, 1]`.
    ///
    /// Returns `0` before the first frame and exactly `1` once complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match &self.state {
            SequenceState::Empty => 0.0,
            SequenceState::Partial(partial) => {
                f32::from(u8::try_from(partial.received).unwrap_or(u8::MAX))
                    / f32::from(partial.layout.total.get())
            }
            SequenceState::Complete(_) => 1.0,
        }
    }

    /// Frame size fixed for this sequence, if known.
    #[must_use]
    pub fn frame_size(&self) -> Option<FrameSize> {
        self.state.layout().map(|layout| layout.frame_size)
    }

    /// Declared frame count, if known.
    #[must_use]
    pub fn total(&self) -> Option<u8> { self.state.layout().map(|layout| layout.total.get()) }

    /// Number of filled slots.
    #[must_use]
    pub fn received(&self) -> usize {
        match &self.state {
            SequenceState::Empty => 0,
            SequenceState::Partial(partial) => partial.received,
            SequenceState::Complete(complete) => complete.payloads.len(),
        }
    }

    /// Indices whose frames have not been absorbed yet.
    ///
    /// Empty both before the first frame (nothing is known yet) and after
    /// completion.
    #[must_use]
    pub fn missing(&self) -> Vec<FrameIndex> {
        let SequenceState::Partial(partial) = &self.state else {
            return Vec::new();
        };
        (0..=u8::MAX)
            .zip(&partial.slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| FrameIndex::new(index))
            .collect()
    }

    /// Concatenate the slot payloads in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Incomplete`] unless the sequence is complete.
    pub fn reconstruct(&self) -> Result<Vec<u8>, SequenceError> {
        match &self.state {
            SequenceState::Complete(complete) => Ok(complete.reconstruct()),
            _ => Err(self.incomplete()),
        }
    }

    /// Return every frame of a complete sequence, ordered by index.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Incomplete`] unless the sequence is complete.
    pub fn frames(&self) -> Result<Vec<Frame>, SequenceError> {
        match &self.state {
            SequenceState::Complete(complete) => Ok(complete.frames()),
            _ => Err(self.incomplete()),
        }
    }

    fn incomplete(&self) -> SequenceError {
        SequenceError::Incomplete {
            received: self.received(),
            total: self.total(),
        }
    }
}
