#![doc(html_root_url = "https://docs.rs/qrseq/latest")]
//! Public API for the `qrseq` library.
//!
//! This crate moves an arbitrary byte payload across a channel made only of
//! still images. The payload is split into self-describing frames, each frame
//! is carried as base64 text inside one QR symbol, and a receiver rebuilds the
//! payload from frames captured in any order and any number of times.

pub mod byte_order;
pub mod carrier;
pub mod frame;
pub mod sequence;

pub use carrier::{
    CarrierError,
    ImageDecoder,
    ImageEncoder,
    RenderError,
    RenderOptions,
    from_carrier_text,
    to_carrier_text,
};
pub use frame::{
    ChunkError,
    Chunker,
    Frame,
    FrameBatch,
    FrameError,
    FrameHeader,
    FrameIndex,
    FrameSize,
    ParseFrameSizeError,
    decode_header,
    encode_header,
    slice_frame_payload,
};
pub use sequence::{AbsorbStatus, Sequence, SequenceError, SequencePhase, SharedSequence};
