//! Boundary between frames and the QR images that carry them.
//!
//! Frames travel as base64 text inside QR symbols. Rendering and scanning the
//! symbols is left to injected [`ImageEncoder`] and [`ImageDecoder`]
//! implementations so the protocol can be exercised without an image codec.

pub mod codec;
pub mod config;
pub mod error;
mod sequence;

pub use codec::{
    ImageDecoder,
    ImageEncoder,
    from_carrier_text,
    render_frame,
    scan_frame,
    to_carrier_text,
};
pub use config::{DEFAULT_BLOCK_SIZE, RenderOptions, Rgb};
pub use error::{CarrierError, DecodeSource, RenderError};
