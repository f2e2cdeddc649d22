//! Image codec capabilities and the base64 text transform.
//!
//! QR rendering and scanning are delegated to whatever implements
//! [`ImageEncoder`] and [`ImageDecoder`]. This module only decides what text
//! goes into a symbol: the frame's wire bytes in standard base64.

use base64::{Engine, engine::general_purpose::STANDARD};

use super::{CarrierError, RenderOptions};
use crate::frame::Frame;

/// Renders carrier text into an image.
pub trait ImageEncoder {
    /// Image type produced by the encoder.
    type Image;
    /// Error raised when the text cannot be rendered, for example because it
    /// exceeds the symbol capacity.
    type Error: std::error::Error + 'static;

    /// Render `text` into an image using `options`.
    ///
    /// # Errors
    ///
    /// Returns the encoder's own error type unchanged.
    fn encode(&self, text: &str, options: &RenderOptions) -> Result<Self::Image, Self::Error>;
}

/// Extracts carrier text from an image.
pub trait ImageDecoder {
    /// Image type accepted by the decoder.
    type Image: ?Sized;
    /// Error raised when no readable symbol is found.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scan `image` and return the embedded text.
    ///
    /// # Errors
    ///
    /// Returns the decoder's own error type; callers fold it into
    /// [`CarrierError::Decode`].
    fn decode(&self, image: &Self::Image) -> Result<String, Self::Error>;
}

/// Serialise a frame to the text embedded in its QR symbol.
///
/// # Examples
///
/// ```
/// use qrseq::{
///     carrier::to_carrier_text,
///     frame::{Frame, FrameHeader, FrameIndex, FrameSize},
/// };
///
/// let header = FrameHeader::new(FrameIndex::zero(), 1, FrameSize::Bytes32);
/// let frame = Frame::new(header, b"hi".to_vec()).expect("fits");
/// assert_eq!(to_carrier_text(&frame), "AAEgAGhp");
/// ```
#[must_use]
pub fn to_carrier_text(frame: &Frame) -> String { STANDARD.encode(frame.encode()) }

/// Parse carrier text back into a frame.
///
/// Surrounding whitespace, such as a trailing newline from a scanner, is
/// ignored.
///
/// # Errors
///
/// Returns [`CarrierError::Decode`] when `text` is not valid base64 and
/// [`CarrierError::Frame`] when the decoded bytes are not a valid frame.
pub fn from_carrier_text(text: &str) -> Result<Frame, CarrierError> {
    let bytes = STANDARD.decode(text.trim()).map_err(CarrierError::decode)?;
    Ok(Frame::decode(&bytes)?)
}

/// Render a single frame through `encoder`.
///
/// # Errors
///
/// Returns the encoder's error unchanged.
pub fn render_frame<E: ImageEncoder>(
    encoder: &E,
    frame: &Frame,
    options: &RenderOptions,
) -> Result<E::Image, E::Error> {
    encoder.encode(&to_carrier_text(frame), options)
}

/// Scan a single image through `decoder` and parse the frame it carries.
///
/// # Errors
///
/// Returns [`CarrierError::Decode`] for any scanner failure or invalid
/// base64, and [`CarrierError::Frame`] for malformed frame bytes.
pub fn scan_frame<D: ImageDecoder>(decoder: &D, image: &D::Image) -> Result<Frame, CarrierError> {
    let text = decoder.decode(image).map_err(CarrierError::decode)?;
    from_carrier_text(&text)
}
