//! Helpers for explicit little-endian byte-order conversions.
//!
//! The frame header stores its size field little-endian. Keeping the
//! conversion in one place lets the codec stay explicit about wire
//! endianness.

/// Serialise a `u16` in little-endian byte order.
///
/// # Examples
///
/// ```
/// use qrseq::byte_order::write_le_u16;
///
/// assert_eq!(write_le_u16(0x0400), [0x00, 0x04]);
/// ```
#[must_use]
pub fn write_le_u16(value: u16) -> [u8; 2] { value.to_le_bytes() }

/// Parse a little-endian `u16` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use qrseq::byte_order::read_le_u16;
///
/// assert_eq!(read_le_u16([0x40, 0x00]), 64);
/// ```
#[must_use]
pub fn read_le_u16(bytes: [u8; 2]) -> u16 { u16::from_le_bytes(bytes) }
