//! Shared utilities for integration tests.
//!
//! Provides a serialised handle to the global log capture and an in-memory
//! stand-in for a QR image codec.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use logtest::Logger;
use qrseq::{ImageDecoder, ImageEncoder, RenderOptions};
use rstest::fixture;

/// Handle to the global logger with exclusive access.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] and discard anything already captured.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let mut guard = logger.lock().unwrap_or_else(PoisonError::into_inner);
        while guard.pop().is_some() {}

        Self { guard }
    }

    /// Drain captured records as `(level, message)` pairs.
    pub fn drain(&mut self) -> Vec<(log::Level, String)> {
        std::iter::from_fn(|| self.guard.pop())
            .map(|record| (record.level(), record.args().to_string()))
            .collect()
    }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }

/// Grid of dark and light modules standing in for a rendered symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub text: String,
    pub side: usize,
}

#[derive(Debug)]
pub struct Unreadable;

impl fmt::Display for Unreadable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("symbol unreadable") }
}

impl std::error::Error for Unreadable {}

/// Codec that keeps the carrier text inside the raster.
pub struct MemoryCodec;

impl ImageEncoder for MemoryCodec {
    type Image = Raster;
    type Error = Unreadable;

    fn encode(&self, text: &str, options: &RenderOptions) -> Result<Raster, Unreadable> {
        // 21 modules per side is the smallest QR version.
        Ok(Raster {
            text: text.to_owned(),
            side: options.image_side(21),
        })
    }
}

impl ImageDecoder for MemoryCodec {
    type Image = Raster;
    type Error = Unreadable;

    fn decode(&self, image: &Raster) -> Result<String, Unreadable> {
        if image.text.is_empty() {
            return Err(Unreadable);
        }
        Ok(image.text.clone())
    }
}
