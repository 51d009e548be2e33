// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Screen capture capability surface.
//!
//! The bridge core does not talk to a display itself; it consumes a
//! [`ScreenCapture`] capability that produces raw pixel buffers for the fixed
//! capture rectangle. How those pixels are obtained (X11, a compositor
//! portal, a synthetic test pattern) is the adapter's business. Adapters that
//! need a live display connection should acquire it in their constructor and
//! fail there, so an unusable display surfaces as a startup error instead of
//! a broken session.

use bytes::BytesMut;

use crate::error::Result;

/// One captured frame of the fixed rectangle.
///
/// `data` holds `stride * height` bytes of 32-bit pixels in the capture
/// layout (`0x00RRGGBB` in the low 24 bits, high byte unspecified). Frames
/// are captured fresh per snapshot request and discarded after transmission.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Width of the rectangle in pixels.
    pub width: u16,
    /// Height of the rectangle in pixels.
    pub height: u16,
    /// Bytes per captured row; at least `width * 4`.
    pub stride: usize,
    /// Raw pixel bytes, `stride * height` long.
    pub data: BytesMut,
}

impl Frame {
    /// Checks the buffer-size invariant: `data.len() == stride * height`
    /// and a whole number of 32-bit pixel words.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.stride * usize::from(self.height) && self.data.len() % 4 == 0
    }
}

/// Capability that captures the fixed screen rectangle.
pub trait ScreenCapture {
    /// Captures the rectangle into a fresh [`Frame`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::BridgeError::Capture`] if the capture fails. The
    /// server also treats a frame that violates the size invariant as a
    /// capture failure and ends the session.
    fn capture(&mut self) -> Result<Frame>;
}
