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

//! Input injection capability surface.
//!
//! Decoded protocol frames are translated into calls on an [`InputInjector`]:
//! keysym mapping, key synthesis, button synthesis, and absolute pointer
//! motion. The bridge core never retries a failed mapping; the event is
//! dropped with a diagnostic and the session continues.

/// A physical-key identifier understood by the host injection layer.
///
/// Obtained by mapping a protocol keysym value; the numeric space is the
/// adapter's (for X11-style hosts this is the 8-bit keycode range).
pub type Keycode = u8;

/// Capability that synthesizes input events on the host.
pub trait InputInjector {
    /// Maps a keysym value to a host keycode.
    ///
    /// Returns `None` when the keysym has no mapping on this host; the
    /// corresponding key event is dropped.
    fn map_keysym(&self, keysym: u16) -> Option<Keycode>;

    /// Synthesizes a key press (`down = true`) or release.
    fn key_event(&mut self, keycode: Keycode, down: bool);

    /// Synthesizes a pointer-button press or release.
    fn button_event(&mut self, button: u8, down: bool);

    /// Moves the pointer to an absolute position.
    fn motion_event(&mut self, x: u16, y: u16);
}
