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


//! # fbbridge
//!
//! A minimal remote-framebuffer bridge.
//!
//! This library exposes a local display surface over a TCP socket: it streams
//! raw pixel snapshots of a fixed capture rectangle to a single connected
//! client, and accepts a small fixed-size binary command set that injects
//! synthetic keyboard, button, and pointer-motion events back into the
//! display. It serves one consumer at a time, such as a remote-control or
//! screen-mirroring client.
//!
//! ## Features
//!
//! - **8-byte command frames**: snapshot, key, button, and motion opcodes
//!   with fixed framing and big-endian payload fields
//! - **Wire pixel format**: captured `0x00RRGGBB` words become `0xAARRGGBB`
//!   with red/blue swapped and alpha forced opaque
//! - **Capability-based host access**: screen capture and input injection are
//!   traits the embedding application implements
//! - **Async I/O**: built on Tokio, with strictly serial client sessions
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::BytesMut;
//! use fbbridge::{BridgeServer, Frame, InputInjector, Keycode, Result, ScreenCapture};
//!
//! /// Captures a black 800x600 test surface.
//! struct BlackScreen;
//!
//! impl ScreenCapture for BlackScreen {
//!     fn capture(&mut self) -> Result<Frame> {
//!         let (width, height) = (fbbridge::DEFAULT_WIDTH, fbbridge::DEFAULT_HEIGHT);
//!         let stride = usize::from(width) * 4;
//!         Ok(Frame {
//!             width,
//!             height,
//!             stride,
//!             data: BytesMut::zeroed(stride * usize::from(height)),
//!         })
//!     }
//! }
//!
//! /// Discards all injected input.
//! struct NullInjector;
//!
//! impl InputInjector for NullInjector {
//!     fn map_keysym(&self, _keysym: u16) -> Option<Keycode> {
//!         None
//!     }
//!     fn key_event(&mut self, _keycode: Keycode, _down: bool) {}
//!     fn button_event(&mut self, _button: u8, _down: bool) {}
//!     fn motion_event(&mut self, _x: u16, _y: u16) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut server = BridgeServer::new(BlackScreen, NullInjector);
//!     server.listen(fbbridge::DEFAULT_PORT).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           Your Application              │
//! │                                         │
//! │  • Implement ScreenCapture              │
//! │  • Implement InputInjector              │
//! │  • Control server lifecycle             │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        BridgeServer (Public)            │
//! │                                         │
//! │  • TCP listener, one session at a time  │
//! │  • 8-byte command frame dispatch        │
//! └────────┬───────────────────┬────────────┘
//!          │                   │
//!          ▼                   ▼
//! ┌────────────────┐  ┌────────────────────┐
//! │ Pixel translate│  │ Injection calls    │
//! │ (wire format)  │  │ (key/button/motion)│
//! └────────┬───────┘  └────────────────────┘
//!          │
//!          ▼
//!    raw socket write, no header
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod error;
pub mod inject;
pub mod protocol;
pub mod server;

// Internal modules
mod translate;

// Re-exports
pub use capture::{Frame, ScreenCapture};
pub use error::{BridgeError, Result};
pub use inject::{InputInjector, Keycode};
pub use protocol::{Command, FRAME_LEN};
pub use server::BridgeServer;
pub use translate::{translate_frame, wire_pixel};

/// Default bridge port.
pub const DEFAULT_PORT: u16 = 30002;

/// Default capture rectangle width in pixels.
pub const DEFAULT_WIDTH: u16 = 800;

/// Default capture rectangle height in pixels.
pub const DEFAULT_HEIGHT: u16 = 600;
