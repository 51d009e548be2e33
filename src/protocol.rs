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

//! Framebuffer-bridge wire protocol constants and command frames.
//!
//! This module provides the building blocks for the bridge's binary command
//! protocol: opcode constants, the fixed frame size, and the [`Command`] type
//! that a raw frame decodes into.
//!
//! # Protocol Overview
//!
//! Every client request is exactly [`FRAME_LEN`] bytes. Byte 0 carries the
//! opcode; bytes 1-7 are opcode-specific payload, and unused trailing bytes
//! are ignored. There is no length field, no terminator, and no escaping:
//! frame boundaries are implicit and fixed, so a client that sends a partial
//! or extra byte desynchronizes every subsequent frame on that connection.
//! Multi-byte payload fields are big-endian.

/// Length of every command frame in bytes.
///
/// The server reads exactly this many bytes per dispatch cycle. There is no
/// resynchronization mechanism; both sides must honor the fixed size.
pub const FRAME_LEN: usize = 8;

// Command opcodes (frame byte 0)

/// Opcode: client requests a framebuffer snapshot.
///
/// Bytes 1-7 are unused. The server replies with a raw pixel dump of the
/// capture rectangle in wire format, with no header and no length prefix;
/// the client is expected to know the dimensions out of band.
pub const OPCODE_SNAPSHOT: u8 = b'S';

/// Opcode: client injects a keyboard event.
///
/// Byte 1 is the direction flag (0 = release, nonzero = press) and
/// bytes 2-3 carry a 16-bit big-endian keysym value.
pub const OPCODE_KEY: u8 = b'K';

/// Opcode: client injects a pointer-button event.
///
/// Byte 1 is the direction flag and byte 2 the button index.
pub const OPCODE_BUTTON: u8 = b'C';

/// Opcode: client injects an absolute pointer motion.
///
/// Bytes 1-2 carry the x coordinate and bytes 3-4 the y coordinate, both
/// 16-bit big-endian.
pub const OPCODE_MOTION: u8 = b'M';

/// A decoded command frame.
///
/// Every 8-byte frame decodes into exactly one of these variants. Opcodes
/// outside the recognized set decode to [`Command::Ignored`], which the
/// dispatcher drops without reporting an error to the client. The variant
/// exists so that "silently ignored" is a named outcome rather than a missing
/// match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Capture the fixed rectangle and stream it back in wire pixel format.
    Snapshot,

    /// Inject a key press or release.
    Key {
        /// True if the key is pressed, false if released.
        down: bool,
        /// Keysym value to be mapped to a host keycode before injection.
        keysym: u16,
    },

    /// Inject a pointer-button press or release.
    Button {
        /// True if the button is pressed, false if released.
        down: bool,
        /// Button index as understood by the host injection layer.
        button: u8,
    },

    /// Move the pointer to an absolute position.
    Motion {
        /// X coordinate.
        x: u16,
        /// Y coordinate.
        y: u16,
    },

    /// Unrecognized opcode; carries the raw opcode byte for diagnostics.
    Ignored(u8),
}

impl Command {
    /// Decodes one fixed-size command frame.
    ///
    /// Decoding cannot fail: unknown opcodes map to [`Command::Ignored`] and
    /// unused trailing payload bytes are not inspected.
    #[must_use]
    pub fn decode(frame: &[u8; FRAME_LEN]) -> Self {
        match frame[0] {
            OPCODE_SNAPSHOT => Command::Snapshot,
            OPCODE_KEY => Command::Key {
                down: frame[1] != 0,
                keysym: u16::from_be_bytes([frame[2], frame[3]]),
            },
            OPCODE_BUTTON => Command::Button {
                down: frame[1] != 0,
                button: frame[2],
            },
            OPCODE_MOTION => Command::Motion {
                x: u16::from_be_bytes([frame[1], frame[2]]),
                y: u16::from_be_bytes([frame[3], frame[4]]),
            },
            other => Command::Ignored(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snapshot_ignores_payload() {
        let frame = [OPCODE_SNAPSHOT, 0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03];
        assert_eq!(Command::decode(&frame), Command::Snapshot);
    }

    #[test]
    fn test_decode_key_down() {
        let frame = [OPCODE_KEY, 0x01, 0x00, 0x41, 0, 0, 0, 0];
        assert_eq!(
            Command::decode(&frame),
            Command::Key {
                down: true,
                keysym: 0x0041
            }
        );
    }

    #[test]
    fn test_decode_key_up_big_endian_keysym() {
        let frame = [OPCODE_KEY, 0x00, 0xff, 0x0d, 0, 0, 0, 0];
        assert_eq!(
            Command::decode(&frame),
            Command::Key {
                down: false,
                keysym: 0xff0d
            }
        );
    }

    #[test]
    fn test_decode_key_any_nonzero_direction_is_down() {
        let frame = [OPCODE_KEY, 0x7f, 0x00, 0x61, 0, 0, 0, 0];
        assert_eq!(
            Command::decode(&frame),
            Command::Key {
                down: true,
                keysym: 0x0061
            }
        );
    }

    #[test]
    fn test_decode_button() {
        let frame = [OPCODE_BUTTON, 0x01, 0x03, 0, 0, 0, 0, 0];
        assert_eq!(
            Command::decode(&frame),
            Command::Button {
                down: true,
                button: 3
            }
        );
    }

    #[test]
    fn test_decode_motion_big_endian_coordinates() {
        let frame = [OPCODE_MOTION, 0x12, 0x34, 0x01, 0x02, 0, 0, 0];
        assert_eq!(
            Command::decode(&frame),
            Command::Motion {
                x: 0x1234,
                y: 0x0102
            }
        );
    }

    #[test]
    fn test_decode_unknown_opcode() {
        let frame = [0x00, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(Command::decode(&frame), Command::Ignored(0x00));

        let frame = [b'Z', 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(Command::decode(&frame), Command::Ignored(b'Z'));
    }
}
