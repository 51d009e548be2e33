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

//! Pixel format translation from captured frames to the wire format.
//!
//! Captured buffers arrive as 32-bit words with the channel layout
//! `0x00RRGGBB` in the low 24 bits; the high byte is unspecified and ignored.
//! The wire format is `0xAARRGGBB` with red and blue swapped and the alpha
//! byte forced opaque. The conversion is applied word by word over the whole
//! buffer, in place, using direct translation rather than lookup tables;
//! the optimizer turns the per-word expression into a handful of shifts.
//!
//! The transform is one-way and must be applied exactly once per capture.
//! Applying it twice swaps the (already swapped) red and blue channels again
//! and re-forces alpha; it does NOT restore the original word unless the
//! original's high byte happened to be `0xff` already.

/// Converts one captured pixel word into the wire format.
///
/// Red and blue trade byte positions, green stays in place, and the high
/// byte becomes `0xff` regardless of its input value.
#[inline]
#[must_use]
pub fn wire_pixel(px: u32) -> u32 {
    (px & 0x0000_00ff) << 16
        | (px & 0x0000_ff00)
        | (px & 0x00ff_0000) >> 16
        | 0xff00_0000
}

/// Translates a captured buffer into wire format, in place.
///
/// The buffer is interpreted as `buf.len() / 4` native-order 32-bit words;
/// [`wire_pixel`] is applied to each. A trailing partial word (fewer than 4
/// bytes) is left untouched and never read.
pub fn translate_frame(buf: &mut [u8]) {
    for chunk in buf.chunks_exact_mut(4) {
        let px = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.copy_from_slice(&wire_pixel(px).to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_always_forced_opaque() {
        for px in [0x0000_0000, 0x00ab_cdef, 0x1234_5678, 0xffff_ffff] {
            assert_eq!(wire_pixel(px) & 0xff00_0000, 0xff00_0000);
        }
    }

    #[test]
    fn test_red_blue_swapped_green_unchanged() {
        // Input layout 0x00RRGGBB, output layout 0xAABBGGRR relative to it:
        // the input's red byte lands in the output's low byte and vice versa.
        let out = wire_pixel(0x00ab_cdef);
        assert_eq!((out >> 16) & 0xff, 0xef); // input blue, now at red's slot
        assert_eq!((out >> 8) & 0xff, 0xcd); // green unchanged
        assert_eq!(out & 0xff, 0xab); // input red, now at blue's slot
    }

    #[test]
    fn test_high_byte_of_input_is_ignored() {
        assert_eq!(wire_pixel(0x00ab_cdef), wire_pixel(0x77ab_cdef));
    }

    #[test]
    fn test_double_application_is_not_a_round_trip() {
        // Applying the transform twice swaps the low 24 bits back and forces
        // alpha, so the exact result of transform(transform(0x12abcdef)) is
        // 0xffabcdef: the original low 24 bits with an opaque high byte, not
        // the original word.
        let once = wire_pixel(0x12ab_cdef);
        assert_eq!(once, 0xffef_cdab);
        let twice = wire_pixel(once);
        assert_eq!(twice, 0xffab_cdef);
        assert_ne!(twice, 0x12ab_cdef);

        // Only inputs whose high byte is already 0xff survive unchanged.
        assert_eq!(wire_pixel(wire_pixel(0xffab_cdef)), 0xffab_cdef);
    }

    #[test]
    fn test_translate_frame_in_place() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0x00ab_cdefu32.to_ne_bytes());
        buf.extend_from_slice(&0x0011_2233u32.to_ne_bytes());

        translate_frame(&mut buf);

        assert_eq!(&buf[0..4], &0xffef_cdabu32.to_ne_bytes());
        assert_eq!(&buf[4..8], &0xff33_2211u32.to_ne_bytes());
    }

    #[test]
    fn test_trailing_partial_word_untouched() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0x0000_0000u32.to_ne_bytes());
        buf.extend_from_slice(&[0x0a, 0x0b, 0x0c]); // 3 trailing bytes

        translate_frame(&mut buf);

        assert_eq!(&buf[0..4], &0xff00_0000u32.to_ne_bytes());
        assert_eq!(&buf[4..7], &[0x0a, 0x0b, 0x0c]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        translate_frame(&mut buf);
    }
}
