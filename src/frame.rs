//! APA102 frame encoding.
//!
//! A full refresh is a start frame of 32 zero bits, one 32-bit frame per pixel
//! (`header`, then the three stored channel bytes), and one or more all-ones
//! end frames that supply the trailing clock edges the last pixels need to latch.
//! Order matters: every pixel frame pushes the previous ones further down the
//! chain, so frames must go out exactly as [`FrameSequence`] yields them.

use crate::buffer::PixelBuffer;
use crate::types::FrameKind;

/// Bytes in every frame.
pub const FRAME_LEN: usize = 4;

/// One 4-byte frame as it goes out on the wire.
pub type Frame = [u8; FRAME_LEN];

/// Start-of-refresh marker.
pub const START_FRAME: Frame = [0x00; FRAME_LEN];

/// End/flush frame.
pub const END_FRAME: Frame = [0xFF; FRAME_LEN];

/// Top three bits of every pixel header are always set.
pub const HEADER_MARKER: u8 = 0xE0;

/// Largest value of the 5-bit global brightness field.
pub const MAX_BRIGHTNESS: u8 = 0x1F;

/// Builds the pixel header byte for a 5-bit brightness level (clamped to 31).
#[inline]
pub const fn pixel_header(brightness: u8) -> u8 {
    let level = if brightness > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        brightness
    };
    HEADER_MARKER | level
}

/// Encodes a pixel frame from its stored channel bytes.
#[inline]
pub const fn pixel_frame(header: u8, stored: [u8; 3]) -> Frame {
    [header, stored[0], stored[1], stored[2]]
}

/// Number of end frames needed for `pixel_count` LEDs when flushing fully.
///
/// The chain delays the clock by half a cycle per LED, so `pixel_count / 2`
/// extra edges are needed; each end frame supplies 32.
#[inline]
pub const fn extended_end_frames(pixel_count: usize) -> usize {
    let frames = pixel_count.div_ceil(64);
    if frames == 0 { 1 } else { frames }
}

/// Iterator over every frame of one refresh, in transmission order.
#[derive(Debug, Clone)]
pub struct FrameSequence<'a> {
    pixels: core::slice::Iter<'a, [u8; 3]>,
    header: u8,
    next_pixel: usize,
    end_frames: usize,
    next_end: usize,
    started: bool,
}

impl<'a> FrameSequence<'a> {
    /// Creates the sequence for `buffer` with the given header and end frame count.
    pub fn new<const N: usize>(buffer: &'a PixelBuffer<N>, header: u8, end_frames: usize) -> Self {
        Self {
            pixels: buffer.iter(),
            header,
            next_pixel: 0,
            end_frames,
            next_end: 0,
            started: false,
        }
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = (FrameKind, Frame);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((FrameKind::Start, START_FRAME));
        }

        if let Some(stored) = self.pixels.next() {
            let index = self.next_pixel;
            self.next_pixel += 1;
            return Some((FrameKind::Pixel(index), pixel_frame(self.header, *stored)));
        }

        if self.next_end < self.end_frames {
            let index = self.next_end;
            self.next_end += 1;
            return Some((FrameKind::End(index), END_FRAME));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(!self.started)
            + self.pixels.len()
            + (self.end_frames - self.next_end);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}
