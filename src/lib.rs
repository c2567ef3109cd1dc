#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Strip`**: Owns the pixel buffer and the bus, and refreshes the LEDs on `show()`
//! - **`PixelBuffer`**: Fixed-capacity, channel-interleaved storage for pixel bytes
//! - **`ChannelOrder`**: How `(r, g, b)` maps to stored/transmitted byte order (`Rgb`, `Grb`, `Bgr`)
//! - **`StripConfig`**: Clock rate, brightness header and end-frame policy
//! - **`FrameBus`**: Trait to implement for your SPI hardware (or use `HalBus`)
//! - **`FrameSequence`**: The exact frames a refresh transmits, for inspection
//!
//! A refresh is `len() + 2` four-byte transactions with the default configuration:
//! a zero start frame, one `[0xFF, c0, c1, c2]` frame per pixel in index order, and a
//! `[0xFF; 4]` end frame, each at 8 MHz with chip-select disabled.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod buffer;
pub mod bus;
pub mod colors;
pub mod config;
pub mod frame;
pub mod strip;
pub mod types;

pub use buffer::PixelBuffer;
pub use bus::{ChipSelect, DEFAULT_CLOCK_HZ, FrameBus, HalBus, SpiMode, Transaction};
pub use config::{EndFrame, StripConfig};
pub use frame::{END_FRAME, Frame, FrameSequence, START_FRAME};
pub use strip::{BusError, Strip, StripError};
pub use types::{BufferError, ChannelOrder, FrameKind};

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - actual functionality tests live in each module
    #[test]
    fn types_compile() {
        let _ = ChannelOrder::Rgb;
        let _ = ChannelOrder::Grb;
        let _ = ChannelOrder::Bgr;
        let _ = EndFrame::Fixed;
        let _ = EndFrame::Extended;
    }
}
