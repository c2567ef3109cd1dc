//! Strip configuration.

use crate::bus::DEFAULT_CLOCK_HZ;
use crate::frame::{MAX_BRIGHTNESS, extended_end_frames, pixel_header};
use crate::types::ChannelOrder;

/// How many end frames follow the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndFrame {
    /// A single 4-byte end frame regardless of strip length.
    ///
    /// Supplies 32 trailing clock edges, enough to latch strips of up to 64
    /// LEDs. Longer strips may show the previous color on their tail until the
    /// next refresh.
    #[default]
    Fixed,

    /// `ceil(len / 64)` end frames (at least one), enough for any length.
    ///
    /// Changes the number of transactions per refresh for strips longer than
    /// 64 LEDs.
    Extended,
}

impl EndFrame {
    /// Number of end frames to send for a strip of `pixel_count` LEDs.
    #[inline]
    pub const fn frame_count(self, pixel_count: usize) -> usize {
        match self {
            EndFrame::Fixed => 1,
            EndFrame::Extended => extended_end_frames(pixel_count),
        }
    }
}

/// Strip configuration, built with chained setters.
///
/// The defaults reproduce the classic DotStar refresh: 8 MHz clock, full
/// header byte (`0xFF`), one end frame.
///
/// ```
/// use dotstar_strip::{ChannelOrder, EndFrame, StripConfig};
///
/// let config = StripConfig::new(ChannelOrder::Grb)
///     .brightness(16)
///     .end_frame(EndFrame::Extended);
/// assert_eq!(config.header(), 0xF0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    order: ChannelOrder,
    clock_hz: u32,
    brightness: u8,
    end_frame: EndFrame,
}

impl StripConfig {
    /// Creates the default configuration for the given channel order.
    pub const fn new(order: ChannelOrder) -> Self {
        Self {
            order,
            clock_hz: DEFAULT_CLOCK_HZ,
            brightness: MAX_BRIGHTNESS,
            end_frame: EndFrame::Fixed,
        }
    }

    /// Sets the bus clock rate in Hz.
    pub const fn clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Sets the 5-bit global brightness (0-31, higher values are clamped).
    ///
    /// Default is 31, which yields the `0xFF` header.
    pub const fn brightness(mut self, level: u8) -> Self {
        self.brightness = if level > MAX_BRIGHTNESS {
            MAX_BRIGHTNESS
        } else {
            level
        };
        self
    }

    /// Sets the end-frame policy. Default is [`EndFrame::Fixed`].
    pub const fn end_frame(mut self, end_frame: EndFrame) -> Self {
        self.end_frame = end_frame;
        self
    }

    /// Channel order.
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Clock rate in Hz.
    pub const fn clock_rate(&self) -> u32 {
        self.clock_hz
    }

    /// Brightness level (0-31).
    pub const fn brightness_level(&self) -> u8 {
        self.brightness
    }

    /// End-frame policy.
    pub const fn end_frame_policy(&self) -> EndFrame {
        self.end_frame
    }

    /// Pixel header byte for the configured brightness.
    pub const fn header(&self) -> u8 {
        pixel_header(self.brightness)
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(ChannelOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_refresh() {
        let config = StripConfig::new(ChannelOrder::Rgb);
        assert_eq!(config.clock_rate(), 8_000_000);
        assert_eq!(config.header(), 0xFF);
        assert_eq!(config.end_frame_policy(), EndFrame::Fixed);
    }

    #[test]
    fn brightness_is_clamped() {
        let config = StripConfig::default().brightness(99);
        assert_eq!(config.brightness_level(), 31);
        assert_eq!(config.header(), 0xFF);
    }

    #[test]
    fn fixed_end_frame_ignores_length() {
        assert_eq!(EndFrame::Fixed.frame_count(1), 1);
        assert_eq!(EndFrame::Fixed.frame_count(1000), 1);
        assert_eq!(EndFrame::Extended.frame_count(1000), 16);
    }
}
