//! APA102 strip driver.
//!
//! Provides [`Strip`], which owns a [`PixelBuffer`] and a [`FrameBus`] and
//! pushes the buffer out as a complete frame sequence on [`Strip::show`].
//! Buffer writes never touch the bus.

use crate::buffer::PixelBuffer;
use crate::bus::{FrameBus, Transaction};
use crate::colors;
use crate::config::StripConfig;
use crate::frame::FrameSequence;
use crate::types::{BufferError, ChannelOrder, FrameKind};
use palette::Srgb;

/// A bus transaction failed during [`Strip::show`].
///
/// Frames before `frame` were sent; nothing after it was attempted. The strip
/// displays a partial update until the next successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusError<E> {
    /// The frame whose transaction failed.
    pub frame: FrameKind,
    /// Error reported by the bus.
    pub source: E,
}

impl<E: core::fmt::Debug> core::fmt::Display for BusError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "bus transaction failed at {}: {:?}", self.frame, self.source)
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for BusError<E> {}

/// Any error a strip operation can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError<E> {
    /// Buffer creation or access failed.
    Buffer(BufferError),

    /// Bus transaction failed.
    Bus(BusError<E>),
}

impl<E: core::fmt::Debug> core::fmt::Display for StripError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::Buffer(err) => write!(f, "buffer error: {}", err),
            StripError::Bus(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for StripError<E> {}

impl<E> From<BufferError> for StripError<E> {
    fn from(err: BufferError) -> Self {
        StripError::Buffer(err)
    }
}

impl<E> From<BusError<E>> for StripError<E> {
    fn from(err: BusError<E>) -> Self {
        StripError::Bus(err)
    }
}

/// An APA102/DotStar strip of up to `N` pixels.
///
/// The strip owns its bus for its whole lifetime, so no other traffic can land
/// between the frames of a refresh. Both buffer writes and [`show`](Self::show)
/// take `&mut self`; sharing a strip between execution contexts needs an
/// external lock, otherwise a write racing a refresh would emit a torn frame.
///
/// # Type Parameters
/// * `B` - Bus implementation type
/// * `N` - Maximum number of pixels
pub struct Strip<B: FrameBus, const N: usize> {
    bus: B,
    buffer: PixelBuffer<N>,
    config: StripConfig,
}

impl<B: FrameBus, const N: usize> Strip<B, N> {
    /// Creates a cleared strip with the default configuration for `order`.
    ///
    /// # Errors
    /// * `EmptyStrip` - `pixel_count` is zero
    /// * `Allocation` - `pixel_count` exceeds `N`
    pub fn new(bus: B, pixel_count: usize, order: ChannelOrder) -> Result<Self, BufferError> {
        Self::with_config(bus, pixel_count, StripConfig::new(order))
    }

    /// Creates a cleared strip with an explicit configuration.
    pub fn with_config(
        bus: B,
        pixel_count: usize,
        config: StripConfig,
    ) -> Result<Self, BufferError> {
        let buffer = PixelBuffer::new(pixel_count)?;

        Ok(Self {
            bus,
            buffer,
            config,
        })
    }

    /// Sets one pixel in memory. Takes effect on the next [`show`](Self::show).
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), BufferError> {
        self.buffer.set_pixel(index, r, g, b, self.config.order())
    }

    /// Like [`set_pixel`](Self::set_pixel), keeping only the low 8 bits of each channel.
    ///
    /// `256` stores `0`, `-1` stores `255`.
    pub fn set_pixel_wrapping(
        &mut self,
        index: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), BufferError> {
        self.set_pixel(index, r as u8, g as u8, b as u8)
    }

    /// Sets one pixel from a floating-point color (components clamped to 0.0-1.0).
    pub fn set_color(&mut self, index: usize, color: Srgb) -> Result<(), BufferError> {
        let [r, g, b] = colors::to_rgb8(color);
        self.set_pixel(index, r, g, b)
    }

    /// Sets every pixel to the same color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        self.buffer.fill(r, g, b, self.config.order());
    }

    /// Turns every pixel off in memory.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the logical `(r, g, b)` of one pixel.
    pub fn pixel(&self, index: usize) -> Option<[u8; 3]> {
        self.buffer
            .pixel(index)
            .map(|stored| self.config.order().restore(stored))
    }

    /// Frames a refresh would transmit right now, in order.
    pub fn frames(&self) -> FrameSequence<'_> {
        FrameSequence::new(
            &self.buffer,
            self.config.header(),
            self.config.end_frame_policy().frame_count(self.buffer.len()),
        )
    }

    /// Number of bus transactions one refresh performs.
    pub fn transaction_count(&self) -> usize {
        self.frames().len()
    }

    /// Sends the whole buffer to the strip.
    ///
    /// Transmits the start frame, one frame per pixel in index order, then the
    /// end frame(s): `len() + 2` transactions with the default configuration.
    /// Stops at the first failing transaction without retrying.
    pub fn show(&mut self) -> Result<(), BusError<B::Error>> {
        let clock_hz = self.config.clock_rate();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "dotstar: refreshing {} pixels ({} frames)",
            self.buffer.len(),
            self.transaction_count()
        );

        let frames = FrameSequence::new(
            &self.buffer,
            self.config.header(),
            self.config.end_frame_policy().frame_count(self.buffer.len()),
        );

        for (frame, tx) in frames {
            if let Err(source) = self.bus.transmit(&Transaction::new(clock_hz, tx)) {
                #[cfg(feature = "defmt")]
                defmt::warn!("dotstar: refresh aborted at {}", frame);

                return Err(BusError { frame, source });
            }
        }

        Ok(())
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; strips have at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Channel order.
    pub fn channel_order(&self) -> ChannelOrder {
        self.config.order()
    }

    /// Active configuration.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Read-only view of the pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Flat stored bytes, `len() * 3` long, in channel order.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Returns a reference to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Consumes the strip and returns the bus.
    pub fn release(self) -> B {
        self.bus
    }
}
