//! Core types shared by the pixel buffer and the strip renderer.

/// How logical (r, g, b) channels are laid out in the pixel buffer.
///
/// Must match the wiring of the LED chipset; the stored order is also the
/// order in which channel bytes go out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    /// Stored as (r, g, b).
    Rgb,

    /// Stored as (g, r, b).
    Grb,

    /// Stored as (b, g, r). Most APA102 parts ship wired this way.
    #[default]
    Bgr,
}

impl ChannelOrder {
    /// Permutes logical `(r, g, b)` into storage order.
    #[inline]
    pub const fn arrange(self, r: u8, g: u8, b: u8) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => [r, g, b],
            ChannelOrder::Grb => [g, r, b],
            ChannelOrder::Bgr => [b, g, r],
        }
    }

    /// Inverse of [`arrange`](Self::arrange): recovers `(r, g, b)` from stored bytes.
    #[inline]
    pub const fn restore(self, stored: [u8; 3]) -> [u8; 3] {
        let [c0, c1, c2] = stored;
        match self {
            ChannelOrder::Rgb => [c0, c1, c2],
            ChannelOrder::Grb => [c1, c0, c2],
            ChannelOrder::Bgr => [c2, c1, c0],
        }
    }
}

/// Raw order values as used by scripting front-ends: RGB=0, GRB=1, BGR=2.
impl TryFrom<u8> for ChannelOrder {
    type Error = BufferError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ChannelOrder::Rgb),
            1 => Ok(ChannelOrder::Grb),
            2 => Ok(ChannelOrder::Bgr),
            other => Err(BufferError::UnsupportedChannelOrder(other)),
        }
    }
}

impl From<ChannelOrder> for u8 {
    fn from(order: ChannelOrder) -> Self {
        match order {
            ChannelOrder::Rgb => 0,
            ChannelOrder::Grb => 1,
            ChannelOrder::Bgr => 2,
        }
    }
}

/// Which frame of a `show()` pass a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// The all-zero start marker.
    Start,

    /// Pixel frame for the given strip index.
    Pixel(usize),

    /// End/flush frame; the index counts from 0 when more than one is sent.
    End(usize),
}

impl core::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameKind::Start => write!(f, "start frame"),
            FrameKind::Pixel(index) => write!(f, "pixel frame {}", index),
            FrameKind::End(index) => write!(f, "end frame {}", index),
        }
    }
}

/// Pixel buffer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Requested strip length does not fit the buffer capacity.
    Allocation {
        /// Pixels requested.
        requested: usize,
        /// Pixels the buffer can hold.
        capacity: usize,
    },

    /// A strip must have at least one pixel.
    EmptyStrip,

    /// Pixel index outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },

    /// Raw channel order value not recognized.
    UnsupportedChannelOrder(u8),
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::Allocation {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "cannot allocate {} pixels, buffer capacity is {}",
                    requested, capacity
                )
            }
            BufferError::EmptyStrip => {
                write!(f, "strip must have at least one pixel")
            }
            BufferError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for strip of {}", index, len)
            }
            BufferError::UnsupportedChannelOrder(raw) => {
                write!(f, "unsupported channel order {}", raw)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: [ChannelOrder; 3] = [ChannelOrder::Rgb, ChannelOrder::Grb, ChannelOrder::Bgr];

    #[test]
    fn arrange_permutes_channels() {
        assert_eq!(ChannelOrder::Rgb.arrange(1, 2, 3), [1, 2, 3]);
        assert_eq!(ChannelOrder::Grb.arrange(1, 2, 3), [2, 1, 3]);
        assert_eq!(ChannelOrder::Bgr.arrange(1, 2, 3), [3, 2, 1]);
    }

    #[test]
    fn restore_undoes_arrange() {
        for order in ORDERS {
            assert_eq!(order.restore(order.arrange(10, 20, 30)), [10, 20, 30]);
        }
    }

    #[test]
    fn raw_order_values() {
        for order in ORDERS {
            assert_eq!(ChannelOrder::try_from(u8::from(order)), Ok(order));
        }
        assert_eq!(
            ChannelOrder::try_from(3),
            Err(BufferError::UnsupportedChannelOrder(3))
        );
    }
}
