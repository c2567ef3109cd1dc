//! Bus abstraction for transmitting frames.
//!
//! The strip never touches hardware directly. Each frame is handed to a
//! [`FrameBus`] as a self-describing [`Transaction`], so the same driver runs over
//! an `embedded-hal` SPI peripheral (via [`HalBus`]), a host-side SPI engine, or a
//! recording mock in tests.

use crate::frame::Frame;
use embedded_hal::spi::SpiBus;

/// Clock rate used when none is configured.
pub const DEFAULT_CLOCK_HZ: u32 = 8_000_000;

/// Chip-select handling for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipSelect {
    /// No chip-select line is asserted. APA102 strips have none.
    Disabled,

    /// Assert the given chip-select line for the transaction.
    Line(u8),
}

/// SPI clock polarity/phase mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// CPOL = 0, CPHA = 0.
    Mode0,
    /// CPOL = 0, CPHA = 1.
    Mode1,
    /// CPOL = 1, CPHA = 0.
    Mode2,
    /// CPOL = 1, CPHA = 1.
    Mode3,
}

impl From<SpiMode> for embedded_hal::spi::Mode {
    fn from(mode: SpiMode) -> Self {
        match mode {
            SpiMode::Mode0 => embedded_hal::spi::MODE_0,
            SpiMode::Mode1 => embedded_hal::spi::MODE_1,
            SpiMode::Mode2 => embedded_hal::spi::MODE_2,
            SpiMode::Mode3 => embedded_hal::spi::MODE_3,
        }
    }
}

/// One write-only bus transaction carrying a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transaction {
    /// Chip-select handling.
    pub cs: ChipSelect,

    /// Clock mode.
    pub mode: SpiMode,

    /// Clock rate in Hz.
    pub clock_hz: u32,

    /// Bytes to send, most significant byte first.
    pub tx: Frame,
}

impl Transaction {
    /// Creates a transaction with chip-select disabled and SPI mode 0.
    #[inline]
    pub const fn new(clock_hz: u32, tx: Frame) -> Self {
        Self {
            cs: ChipSelect::Disabled,
            mode: SpiMode::Mode0,
            clock_hz,
            tx,
        }
    }
}

/// Trait for abstracting the synchronous serial bus.
///
/// Implementations must clock out exactly the 4 bytes of `transaction.tx` and
/// return only once they are on the wire (or the transfer failed). Nothing is
/// ever read back.
pub trait FrameBus {
    /// Transfer error type.
    type Error;

    /// Transmits one frame, blocking until done.
    fn transmit(&mut self, transaction: &Transaction) -> Result<(), Self::Error>;
}

impl<T: FrameBus + ?Sized> FrameBus for &mut T {
    type Error = T::Error;

    #[inline]
    fn transmit(&mut self, transaction: &Transaction) -> Result<(), Self::Error> {
        (**self).transmit(transaction)
    }
}

/// [`FrameBus`] over an `embedded-hal` SPI bus.
///
/// The peripheral must already be configured for mode 0 at the strip's clock
/// rate; `embedded-hal` has no way to change either per transfer. Chip-select is
/// ignored since the bus is used without a device wrapper.
#[derive(Debug)]
pub struct HalBus<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus<u8>> HalBus<SPI> {
    /// Wraps an SPI bus.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Returns the wrapped SPI bus.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus<u8>> FrameBus for HalBus<SPI> {
    type Error = SPI::Error;

    fn transmit(&mut self, transaction: &Transaction) -> Result<(), Self::Error> {
        self.spi.write(&transaction.tx)?;
        self.spi.flush()
    }
}
