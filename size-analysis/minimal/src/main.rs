#![no_std]
#![no_main]

use core::convert::Infallible;
use cortex_m_rt::entry;
use dotstar_strip::{ChannelOrder, EndFrame, FrameBus, Strip, StripConfig, Transaction, colors};
use palette::Srgb;
use panic_halt as _;

// ============================================================================
// Minimal Bus Implementation
// ============================================================================

/// Zero-size bus implementation for measuring library overhead
pub struct MinimalBus;

impl FrameBus for MinimalBus {
    type Error = Infallible;

    fn transmit(&mut self, transaction: &Transaction) -> Result<(), Self::Error> {
        core::hint::black_box(transaction);
        Ok(())
    }
}

// ============================================================================
// Test Strips
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_strips() {
    // Short strip, default configuration
    if let Ok(mut strip) = Strip::<_, 8>::new(MinimalBus, 8, ChannelOrder::Grb) {
        let _ = strip.set_pixel(0, 10, 20, 30);
        let _ = strip.set_pixel(7, 255, 0, 128);
        let _ = strip.show();
        strip.clear();
        let _ = strip.show();
        core::hint::black_box(strip);
    }

    // Long strip with brightness and full flush
    let config = StripConfig::new(ChannelOrder::Bgr)
        .brightness(8)
        .end_frame(EndFrame::Extended);

    if let Ok(mut strip) = Strip::<_, 144>::with_config(MinimalBus, 144, config) {
        for i in 0..strip.len() {
            let _ = strip.set_color(i, colors::hue(i as f32 * 2.5));
        }
        let _ = strip.set_color(0, Srgb::new(1.0, 1.0, 1.0));
        let _ = strip.show();
        core::hint::black_box(strip);
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_strips();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
