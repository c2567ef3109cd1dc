//! Integration tests for colors module

mod common;
use common::*;

use dotstar_strip::{ChannelOrder, Srgb, Strip, colors};

#[test]
fn to_rgb8_maps_primaries() {
    assert_eq!(colors::to_rgb8(Srgb::new(1.0, 0.0, 0.0)), [255, 0, 0]);
    assert_eq!(colors::to_rgb8(Srgb::new(0.0, 1.0, 0.0)), [0, 255, 0]);
    assert_eq!(colors::to_rgb8(Srgb::new(0.0, 0.0, 1.0)), [0, 0, 255]);
}

#[test]
fn to_rgb8_clamps_out_of_range() {
    assert_eq!(colors::to_rgb8(Srgb::new(2.0, -1.0, 1.0)), [255, 0, 255]);
}

#[test]
fn hsv_creates_primary_colors() {
    assert_eq!(colors::to_rgb8(colors::hsv(0.0, 1.0, 1.0)), [255, 0, 0]);
    assert_eq!(colors::to_rgb8(colors::hsv(120.0, 1.0, 1.0)), [0, 255, 0]);
    assert_eq!(colors::to_rgb8(colors::hsv(240.0, 1.0, 1.0)), [0, 0, 255]);
}

#[test]
fn hsv_handles_value() {
    assert_eq!(colors::to_rgb8(colors::hsv(0.0, 1.0, 0.0)), [0, 0, 0]);
    assert_eq!(colors::to_rgb8(colors::hsv(0.0, 0.0, 1.0)), [255, 255, 255]);
}

#[test]
fn hue_creates_fully_saturated_colors() {
    assert_eq!(colors::to_rgb8(colors::hue(180.0)), [0, 255, 255]);
    assert_eq!(colors::to_rgb8(colors::hue(60.0)), [255, 255, 0]);
}

#[test]
fn set_color_stores_in_channel_order() {
    let mut strip = Strip::<_, 2>::new(MockBus::new(), 2, ChannelOrder::Grb).unwrap();
    strip.set_color(1, colors::hue(0.0)).unwrap();

    assert_eq!(strip.pixel(1), Some([255, 0, 0]));
    assert_eq!(strip.buffer().pixel(1), Some([0, 255, 0]));
}
