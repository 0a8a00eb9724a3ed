//! Shared helpers for the leddisplay integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use leddisplay::sink::{MemoryDebugSink, MockSink};
use leddisplay::{Display, PixelColor, SessionConfig};
use std::sync::Arc;
use std::time::Duration;

pub const RED: PixelColor = PixelColor::new(200, 0, 0);
pub const DIM_RED: PixelColor = PixelColor::new(100, 0, 0);
pub const TEST_TICK: Duration = Duration::from_millis(5);

pub fn test_config(width: usize, height: usize) -> SessionConfig {
    SessionConfig::default()
        .with_size(width, height)
        .with_tick_interval(TEST_TICK)
        .with_debug_output(true)
}

/// A debug-enabled display that is not connected yet.
pub fn display(width: usize, height: usize) -> (Display, MemoryDebugSink) {
    let debug = MemoryDebugSink::new();
    let display = Display::with_debug_sink(test_config(width, height), Arc::new(debug.clone()));
    (display, debug)
}

/// A display connected to a recording sink.
pub fn connected_display(width: usize, height: usize) -> (Display, MockSink) {
    let (mut display, _) = display(width, height);
    let sink = MockSink::new();
    display
        .connect_with_sink(Box::new(sink.clone()))
        .expect("fresh display connects");
    (display, sink)
}

pub fn all_off(display: &Display) -> bool {
    let (width, height) = (display.config().width, display.config().height);
    (0..height).all(|y| (0..width).all(|x| !display.led_is_on(x, y).unwrap()))
}
