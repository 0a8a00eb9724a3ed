use crate::color::PixelColor;

/// Consumer of rendered frames. Each frame is delivered as one
/// `begin_frame`, a `set_pixel` for every cell, then `present`.
pub trait PresentationSink {
    fn begin_frame(&mut self);
    fn set_pixel(&mut self, x: usize, y: usize, color: PixelColor);
    fn present(&mut self);
}

/// Receives human-readable status lines while debug output is enabled.
pub trait DebugSink {
    fn write(&self, message: &str);
}

pub type SharedDebugSink = std::sync::Arc<dyn DebugSink + Send + Sync>;

/// Forwards debug lines to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDebugSink;

impl DebugSink for LogDebugSink {
    fn write(&self, message: &str) {
        info!("LEDDISPLAY LIBRARY DEBUG: {}", message);
    }
}
