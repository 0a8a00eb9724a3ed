use super::sink_common::PresentationSink;
use crate::color::PixelColor;
use crate::error::{DisplayError, Result};
use blinkt::Blinkt;

const N_PIXELS: usize = 8;
static BLINKT_BRIGHTNESS: f32 = 0.05;

/// Mirrors the first eight cells of row 0 onto a Pimoroni Blinkt!.
pub struct BlinktSink {
    blinkt: Blinkt,
}

impl BlinktSink {
    pub fn new() -> Result<Self> {
        let mut blinkt = Blinkt::new().map_err(|e| {
            error!("Blinkt::new returned error {:?}", e);
            DisplayError::Sink(format!("{:?}", e))
        })?;
        blinkt.set_clear_on_drop(true);
        blinkt.set_all_pixels_brightness(BLINKT_BRIGHTNESS);
        Ok(BlinktSink { blinkt })
    }
}

impl PresentationSink for BlinktSink {
    fn begin_frame(&mut self) {}

    fn set_pixel(&mut self, x: usize, y: usize, color: PixelColor) {
        if y == 0 && x < N_PIXELS {
            self.blinkt.set_pixel(x, color.red, color.green, color.blue);
        }
    }

    fn present(&mut self) {
        if let Err(e) = self.blinkt.show() {
            error!("Blinkt::show returned error {:?}", e);
        }
    }
}
