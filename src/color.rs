/// An RGB triple. A color counts as "on" when any channel is non-zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const BLACK: PixelColor = PixelColor::new(0, 0, 0);

impl PixelColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        PixelColor { red, green, blue }
    }

    /// Builds a color from unchecked integers, saturating each channel
    /// into 0..=255.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        fn channel(v: i32) -> u8 {
            v.max(0).min(255) as u8
        }
        PixelColor::new(channel(red), channel(green), channel(blue))
    }

    pub fn is_on(&self) -> bool {
        self.red != 0 || self.green != 0 || self.blue != 0
    }

    pub fn turn_off(&mut self) {
        *self = BLACK;
    }

    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }
}

impl From<(u8, u8, u8)> for PixelColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        PixelColor::new(red, green, blue)
    }
}
