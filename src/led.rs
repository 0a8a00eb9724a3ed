use crate::color::{PixelColor, BLACK};

/// One position of the matrix: a base color plus the blink periods
/// (in milliseconds) that gate its visibility.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LedCell {
    color: PixelColor,
    blink_periods: Vec<u32>,
}

impl LedCell {
    pub fn new() -> Self {
        LedCell::default()
    }

    pub fn color(&self) -> PixelColor {
        self.color
    }

    pub fn blink_periods(&self) -> &[u32] {
        &self.blink_periods
    }

    pub fn set_color(&mut self, color: PixelColor) {
        self.color = color;
    }

    /// Black and no blinking.
    pub fn turn_off(&mut self) {
        self.disable_blinking();
        self.color.turn_off();
    }

    pub fn add_blink_period(&mut self, period_ms: i32) {
        if period_ms <= 0 {
            info!("Ignoring non-positive blink period of {} ms", period_ms);
            return;
        }
        self.blink_periods.push(period_ms as u32);
    }

    /// Leaves the current color permanently lit.
    pub fn disable_blinking(&mut self) {
        self.blink_periods.clear();
    }

    /// Whether the base color is on, regardless of blink phase.
    pub fn is_on(&self) -> bool {
        self.color.is_on()
    }

    pub fn is_blinking(&self) -> bool {
        !self.blink_periods.is_empty()
    }

    /// Resolves the visible color at `timestamp_ms`.
    ///
    /// Each period is a 50% duty square wave, lit while
    /// `(t + p/2) mod p < p/2`. The periods are OR-ed: the cell shows its
    /// color whenever any one of them is lit.
    pub fn color_at(&self, timestamp_ms: u64) -> PixelColor {
        if !self.is_blinking() {
            return self.color;
        }
        let lit = self.blink_periods.iter().any(|&period| {
            let period = u64::from(period);
            let half = period / 2;
            (timestamp_ms + half) % period < half
        });
        if lit {
            self.color
        } else {
            BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PixelColor = PixelColor::new(200, 0, 0);

    fn lit_by_formula(t: u64, period: u64) -> bool {
        (t + period / 2) % period < period / 2
    }

    #[test]
    fn solid_cell_is_time_invariant() {
        let mut led = LedCell::new();
        led.set_color(RED);
        for t in &[0, 1, 499, 500, 999, 1_000, 123_456_789] {
            assert_eq!(led.color_at(*t), RED);
        }

        let off = LedCell::new();
        for t in &[0, 250, 10_000] {
            assert_eq!(off.color_at(*t), BLACK);
        }
    }

    #[test]
    fn single_period_follows_duty_cycle() {
        let mut led = LedCell::new();
        led.set_color(RED);
        led.add_blink_period(1000);

        let mut lit = 0;
        for t in 0..1000u64 {
            let expected = if lit_by_formula(t, 1000) { RED } else { BLACK };
            assert_eq!(led.color_at(t), expected, "t = {}", t);
            if expected == RED {
                lit += 1;
            }
        }
        assert_eq!(lit, 500);
        assert_eq!(led.color_at(250), BLACK);
        assert_eq!(led.color_at(750), RED);
    }

    #[test]
    fn periods_combine_with_or() {
        let mut led = LedCell::new();
        led.set_color(RED);
        led.add_blink_period(1000);
        led.add_blink_period(300);

        // t = 200: the 1000 ms wave is dark, the 300 ms wave is lit.
        assert!(!lit_by_formula(200, 1000));
        assert!(lit_by_formula(200, 300));
        assert_eq!(led.color_at(200), RED);

        // t = 600: the 1000 ms wave is lit, the 300 ms wave is dark.
        assert!(lit_by_formula(600, 1000));
        assert!(!lit_by_formula(600, 300));
        assert_eq!(led.color_at(600), RED);

        // t = 100: both dark.
        assert_eq!(led.color_at(100), BLACK);
    }

    #[test]
    fn turn_off_clears_color_and_periods() {
        let mut led = LedCell::new();
        led.set_color(RED);
        led.add_blink_period(400);
        led.turn_off();
        assert!(!led.is_on());
        assert!(!led.is_blinking());
        assert_eq!(led.color(), BLACK);
    }

    #[test]
    fn disable_blinking_keeps_color() {
        let mut led = LedCell::new();
        led.set_color(PixelColor::new(1, 2, 3));
        led.add_blink_period(100);
        assert!(led.is_blinking());
        led.disable_blinking();
        assert!(led.is_on());
        assert!(!led.is_blinking());
        assert_eq!(led.color_at(25), PixelColor::new(1, 2, 3));
    }

    #[test]
    fn non_positive_period_is_ignored() {
        let mut led = LedCell::new();
        led.set_color(RED);
        led.add_blink_period(0);
        led.add_blink_period(-250);
        assert!(!led.is_blinking());
        assert!(led.blink_periods().is_empty());
        assert_eq!(led.color(), RED);
    }

    #[test]
    fn set_color_keeps_periods() {
        let mut led = LedCell::new();
        led.add_blink_period(500);
        led.set_color(RED);
        assert_eq!(led.blink_periods(), &[500]);
    }

    #[test]
    fn blinking_black_cell_is_not_on() {
        let mut led = LedCell::new();
        led.add_blink_period(500);
        assert!(led.is_blinking());
        assert!(!led.is_on());
        assert_eq!(led.color_at(400), BLACK);
    }
}
