use crate::color::PixelColor;
use crate::error::{DisplayError, Result};
use crate::led::LedCell;

/// A fixed-size matrix of LEDs addressed by `(x, y)`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    width: usize,
    height: usize,
    cells: Vec<LedCell>,
}

impl DisplayGrid {
    pub fn new(width: usize, height: usize) -> Self {
        DisplayGrid {
            width,
            height,
            cells: vec![LedCell::new(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(DisplayError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&LedCell> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut LedCell> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Turns every LED completely off.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.turn_off();
        }
    }

    /// Resolves every cell at the same timestamp.
    pub fn sample(&self, timestamp_ms: u64) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            timestamp_ms,
            pixels: self.cells.iter().map(|c| c.color_at(timestamp_ms)).collect(),
        }
    }
}

/// The resolved colors of a whole grid at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    timestamp_ms: u64,
    pixels: Vec<PixelColor>,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn get(&self, x: usize, y: usize) -> Option<PixelColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Yields `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, PixelColor)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &color)| (i % width, i / width, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut grid = DisplayGrid::new(64, 32);
        assert_eq!(
            grid.cell(64, 0).unwrap_err(),
            DisplayError::OutOfBounds {
                x: 64,
                y: 0,
                width: 64,
                height: 32
            }
        );
        assert!(grid.cell_mut(0, 32).is_err());
        assert!(grid.cell(63, 31).is_ok());
    }

    #[test]
    fn cells_are_addressed_independently() {
        let mut grid = DisplayGrid::new(4, 3);
        grid.cell_mut(3, 0).unwrap().set_color(PixelColor::new(1, 0, 0));
        grid.cell_mut(0, 2).unwrap().set_color(PixelColor::new(0, 2, 0));

        assert!(grid.cell(3, 0).unwrap().is_on());
        assert!(grid.cell(0, 2).unwrap().is_on());
        assert!(!grid.cell(0, 0).unwrap().is_on());
        assert!(!grid.cell(2, 1).unwrap().is_on());
    }

    #[test]
    fn clear_turns_every_cell_off() {
        let mut grid = DisplayGrid::new(8, 4);
        for y in 0..4 {
            for x in 0..8 {
                let cell = grid.cell_mut(x, y).unwrap();
                cell.set_color(PixelColor::new(9, 9, 9));
                cell.add_blink_period(100 + x as i32);
            }
        }
        grid.clear();
        for y in 0..4 {
            for x in 0..8 {
                let cell = grid.cell(x, y).unwrap();
                assert!(!cell.is_on());
                assert!(!cell.is_blinking());
            }
        }
    }

    #[test]
    fn sample_uses_one_timestamp_for_every_cell() {
        let mut grid = DisplayGrid::new(3, 2);
        let color = PixelColor::new(0, 0, 50);
        grid.cell_mut(0, 0).unwrap().set_color(color);
        grid.cell_mut(2, 1).unwrap().set_color(color);
        grid.cell_mut(2, 1).unwrap().add_blink_period(1000);

        let dark = grid.sample(250);
        assert_eq!(dark.timestamp_ms(), 250);
        assert_eq!(dark.get(0, 0), Some(color));
        assert_eq!(dark.get(2, 1), Some(BLACK));

        let lit = grid.sample(750);
        assert_eq!(lit.get(2, 1), Some(color));
        assert_eq!(lit.get(3, 0), None);
    }

    #[test]
    fn frame_pixels_cover_every_cell_once() {
        let grid = DisplayGrid::new(5, 3);
        let frame = grid.sample(0);
        let coords: Vec<_> = frame.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords.len(), 15);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[5], (0, 1));
        assert_eq!(coords[14], (4, 2));
    }
}
