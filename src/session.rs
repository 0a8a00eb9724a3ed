use crate::color::PixelColor;
use crate::config::SessionConfig;
use crate::error::{DisplayError, Result};
use crate::grid::DisplayGrid;
use crate::led::LedCell;
use crate::scheduler::{BoxedSink, RenderScheduler, SharedGrid};
use crate::sink::{LogDebugSink, NullSink, PanelSink, SharedDebugSink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A display session: the LED grid, its render loop and the connection
/// state. LED calls work whether or not the session is connected; only
/// a connected session renders frames.
pub struct Display {
    config: SessionConfig,
    grid: SharedGrid,
    debug_sink: SharedDebugSink,
    debug_enabled: bool,
    connected: bool,
    scheduler: Option<RenderScheduler>,
}

impl Display {
    pub fn new(config: SessionConfig) -> Self {
        Display::with_debug_sink(config, Arc::new(LogDebugSink))
    }

    pub fn with_debug_sink(config: SessionConfig, debug_sink: SharedDebugSink) -> Self {
        let grid = DisplayGrid::new(config.width, config.height);
        Display {
            config,
            grid: Arc::new(Mutex::new(grid)),
            debug_sink,
            debug_enabled: false,
            connected: false,
            scheduler: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Connects using the panel sink when graphical output is configured,
    /// otherwise frames are rendered into a `NullSink`.
    pub fn connect(&mut self) -> Result<()> {
        if self.connected {
            return Err(DisplayError::AlreadyConnected);
        }
        let sink: BoxedSink = if self.config.graphical_output {
            Box::new(PanelSink::new()?)
        } else {
            Box::new(NullSink)
        };
        self.connect_with_sink(sink)
    }

    pub fn connect_with_sink(&mut self, sink: BoxedSink) -> Result<()> {
        if self.connected {
            return Err(DisplayError::AlreadyConnected);
        }
        if self.config.debug_output {
            self.debug_enabled = true;
        }
        self.connected = true;
        self.debug_write("Display connected!");

        let mut scheduler =
            RenderScheduler::new(Arc::clone(&self.grid), sink, self.config.tick_interval);
        if self.debug_enabled {
            scheduler = scheduler.with_debug_sink(Arc::clone(&self.debug_sink));
        }
        if let Err(e) = scheduler.start() {
            self.connected = false;
            self.debug_enabled = false;
            return Err(e);
        }
        self.scheduler = Some(scheduler);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.debug_write(&format!(
            "Connection status requested! Connected: {}",
            self.connected
        ));
        self.connected
    }

    /// Stops the render loop and releases the sink. Disconnecting also
    /// turns debug output off. A no-op when not connected.
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.connected {
            debug!("Disconnect requested while not connected");
            return Ok(());
        }
        self.debug_write("Going to disconnect!");

        let result = match self.scheduler.take() {
            Some(mut scheduler) => scheduler.stop(),
            None => Ok(()),
        };
        self.connected = false;
        self.debug_enabled = false;
        result
    }

    fn debug_write(&self, message: &str) {
        if self.debug_enabled {
            self.debug_sink.write(message);
        }
    }

    fn lock_grid(&self) -> MutexGuard<'_, DisplayGrid> {
        self.grid.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_cell<T, F>(&self, x: usize, y: usize, f: F) -> Result<T>
    where
        F: FnOnce(&mut LedCell) -> T,
    {
        let mut grid = self.lock_grid();
        grid.cell_mut(x, y).map(f)
    }

    pub fn clear_all(&self) {
        self.lock_grid().clear();
    }

    pub fn led_on(&self, x: usize, y: usize, color: PixelColor) -> Result<()> {
        self.with_cell(x, y, |led| led.set_color(color))
    }

    pub fn led_off(&self, x: usize, y: usize) -> Result<()> {
        self.with_cell(x, y, LedCell::turn_off)
    }

    pub fn led_add_blinking_period(&self, x: usize, y: usize, period_ms: i32) -> Result<()> {
        self.with_cell(x, y, |led| led.add_blink_period(period_ms))
    }

    /// Stops blinking, leaving the LED permanently on in its color.
    pub fn led_disable_blinking(&self, x: usize, y: usize) -> Result<()> {
        self.with_cell(x, y, LedCell::disable_blinking)
    }

    pub fn led_is_blinking(&self, x: usize, y: usize) -> Result<bool> {
        self.with_cell(x, y, |led| led.is_blinking())
    }

    pub fn led_is_on(&self, x: usize, y: usize) -> Result<bool> {
        self.with_cell(x, y, |led| led.is_on())
    }

    /// The base color, ignoring blink phase.
    pub fn led_get_color(&self, x: usize, y: usize) -> Result<PixelColor> {
        self.with_cell(x, y, |led| led.color())
    }

    pub fn led_color_at(&self, x: usize, y: usize, timestamp_ms: u64) -> Result<PixelColor> {
        self.with_cell(x, y, |led| led.color_at(timestamp_ms))
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        if let Err(e) = self.disconnect() {
            warn!("Disconnect on drop failed: {}", e);
        }
    }
}
