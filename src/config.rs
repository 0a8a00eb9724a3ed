use std::time::Duration;

pub static DEFAULT_WIDTH: usize = 64;
pub static DEFAULT_HEIGHT: usize = 32;
pub static DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50); // 20 fps

/// Settings resolved once when a session connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub tick_interval: Duration,
    /// Write status lines to the debug sink.
    pub debug_output: bool,
    /// Drive the panel sink instead of discarding frames.
    pub graphical_output: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            debug_output: false,
            graphical_output: false,
        }
    }
}

impl SessionConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_debug_output(mut self, enabled: bool) -> Self {
        self.debug_output = enabled;
        self
    }

    pub fn with_graphical_output(mut self, enabled: bool) -> Self {
        self.graphical_output = enabled;
        self
    }
}
