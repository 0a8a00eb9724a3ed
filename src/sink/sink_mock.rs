use super::sink_common::{DebugSink, PresentationSink};
use crate::color::PixelColor;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Discards every frame. Used when no graphical output is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn begin_frame(&mut self) {}
    fn set_pixel(&mut self, _x: usize, _y: usize, _color: PixelColor) {}
    fn present(&mut self) {}
}

/// The pixel writes of one presented frame, in arrival order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockFrame {
    pub pixels: Vec<(usize, usize, PixelColor)>,
}

impl MockFrame {
    pub fn color(&self, x: usize, y: usize) -> Option<PixelColor> {
        self.pixels
            .iter()
            .find(|&&(px, py, _)| px == x && py == y)
            .map(|&(_, _, color)| color)
    }
}

#[derive(Debug, Default)]
struct MockState {
    pending: Option<MockFrame>,
    presented: Vec<MockFrame>,
    // writes or presents that arrived outside begin_frame/present
    stray_calls: usize,
}

/// Records presented frames. Clones share the same record, so a test can
/// keep one handle while the scheduler owns another.
#[derive(Debug, Default, Clone)]
pub struct MockSink {
    state: Arc<Mutex<MockState>>,
}

impl MockSink {
    pub fn new() -> Self {
        MockSink::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn frames(&self) -> Vec<MockFrame> {
        self.state().presented.clone()
    }

    pub fn frame_count(&self) -> usize {
        self.state().presented.len()
    }

    pub fn last_frame(&self) -> Option<MockFrame> {
        self.state().presented.last().cloned()
    }

    pub fn stray_calls(&self) -> usize {
        self.state().stray_calls
    }
}

impl PresentationSink for MockSink {
    fn begin_frame(&mut self) {
        let mut state = self.state();
        if state.pending.is_some() {
            state.stray_calls += 1;
        }
        state.pending = Some(MockFrame::default());
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: PixelColor) {
        let mut guard = self.state();
        let state = &mut *guard;
        match state.pending.as_mut() {
            Some(frame) => frame.pixels.push((x, y, color)),
            None => state.stray_calls += 1,
        }
    }

    fn present(&mut self) {
        let mut state = self.state();
        match state.pending.take() {
            Some(frame) => state.presented.push(frame),
            None => state.stray_calls += 1,
        }
    }
}

/// Keeps every debug line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryDebugSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryDebugSink {
    pub fn new() -> Self {
        MemoryDebugSink::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DebugSink for MemoryDebugSink {
    fn write(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
