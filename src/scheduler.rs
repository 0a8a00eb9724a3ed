//! The render loop: one background thread that samples the grid at a fixed
//! cadence and hands each frame to the presentation sink.
//!
//! The grid is shared as `Arc<Mutex<DisplayGrid>>`. A tick holds the lock
//! only while it samples the whole grid into a `Frame`, so every frame is a
//! consistent snapshot taken at a single timestamp. The lock is released
//! before the sink sees the frame.

use crate::error::{DisplayError, Result};
use crate::grid::{DisplayGrid, Frame};
use crate::sink::{PresentationSink, SharedDebugSink};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub type SharedGrid = Arc<Mutex<DisplayGrid>>;
pub type BoxedSink = Box<dyn PresentationSink + Send>;

enum RenderCmd {
    Stop,
}

// Handed back by the render thread so the sink survives a restart.
struct RenderOutcome {
    sink: BoxedSink,
    frames: u64,
}

struct RenderLoop {
    handle: JoinHandle<RenderOutcome>,
    stop_tx: Sender<RenderCmd>,
}

pub struct RenderScheduler {
    grid: SharedGrid,
    interval: Duration,
    debug: Option<SharedDebugSink>,
    sink: Option<BoxedSink>,
    running: Option<RenderLoop>,
}

impl RenderScheduler {
    pub fn new(grid: SharedGrid, sink: BoxedSink, interval: Duration) -> Self {
        RenderScheduler {
            grid,
            interval,
            debug: None,
            sink: Some(sink),
            running: None,
        }
    }

    pub fn with_debug_sink(mut self, debug: SharedDebugSink) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Spawns the render thread. Fails if it is already running.
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Err(DisplayError::SchedulerAlreadyRunning);
        }
        // Only a panicked render thread can lose the sink.
        let sink = self.sink.take().ok_or(DisplayError::RenderThreadPanicked)?;

        let (stop_tx, stop_rx) = channel();
        let grid = Arc::clone(&self.grid);
        let interval = self.interval;
        let handle = thread::spawn(move || render_loop(grid, sink, interval, stop_rx));

        self.running = Some(RenderLoop { handle, stop_tx });
        info!("Render loop started, {} ms per frame", self.interval.as_millis());
        self.debug_write(&format!(
            "render loop started ({} ms interval)",
            self.interval.as_millis()
        ));
        Ok(())
    }

    /// Signals the render thread and blocks until it has exited. The
    /// frame in flight is finished first.
    pub fn stop(&mut self) -> Result<()> {
        let running = self.running.take().ok_or(DisplayError::SchedulerNotRunning)?;

        // A send error means the loop is already gone; join reports why.
        let _ = running.stop_tx.send(RenderCmd::Stop);
        match running.handle.join() {
            Ok(outcome) => {
                self.sink = Some(outcome.sink);
                info!("Render loop stopped after {} frames", outcome.frames);
                self.debug_write(&format!(
                    "render loop stopped after {} frames",
                    outcome.frames
                ));
                Ok(())
            }
            Err(_) => {
                error!("Render thread panicked");
                Err(DisplayError::RenderThreadPanicked)
            }
        }
    }

    fn debug_write(&self, message: &str) {
        if let Some(debug) = &self.debug {
            debug.write(message);
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        if self.running.is_some() {
            if let Err(e) = self.stop() {
                warn!("Render loop did not stop cleanly: {}", e);
            }
        }
    }
}

fn render_loop(
    grid: SharedGrid,
    mut sink: BoxedSink,
    interval: Duration,
    stop_rx: Receiver<RenderCmd>,
) -> RenderOutcome {
    // Blink phase is measured from here, not from the wall clock.
    let reference = Instant::now();
    let mut frames: u64 = 0;
    loop {
        let tick_start = Instant::now();
        let timestamp_ms = elapsed_ms(reference, tick_start);
        render_tick(&grid, sink.as_mut(), timestamp_ms);
        frames += 1;
        trace!("Frame {} presented at {} ms", frames, timestamp_ms);

        // Wait for the absolute deadline so per-tick work does not drift.
        let deadline = tick_start + interval;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match stop_rx.recv_timeout(remaining) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(RenderCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("Render loop exiting");
    RenderOutcome { sink, frames }
}

fn elapsed_ms(reference: Instant, now: Instant) -> u64 {
    let millis = now.duration_since(reference).as_millis();
    if millis > u128::from(u64::MAX) {
        u64::MAX
    } else {
        millis as u64
    }
}

/// Samples the grid at `timestamp_ms` and delivers the frame. Returns the
/// frame that was delivered.
pub fn render_tick(
    grid: &Mutex<DisplayGrid>,
    sink: &mut dyn PresentationSink,
    timestamp_ms: u64,
) -> Frame {
    let frame = grid
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .sample(timestamp_ms);
    deliver(&frame, sink);
    frame
}

/// Writes `frame` to `sink` as a single batch.
pub fn deliver(frame: &Frame, sink: &mut dyn PresentationSink) {
    sink.begin_frame();
    for (x, y, color) in frame.pixels() {
        sink.set_pixel(x, y, color);
    }
    sink.present();
}
