use super::sink_common::PresentationSink;
use crate::color::PixelColor;
use crate::error::{DisplayError, Result};
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const RESET: &str = "\x1b[0m";
const OFF_GLYPH: &str = "\x1b[38;2;40;40;40m\u{00b7}";

/// Escape-coded text of one frame. The buffer is reused across frames.
#[derive(Debug, Default)]
struct FrameText {
    buffer: String,
}

impl FrameText {
    fn begin(&mut self) {
        self.buffer.clear();
        self.buffer.push_str(CURSOR_HOME);
    }

    fn push(&mut self, x: usize, y: usize, color: PixelColor) {
        if x == 0 && y > 0 {
            self.buffer.push_str(RESET);
            self.buffer.push('\n');
        }
        if color.is_on() {
            self.buffer.push_str(&format!(
                "\x1b[38;2;{};{};{}m\u{25cf}",
                color.red, color.green, color.blue
            ));
        } else {
            self.buffer.push_str(OFF_GLYPH);
        }
    }

    fn finish(&mut self) -> &str {
        self.buffer.push_str(RESET);
        self.buffer.push('\n');
        &self.buffer
    }
}

/// Simulated panel drawn on a truecolor terminal, one glyph per LED.
pub struct TerminalSink {
    out: io::Stdout,
    frame: FrameText,
}

impl TerminalSink {
    pub fn new() -> Result<Self> {
        let sink = TerminalSink {
            out: io::stdout(),
            frame: FrameText::default(),
        };
        write_raw(&sink.out, &format!("{}{}", CLEAR_SCREEN, HIDE_CURSOR))
            .map_err(|e| DisplayError::Sink(format!("terminal init failed: {}", e)))?;
        Ok(sink)
    }
}

fn write_raw(out: &io::Stdout, s: &str) -> io::Result<()> {
    let mut out = out.lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

impl PresentationSink for TerminalSink {
    fn begin_frame(&mut self) {
        self.frame.begin();
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: PixelColor) {
        self.frame.push(x, y, color);
    }

    fn present(&mut self) {
        if let Err(e) = write_raw(&self.out, self.frame.finish()) {
            warn!("Dropping frame, terminal write failed: {}", e);
        }
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = write_raw(&self.out, &format!("{}{}", RESET, SHOW_CURSOR));
    }
}
