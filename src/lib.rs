//! An addressable 2-D LED matrix.
//!
//! Each cell of a [`DisplayGrid`] holds a color and any number of blink
//! periods. While a [`Display`] session is connected, a [`RenderScheduler`]
//! samples the whole grid once per tick and hands the frame to a
//! [`PresentationSink`].

#[macro_use]
extern crate log;

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod led;
pub mod scheduler;
pub mod session;
pub mod sink;

pub use crate::color::{PixelColor, BLACK};
pub use crate::config::SessionConfig;
pub use crate::error::{DisplayError, Result};
pub use crate::grid::{DisplayGrid, Frame};
pub use crate::led::LedCell;
pub use crate::scheduler::{RenderScheduler, SharedGrid};
pub use crate::session::Display;
pub use crate::sink::{DebugSink, PresentationSink};
