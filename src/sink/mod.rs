mod sink_common;
pub use self::sink_common::*;

mod sink_mock;
pub use self::sink_mock::*;

#[cfg(feature = "blinkt")]
mod sink_blinkt;
#[cfg(feature = "blinkt")]
pub type PanelSink = self::sink_blinkt::BlinktSink;

#[cfg(not(feature = "blinkt"))]
mod sink_terminal;
#[cfg(not(feature = "blinkt"))]
pub type PanelSink = self::sink_terminal::TerminalSink;
