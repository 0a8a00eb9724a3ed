use std::result;

pub type Result<T> = result::Result<T, DisplayError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("render scheduler is already running")]
    SchedulerAlreadyRunning,

    #[error("render scheduler is not running")]
    SchedulerNotRunning,

    #[error("display is already connected")]
    AlreadyConnected,

    #[error("render thread panicked")]
    RenderThreadPanicked,

    #[error("presentation sink failed: {0}")]
    Sink(String),
}
