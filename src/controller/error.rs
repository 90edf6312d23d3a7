use thiserror::Error;

/// Failures a controller command can report back to the status icon.
///
/// The status icon never propagates these; it logs the failure and
/// keeps its current view state.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to present window: {0}")]
    Window(String),
}
