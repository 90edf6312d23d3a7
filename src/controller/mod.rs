//! Contract between the status icon and the application controller.
//!
//! The controller owns all synchronization state; the status icon only
//! queries it and listens to its notifications. It is injected behind a
//! trait so platform frontends and tests can supply their own
//! implementation.

mod error;
mod types;

pub use error::ControllerError;
pub use types::{ControllerEvent, ErrorStatus, RepositoryInfo, SetupPage, SyncStatus};

use tokio::sync::broadcast;

/// The application controller as seen from the status icon: a
/// notification feed plus the queries and commands behind the menu.
///
/// Implementations must keep [`folders`](Controller::folders) and
/// [`repositories`](Controller::repositories) positionally aligned;
/// the view-model treats a length mismatch as a bug, not as data.
pub trait Controller: Send + Sync {
    /// Subscribes to the controller's notification feed.
    fn subscribe(&self) -> broadcast::Receiver<ControllerEvent>;

    /// Ordered names of all synchronized folders.
    fn folders(&self) -> Vec<String>;

    /// Live repository status, one entry per folder, in folder order.
    fn repositories(&self) -> Vec<RepositoryInfo>;

    /// Whether the initial repository scan has finished.
    fn repositories_loaded(&self) -> bool;

    /// Overall progress of the running transfers, in percent.
    fn progress_percentage(&self) -> f64;

    /// Display-ready transfer speed, e.g. `"1.2 MB/s"`.
    fn progress_speed(&self) -> String;

    /// Formats a byte count for display, e.g. `"4.5 MB"`.
    fn format_size(&self, bytes: u64) -> String;

    /// Opens the SparkleShare folder, or one of its subfolders.
    fn open_folder(&self, subfolder: Option<&str>) -> Result<(), ControllerError>;

    /// Presents the project setup window on the given page.
    fn show_setup_window(&self, page: SetupPage) -> Result<(), ControllerError>;

    /// Presents the recent-events log window.
    fn show_event_log_window(&self) -> Result<(), ControllerError>;

    /// Presents the about dialog.
    fn show_about_window(&self) -> Result<(), ControllerError>;

    /// Requests application shutdown.
    fn quit(&self) -> Result<(), ControllerError>;
}
