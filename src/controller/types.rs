use serde::Serialize;

/// Notifications published on the controller's event feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The set of synchronized folders changed.
    FolderListChanged,
    /// All repositories returned to rest.
    Idle,
    /// At least one repository started transferring changes.
    Syncing,
    /// A repository failed to sync.
    Error,
}

/// Live status of one synchronized repository.
///
/// Repositories are reported in folder order: entry `i` describes the
/// folder at position `i` of [`Controller::folders`](super::Controller::folders).
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryInfo {
    /// Size of the repository's content in bytes.
    pub size: u64,
    /// Transfer direction the repository is currently working in.
    pub status: SyncStatus,
    /// Current error classification, [`ErrorStatus::None`] when healthy.
    pub error: ErrorStatus,
}

/// Transfer direction of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    SyncUp,
    SyncDown,
}

impl Default for SyncStatus {
    fn default() -> Self {
        SyncStatus::Idle
    }
}

/// Error classification reported per repository.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    None,
    HostUnreachable,
    HostIdentityChanged,
    AuthenticationFailed,
    DiskSpaceExceeded,
}

impl Default for ErrorStatus {
    fn default() -> Self {
        ErrorStatus::None
    }
}

impl ErrorStatus {
    /// Menu label for the classification; empty for healthy repositories.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorStatus::None => "",
            ErrorStatus::HostUnreachable => "Host unreachable",
            ErrorStatus::HostIdentityChanged => "Host identity changed",
            ErrorStatus::AuthenticationFailed => "Authentication failed",
            ErrorStatus::DiskSpaceExceeded => "Out of disk space",
        }
    }
}

/// Page of the setup window a command opens.
///
/// The tray only ever enters the setup flow through the add-project
/// page; the remaining pages are navigated inside the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPage {
    Add,
}
