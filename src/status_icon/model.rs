//! View state published to the tray frontend.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::controller::{ErrorStatus, RepositoryInfo};

/// Most folders shown directly in the menu before spilling into the
/// overflow submenu.
pub const MENU_OVERFLOW_THRESHOLD: usize = 9;

/// Smallest overflow worth a submenu; a smaller remainder keeps the
/// whole list visible instead.
pub const MIN_SUBMENU_OVERFLOW_COUNT: usize = 3;

/// Visual state driving the icon glyph and the menu appearance.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconState {
    Idle,
    SyncingUp,
    SyncingDown,
    Syncing,
    Error,
}

impl Default for IconState {
    fn default() -> Self {
        IconState::Idle
    }
}

/// A single view update pushed to the tray frontend.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "update", content = "value")]
pub enum TrayUpdate {
    /// Swap the status icon glyph.
    Icon(IconState),
    /// Rebuild the menu for the given state.
    Menu(IconState),
    /// Replace the status line at the top of the menu.
    StatusText(String),
    /// Enable or disable the quit menu item.
    QuitEnabled(bool),
    /// Enable or disable the recent-events menu item.
    RecentEventsEnabled(bool),
}

pub type TrayUpdateSender = mpsc::UnboundedSender<TrayUpdate>;

/// Folder names split into the visible menu list and the overflow
/// submenu, with per-folder error classifications aligned 1:1.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FolderPage {
    pub folders: Vec<String>,
    pub folder_errors: Vec<ErrorStatus>,
    pub overflow_folders: Vec<String>,
    pub overflow_folder_errors: Vec<ErrorStatus>,
}

impl FolderPage {
    /// Splits `folders` at the overflow threshold and classifies each
    /// repository's error into the matching page.
    ///
    /// `repositories` must be positionally aligned with `folders`.
    pub fn paginate(folders: Vec<String>, repositories: &[RepositoryInfo]) -> Self {
        assert_eq!(
            folders.len(),
            repositories.len(),
            "folder and repository lists out of step"
        );

        let overflow_count = folders.len().saturating_sub(MENU_OVERFLOW_THRESHOLD);
        let (folders, overflow_folders) = if overflow_count >= MIN_SUBMENU_OVERFLOW_COUNT {
            let mut folders = folders;
            let overflow = folders.split_off(MENU_OVERFLOW_THRESHOLD);
            (folders, overflow)
        } else {
            (folders, Vec::new())
        };

        // Everything at or past the split belongs to the overflow page.
        let split = folders.len();
        let mut folder_errors = Vec::with_capacity(split);
        let mut overflow_folder_errors = Vec::with_capacity(overflow_folders.len());
        for (i, repository) in repositories.iter().enumerate() {
            if i < split {
                folder_errors.push(repository.error);
            } else {
                overflow_folder_errors.push(repository.error);
            }
        }

        Self {
            folders,
            folder_errors,
            overflow_folders,
            overflow_folder_errors,
        }
    }

    /// Total folder count across both pages.
    pub fn total(&self) -> usize {
        self.folders.len() + self.overflow_folders.len()
    }
}
