//! Event handling behind the status icon.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::controller::{Controller, ControllerEvent, SetupPage, SyncStatus};

use super::model::{FolderPage, IconState, TrayUpdate, TrayUpdateSender};

/// View-model for the status icon.
///
/// Subscribes to the controller's notifications and republishes the
/// derived view state as [`TrayUpdate`]s. Holds no synchronization
/// state of its own.
pub struct StatusIconController {
    controller: Arc<dyn Controller>,
    events: broadcast::Receiver<ControllerEvent>,
    updates: TrayUpdateSender,
    state: IconState,
    state_text: String,
    page: FolderPage,
}

impl StatusIconController {
    /// Subscribes to the controller and takes an initial folder
    /// snapshot. No updates are emitted until the first notification.
    pub fn new(controller: Arc<dyn Controller>, updates: TrayUpdateSender) -> Self {
        let events = controller.subscribe();
        let page = FolderPage::paginate(controller.folders(), &controller.repositories());

        Self {
            controller,
            events,
            updates,
            state: IconState::Idle,
            state_text: "Welcome to SparkleShare!".to_string(),
            page,
        }
    }

    /// Drains the notification feed until the controller drops it.
    pub async fn run(&mut self) {
        loop {
            match self.events.recv().await {
                Ok(event) => self.handle_event(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "notification feed lagged, view may be stale");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// Applies a single controller notification to the view state.
    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::FolderListChanged => self.on_folder_list_changed(),
            ControllerEvent::Idle => self.on_idle(),
            ControllerEvent::Syncing => self.on_syncing(),
            ControllerEvent::Error => self.on_error(),
        }
    }

    pub fn state(&self) -> IconState {
        self.state
    }

    pub fn state_text(&self) -> &str {
        &self.state_text
    }

    /// Current folder menu pages.
    pub fn folder_page(&self) -> &FolderPage {
        &self.page
    }

    /// Combined size of all repositories, formatted for the status
    /// line. Empty while nothing has been synced yet.
    pub fn folder_size(&self) -> String {
        let size: u64 = self
            .controller
            .repositories()
            .iter()
            .map(|repository| repository.size)
            .sum();

        if size == 0 {
            String::new()
        } else {
            format!("— {}", self.controller.format_size(size))
        }
    }

    /// Overall progress rounded down to whole percent.
    pub fn progress_percentage(&self) -> u8 {
        self.controller.progress_percentage() as u8
    }

    pub fn progress_speed(&self) -> String {
        self.controller.progress_speed()
    }

    /// Quitting is only allowed at rest or after a failure, never while
    /// changes are in flight.
    pub fn quit_item_enabled(&self) -> bool {
        matches!(self.state, IconState::Idle | IconState::Error)
    }

    pub fn recent_events_item_enabled(&self) -> bool {
        self.controller.repositories_loaded() && !self.controller.folders().is_empty()
    }

    /// Opens the local SparkleShare folder.
    pub fn folder_clicked(&self) {
        if let Err(err) = self.controller.open_folder(None) {
            warn!(error = ?err, "failed to open the SparkleShare folder");
        }
    }

    /// Opens one synchronized folder by name.
    pub fn subfolder_clicked(&self, folder: &str) {
        if let Err(err) = self.controller.open_folder(Some(folder)) {
            warn!(error = ?err, folder, "failed to open folder");
        }
    }

    pub fn add_project_clicked(&self) {
        if let Err(err) = self.controller.show_setup_window(SetupPage::Add) {
            warn!(error = ?err, "failed to open the setup window");
        }
    }

    /// Opens the event log without holding up the caller. Window
    /// construction runs on its own blocking task; the result is
    /// dropped and never awaited.
    pub fn recent_events_clicked(&self) {
        let controller = Arc::clone(&self.controller);
        tokio::task::spawn_blocking(move || {
            if let Err(err) = controller.show_event_log_window() {
                warn!(error = ?err, "failed to open the event log");
            }
        });
    }

    pub fn about_clicked(&self) {
        if let Err(err) = self.controller.show_about_window() {
            warn!(error = ?err, "failed to open the about dialog");
        }
    }

    pub fn quit_clicked(&self) {
        if let Err(err) = self.controller.quit() {
            warn!(error = ?err, "failed to quit");
        }
    }

    fn on_folder_list_changed(&mut self) {
        if self.state != IconState::Error {
            self.state = IconState::Idle;
            self.state_text = self.idle_state_text();
        }

        self.update_folders();

        self.emit(TrayUpdate::StatusText(self.state_text.clone()));
        self.emit(TrayUpdate::RecentEventsEnabled(self.recent_events_item_enabled()));
        self.emit(TrayUpdate::Menu(self.state));
    }

    fn on_idle(&mut self) {
        self.update_folders();

        if self.state != IconState::Error {
            self.state = IconState::Idle;
            self.state_text = self.idle_state_text();
        }

        self.emit(TrayUpdate::QuitEnabled(self.quit_item_enabled()));
        self.emit(TrayUpdate::StatusText(self.state_text.clone()));
        self.emit(TrayUpdate::Icon(self.state));
        self.emit(TrayUpdate::Menu(self.state));
    }

    fn on_syncing(&mut self) {
        let mut syncing_up = 0;
        let mut syncing_down = 0;
        for repository in self.controller.repositories() {
            match repository.status {
                SyncStatus::SyncUp => syncing_up += 1,
                SyncStatus::SyncDown => syncing_down += 1,
                SyncStatus::Idle => {}
            }
        }

        let base = if syncing_up > 0 && syncing_down > 0 {
            self.state = IconState::Syncing;
            "Syncing changes…"
        } else if syncing_down == 0 {
            self.state = IconState::SyncingUp;
            "Sending changes…"
        } else {
            self.state = IconState::SyncingDown;
            "Receiving changes…"
        };

        self.state_text = format!(
            "{} {}%  {}",
            base,
            self.progress_percentage(),
            self.progress_speed()
        );

        self.emit(TrayUpdate::Icon(self.state));
        self.emit(TrayUpdate::StatusText(self.state_text.clone()));
        self.emit(TrayUpdate::QuitEnabled(self.quit_item_enabled()));
    }

    fn on_error(&mut self) {
        self.state = IconState::Error;
        self.state_text = "Failed to send some changes".to_string();

        self.update_folders();

        self.emit(TrayUpdate::QuitEnabled(self.quit_item_enabled()));
        self.emit(TrayUpdate::StatusText(self.state_text.clone()));
        self.emit(TrayUpdate::Icon(self.state));
        self.emit(TrayUpdate::Menu(self.state));
    }

    fn idle_state_text(&self) -> String {
        if self.controller.folders().is_empty() {
            "Welcome to SparkleShare!".to_string()
        } else {
            format!("Files up to date {}", self.folder_size())
        }
    }

    fn update_folders(&mut self) {
        self.page =
            FolderPage::paginate(self.controller.folders(), &self.controller.repositories());
    }

    fn emit(&self, update: TrayUpdate) {
        if self.updates.send(update).is_err() {
            debug!("tray frontend dropped its update channel");
        }
    }
}
