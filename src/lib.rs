//! Status icon view-model for the SparkleShare desktop client.
//!
//! Platform frontends (tray icons, menu bars) should contain no logic
//! beyond drawing. This crate sits between them and the application
//! controller: it listens to the controller's notifications and keeps
//! a ready-to-render projection of its state. Frontends receive the
//! projection as a stream of small update events and draw exactly what
//! they are told.
//!
//! Everything flows over channels:
//! - [`ControllerEvent`] carries notifications from the controller to
//!   the view-model.
//! - [`TrayUpdate`] carries view updates from the view-model to the
//!   frontend.
//!
//! The controller itself stays behind the [`Controller`] trait, so
//! frontends and tests decide what backs it.

pub mod controller;
pub mod status_icon;

pub use controller::{
    Controller, ControllerError, ControllerEvent, ErrorStatus, RepositoryInfo, SetupPage,
    SyncStatus,
};
pub use status_icon::{
    FolderPage, IconState, StatusIconController, TrayUpdate, TrayUpdateSender,
};
