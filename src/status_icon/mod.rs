//! Derived view state behind the status icon.

mod controller;
mod model;

pub use controller::StatusIconController;
pub use model::{
    FolderPage, IconState, TrayUpdate, TrayUpdateSender, MENU_OVERFLOW_THRESHOLD,
    MIN_SUBMENU_OVERFLOW_COUNT,
};
