//! Native message boxes.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use vitrine_shell::SaveKind;

/// Ask before replacing an existing view or layout.
pub(super) fn confirm_overwrite(kind: SaveKind, name: &str) -> bool {
    let (title, what) = match kind {
        SaveKind::View => ("View Exists", "view"),
        SaveKind::Layout => ("Layout Exists", "layout"),
    };
    confirm(
        title,
        &format!("A {what} named '{name}' already exists. Do you want to overwrite it?"),
    )
}

pub(super) fn confirm(title: &str, description: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

pub(super) fn info(title: &str, description: &str) {
    show(MessageLevel::Info, title, description);
}

pub(super) fn warn(title: &str, description: &str) {
    show(MessageLevel::Warning, title, description);
}

pub(super) fn error(title: &str, description: &str) {
    show(MessageLevel::Error, title, description);
}

fn show(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
