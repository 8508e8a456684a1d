// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Role, StudyMaterial};
use crate::ui::admin;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::student;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Student(student::Message),
    Admin(admin::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// The simulated sign-in finished for the given role.
    LoginCompleted(Role),
    /// The simulated upload finished and minted this record.
    UploadCompleted(StudyMaterial),
    /// Result from the PDF file dialog. `None` means cancelled.
    PdfFileDialogResult(Option<PathBuf>),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ENGILEARN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
