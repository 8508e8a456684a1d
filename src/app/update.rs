// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler borrows the mutable pieces of `App` through an
//! [`UpdateContext`], translates component events into state changes and
//! returns the side effects as `Task`s. The simulated backend lives here:
//! sign-in and upload resolve after a fixed delay, downloads and video opens
//! only surface a toast.

use super::{Message, Screen};
use crate::domain::material::mock_catalog;
use crate::domain::{Role, StudyMaterial, Year};
use crate::ui::admin;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::student;
use iced::Task;
use std::time::Duration;

/// Latency of the simulated backend for sign-in and upload.
pub const SIMULATED_BACKEND_DELAY: Duration = Duration::from_secs(1);

/// Mutable borrows of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub session: &'a mut Option<Role>,
    pub login: &'a mut login::State,
    pub student: &'a mut student::State,
    pub admin: &'a mut admin::State,
    pub notifications: &'a mut notifications::Manager,
    pub default_year: Year,
}

/// Handles login screen messages.
pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match login::update(ctx.login, message) {
        login::Event::None => Task::none(),
        login::Event::SubmitRequested(role) => Task::perform(
            async move {
                tokio::time::sleep(SIMULATED_BACKEND_DELAY).await;
                role
            },
            Message::LoginCompleted,
        ),
    }
}

/// Completes the simulated sign-in: opens the role's dashboard with fresh
/// per-session state.
pub fn handle_login_completed(ctx: &mut UpdateContext<'_>, role: Role) -> Task<Message> {
    *ctx.session = Some(role);
    *ctx.login = login::State::default();
    *ctx.student = student::State::new(mock_catalog(), ctx.default_year);
    *ctx.admin = admin::State::default();
    *ctx.screen = match role {
        Role::Student => Screen::Student,
        Role::Admin => Screen::Admin,
    };
    Task::none()
}

/// Handles student screen messages.
pub fn handle_student_message(
    ctx: &mut UpdateContext<'_>,
    message: student::Message,
) -> Task<Message> {
    match student::update(ctx.student, message) {
        student::Event::None => Task::none(),
        student::Event::DownloadRequested { title } => {
            ctx.notifications.push(
                notifications::Notification::info("notification-download-started")
                    .with_arg("title", title),
            );
            Task::none()
        }
        student::Event::WatchRequested { title } => {
            ctx.notifications.push(
                notifications::Notification::info("notification-watch-started")
                    .with_arg("title", title),
            );
            Task::none()
        }
    }
}

/// Handles admin screen messages.
pub fn handle_admin_message(ctx: &mut UpdateContext<'_>, message: admin::Message) -> Task<Message> {
    match admin::update(ctx.admin, message) {
        admin::Event::None => Task::none(),
        admin::Event::PickFileRequested => handle_pick_pdf_dialog(),
        admin::Event::UploadRequested(draft) => Task::perform(
            async move {
                tokio::time::sleep(SIMULATED_BACKEND_DELAY).await;
                StudyMaterial::new(draft.title, draft.subject, draft.year, draft.source)
            },
            Message::UploadCompleted,
        ),
    }
}

/// Completes the simulated upload: records the minted material and confirms
/// with a toast.
pub fn handle_upload_completed(
    ctx: &mut UpdateContext<'_>,
    material: StudyMaterial,
) -> Task<Message> {
    ctx.admin.finish_upload(material);
    ctx.notifications
        .push(notifications::Notification::success(
            "notification-upload-success",
        ));
    Task::none()
}

/// Opens the async PDF file dialog.
fn handle_pick_pdf_dialog() -> Task<Message> {
    Task::perform(
        async move {
            let dialog = rfd::AsyncFileDialog::new().add_filter("PDF", &["pdf"]);
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::PdfFileDialogResult,
    )
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Logout => {
            *ctx.session = None;
            *ctx.screen = Screen::Login;
            *ctx.login = login::State::default();
            // Per-session state does not survive logout
            *ctx.student = student::State::new(mock_catalog(), ctx.default_year);
            *ctx.admin = admin::State::default();
            ctx.notifications.clear();
            Task::none()
        }
    }
}
