// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens (login, student, admin),
//! localization and configuration, and translates messages into side effects
//! like the simulated backend delays. This file intentionally keeps policy
//! decisions (minimum window size, session reset on logout, default browse
//! year) close to the main update loop so it is easy to audit user-facing
//! behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::material::mock_catalog;
use crate::domain::{Role, Year};
use crate::i18n::I18n;
use crate::ui::admin;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::student;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the screens, localization, and
/// configured preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Role of the signed-in user; `None` on the login screen.
    session: Option<Role>,
    login: login::State,
    student: student::State,
    admin: admin::State,
    theme_mode: ThemeMode,
    /// Year preselected when the student dashboard opens.
    default_year: Year,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let default_year = Year::new(config::DEFAULT_BROWSE_YEAR).unwrap_or(Year::ALL[0]);
        Self {
            i18n: I18n::default(),
            screen: Screen::Login,
            session: None,
            login: login::State::default(),
            student: student::State::new(mock_catalog(), default_year),
            admin: admin::State::default(),
            theme_mode: ThemeMode::System,
            default_year,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from configuration and `Flags` received
    /// from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode();

        // Out-of-range configured years fall back to the built-in default
        if let Some(year) = config.browse.default_year.and_then(Year::new) {
            app.default_year = year;
            app.student = student::State::new(mock_catalog(), year);
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");

        match self.screen {
            Screen::Login => app_name,
            Screen::Student => {
                format!("{} - {app_name}", self.i18n.tr("navbar-student-title"))
            }
            Screen::Admin => {
                format!("{} - {app_name}", self.i18n.tr("navbar-admin-title"))
            }
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            session: &mut self.session,
            login: &mut self.login,
            student: &mut self.student,
            admin: &mut self.admin,
            notifications: &mut self.notifications,
            default_year: self.default_year,
        };

        match message {
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::Student(student_message) => {
                update::handle_student_message(&mut ctx, student_message)
            }
            Message::Admin(admin_message) => update::handle_admin_message(&mut ctx, admin_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::LoginCompleted(role) => update::handle_login_completed(&mut ctx, role),
            Message::UploadCompleted(material) => {
                update::handle_upload_completed(&mut ctx, material)
            }
            Message::PdfFileDialogResult(path) => {
                update::handle_admin_message(&mut ctx, admin::Message::FileSelected(path))
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            login: &self.login,
            student: &self.student,
            admin: &self.admin,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MaterialSource;
    use crate::ui::student::Message as StudentMessage;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn uploaded_material() -> crate::domain::StudyMaterial {
        crate::domain::StudyMaterial::new(
            "Linked Lists",
            "Data Structures",
            Year::new(2).unwrap(),
            MaterialSource::PdfFile("mock-url".to_string()),
        )
    }

    #[test]
    fn new_starts_on_login_screen() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Login);
            assert!(app.session.is_none());
        });
    }

    #[test]
    fn new_applies_configured_default_year() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "[browse]\ndefault_year = 3\n")
                .expect("write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.default_year.get(), 3);
            assert_eq!(app.student.filter.year.get(), 3);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_applies_configured_theme_mode() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "[general]\ntheme_mode = \"dark\"\n")
                .expect("write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme_mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn new_warns_on_malformed_config() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "not valid toml [[").expect("write config");

            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
            // Broken config falls back to defaults
            assert_eq!(app.default_year.get(), config::DEFAULT_BROWSE_YEAR);
        });
    }

    #[test]
    fn new_rejects_out_of_range_configured_year() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "[browse]\ndefault_year = 9\n")
                .expect("write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.default_year.get(), config::DEFAULT_BROWSE_YEAR);
        });
    }

    #[test]
    fn login_completed_opens_the_role_dashboard() {
        let mut app = App::default();

        let _ = app.update(Message::LoginCompleted(Role::Student));
        assert_eq!(app.screen, Screen::Student);
        assert_eq!(app.session, Some(Role::Student));

        let _ = app.update(Message::LoginCompleted(Role::Admin));
        assert_eq!(app.screen, Screen::Admin);
        assert_eq!(app.session, Some(Role::Admin));
    }

    #[test]
    fn login_completed_resets_the_login_form() {
        let mut app = App::default();
        app.login.email = "student@college.edu".to_string();
        app.login.password = "hunter2".to_string();
        app.login.submitting = true;

        let _ = app.update(Message::LoginCompleted(Role::Student));
        assert!(app.login.email.is_empty());
        assert!(!app.login.submitting);
    }

    #[test]
    fn upload_completed_records_material_and_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::LoginCompleted(Role::Admin));

        let _ = app.update(Message::UploadCompleted(uploaded_material()));

        assert_eq!(app.admin.uploads.len(), 1);
        assert_eq!(app.admin.uploads[0].title, "Linked Lists");
        assert!(!app.admin.uploading);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn admin_uploads_never_reach_the_student_catalog() {
        let mut app = App::default();
        let _ = app.update(Message::LoginCompleted(Role::Admin));
        let _ = app.update(Message::UploadCompleted(uploaded_material()));

        assert_eq!(app.student.catalog.len(), 5);
        assert!(app
            .student
            .catalog
            .iter()
            .all(|material| material.title != "Linked Lists"));
    }

    #[test]
    fn download_action_pushes_info_toast() {
        let mut app = App::default();
        let _ = app.update(Message::LoginCompleted(Role::Student));

        let _ = app.update(Message::Student(StudentMessage::DownloadPressed(
            "Introduction to Data Structures".to_string(),
        )));

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn logout_resets_session_state() {
        let mut app = App::default();
        let _ = app.update(Message::LoginCompleted(Role::Admin));
        let _ = app.update(Message::UploadCompleted(uploaded_material()));
        let _ = app.update(Message::Student(StudentMessage::SearchChanged(
            "data".to_string(),
        )));

        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::Logout));

        assert_eq!(app.screen, Screen::Login);
        assert!(app.session.is_none());
        assert!(app.admin.uploads.is_empty());
        assert!(app.student.filter.search.is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn file_dialog_result_routes_to_admin_form() {
        let mut app = App::default();
        let _ = app.update(Message::LoginCompleted(Role::Admin));

        let _ = app.update(Message::PdfFileDialogResult(Some(
            std::path::PathBuf::from("/tmp/notes.pdf"),
        )));
        assert_eq!(
            app.admin.selected_file,
            Some(std::path::PathBuf::from("/tmp/notes.pdf"))
        );
    }

    #[test]
    fn title_follows_the_active_screen() {
        let mut app = App::default();
        assert_eq!(app.title(), "EngiLearn");

        let _ = app.update(Message::LoginCompleted(Role::Student));
        assert_eq!(app.title(), "Student Dashboard - EngiLearn");

        let _ = app.update(Message::LoginCompleted(Role::Admin));
        assert_eq!(app.title(), "Admin Dashboard - EngiLearn");
    }

    #[test]
    fn tick_dismisses_nothing_when_empty() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.notifications.has_notifications());
    }
}
