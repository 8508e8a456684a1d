// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::domain::Role;
use crate::i18n::I18n;
use crate::ui::admin::{self, ViewContext as AdminViewContext};
use crate::ui::login::{self, ViewContext as LoginViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::student::{self, ViewContext as StudentViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub login: &'a login::State,
    pub student: &'a student::State,
    pub admin: &'a admin::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => login::view(LoginViewContext {
            i18n: ctx.i18n,
            state: ctx.login,
        })
        .map(Message::Login),
        Screen::Student => with_navbar(
            ctx.i18n,
            Role::Student,
            student::view(StudentViewContext {
                i18n: ctx.i18n,
                state: ctx.student,
            })
            .map(Message::Student),
        ),
        Screen::Admin => with_navbar(
            ctx.i18n,
            Role::Admin,
            admin::view(AdminViewContext {
                i18n: ctx.i18n,
                state: ctx.admin,
            })
            .map(Message::Admin),
        ),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toast_overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(toast_overlay).into()
}

/// Stacks the navbar above a dashboard screen.
fn with_navbar<'a>(
    i18n: &'a I18n,
    role: Role,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n, role }).map(Message::Navbar);

    Column::new()
        .push(navbar_view)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
