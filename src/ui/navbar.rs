// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of both dashboards.
//!
//! Displays the app name, the active role's dashboard title and a logout
//! button. Logout is the only app-level action; it is surfaced to the parent
//! as an [`Event`].

use crate::domain::Role;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Role of the signed-in user; picks the dashboard title.
    pub role: Role,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Logout => Event::Logout,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("app-name"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        });

    let title_key = match ctx.role {
        Role::Student => "navbar-student-title",
        Role::Admin => "navbar-admin-title",
    };
    let title = Text::new(ctx.i18n.tr(title_key)).size(typography::BODY);

    let logout_button = button(Text::new(ctx.i18n.tr("navbar-logout")).size(typography::BODY))
        .on_press(Message::Logout)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::text_link);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(logout_button);

    Container::new(row)
        .width(Length::Fill)
        .style(navbar_style)
        .into()
}

/// Style function for the navbar surface.
fn navbar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_student() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            role: Role::Student,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_for_admin() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            role: Role::Admin,
        };
        let _element = view(ctx);
    }

    #[test]
    fn logout_message_emits_logout_event() {
        let event = update(Message::Logout);
        assert!(matches!(event, Event::Logout));
    }
}
