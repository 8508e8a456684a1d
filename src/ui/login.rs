// SPDX-License-Identifier: MPL-2.0
//! Login screen with role selection.
//!
//! A single form shared by both roles; tabs switch the target role without
//! clearing the typed credentials. Credentials are not validated against any
//! backend. Submitting starts a simulated sign-in that the parent resolves
//! after a fixed delay.

use crate::domain::Role;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Role tab currently selected.
    pub role: Role,
    pub email: String,
    pub password: String,
    /// True while the simulated sign-in is in flight; locks the form.
    pub submitting: bool,
}

impl State {
    /// Both fields filled and no sign-in in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.submitting
    }
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    RoleSelected(Role),
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Start the simulated sign-in for the given role.
    SubmitRequested(Role),
}

/// Process a login message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RoleSelected(role) => {
            if !state.submitting {
                state.role = role;
            }
            Event::None
        }
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            Event::None
        }
        Message::SubmitPressed => {
            if !state.can_submit() {
                return Event::None;
            }
            state.submitting = true;
            Event::SubmitRequested(state.role)
        }
    }
}

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the login screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let brand = Text::new(i18n.tr("app-name"))
        .size(typography::TITLE_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        });
    let tagline = Text::new(i18n.tr("app-tagline"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(role_tab(i18n, state, Role::Student))
        .push(role_tab(i18n, state, Role::Admin));

    let email_label_key = match state.role {
        Role::Student => "login-email-label",
        Role::Admin => "login-admin-email-label",
    };
    let email_placeholder_key = match state.role {
        Role::Student => "login-email-placeholder-student",
        Role::Admin => "login-email-placeholder-admin",
    };
    let email_placeholder = i18n.tr(email_placeholder_key);
    let email_input = text_input(&email_placeholder, &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let password_placeholder = i18n.tr("login-password-label");
    let password_input = text_input(&password_placeholder, &state.password)
        .on_input(Message::PasswordChanged)
        .secure(true)
        .padding(spacing::SM)
        .size(typography::BODY);

    let submit_label = if state.submitting {
        i18n.tr("login-submitting")
    } else {
        match state.role {
            Role::Student => i18n.tr("login-submit-student"),
            Role::Admin => i18n.tr("login-submit-admin"),
        }
    };
    let mut submit_button = button(
        Text::new(submit_label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);
    if state.can_submit() {
        submit_button = submit_button.on_press(Message::SubmitPressed);
    }

    let form = Column::new()
        .spacing(spacing::MD)
        .push(brand)
        .push(tagline)
        .push(tabs)
        .push(labeled(i18n.tr(email_label_key), email_input.into()))
        .push(labeled(i18n.tr("login-password-label"), password_input.into()))
        .push(submit_button)
        .align_x(Horizontal::Center);

    let card = Container::new(form)
        .width(Length::Fixed(sizing::LOGIN_CARD_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::brand_backdrop)
        .into()
}

fn role_tab<'a>(i18n: &'a I18n, state: &'a State, role: Role) -> Element<'a, Message> {
    let label_key = match role {
        Role::Student => "login-tab-student",
        Role::Admin => "login-tab-admin",
    };
    let style = if state.role == role {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(
        Text::new(i18n.tr(label_key))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .on_press(Message::RoleSelected(role))
    .style(style)
    .into()
}

fn labeled<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            role: Role::Student,
            email: "student@college.edu".to_string(),
            password: "hunter2".to_string(),
            submitting: false,
        }
    }

    #[test]
    fn default_state_targets_student_role() {
        let state = State::default();
        assert_eq!(state.role, Role::Student);
        assert!(!state.can_submit());
    }

    #[test]
    fn role_tab_switches_without_clearing_credentials() {
        let mut state = filled_state();
        let event = update(&mut state, Message::RoleSelected(Role::Admin));
        assert!(matches!(event, Event::None));
        assert_eq!(state.role, Role::Admin);
        assert_eq!(state.email, "student@college.edu");
        assert_eq!(state.password, "hunter2");
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut state = State::default();
        state.email = "a@b.c".to_string();
        assert!(!state.can_submit());

        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert!(!state.submitting);
    }

    #[test]
    fn submit_locks_form_and_emits_event() {
        let mut state = filled_state();
        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::SubmitRequested(Role::Student)));
        assert!(state.submitting);

        // Second press while in flight is ignored
        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn role_switch_is_ignored_while_submitting() {
        let mut state = filled_state();
        let _ = update(&mut state, Message::SubmitPressed);

        let _ = update(&mut state, Message::RoleSelected(Role::Admin));
        assert_eq!(state.role, Role::Student);
    }

    #[test]
    fn view_renders_in_both_states() {
        let i18n = I18n::default();

        let idle = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &idle,
        });

        let mut busy = filled_state();
        busy.submitting = true;
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &busy,
        });
    }
}
