// SPDX-License-Identifier: MPL-2.0
//! Student dashboard: year selection, search and the material list.
//!
//! The visible list is re-derived from the catalog and the current
//! [`CatalogFilter`] on every render. Changing the year deliberately keeps
//! the search text and subject selection; a subject that does not exist in
//! the new year simply produces an empty result until changed.

use crate::domain::material::filter::{available_subjects, CatalogFilter, SubjectFilter};
use crate::domain::{MaterialKind, StudyMaterial, Year};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, scrollable, text, text_input, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};
use std::fmt;

// =============================================================================
// State
// =============================================================================

/// Browse state: the catalog plus the active filter.
#[derive(Debug, Clone)]
pub struct State {
    pub catalog: Vec<StudyMaterial>,
    pub filter: CatalogFilter,
}

impl State {
    /// Creates browse state over `catalog`, starting at `year` with no
    /// search text and the all-subjects sentinel.
    #[must_use]
    pub fn new(catalog: Vec<StudyMaterial>, year: Year) -> Self {
        Self {
            catalog,
            filter: CatalogFilter::new(year),
        }
    }

    /// The currently visible records, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&StudyMaterial> {
        self.filter.apply(&self.catalog)
    }
}

// =============================================================================
// Messages and events
// =============================================================================

/// Messages emitted by the student screen.
#[derive(Debug, Clone)]
pub enum Message {
    YearSelected(Year),
    SearchChanged(String),
    SubjectSelected(SubjectOption),
    DownloadPressed(String),
    WatchPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The stub download of the named material was triggered.
    DownloadRequested { title: String },
    /// The stub video open of the named material was triggered.
    WatchRequested { title: String },
}

/// Process a student message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::YearSelected(year) => {
            // Search and subject survive the year change on purpose.
            state.filter.year = year;
            Event::None
        }
        Message::SearchChanged(search) => {
            state.filter.search = search;
            Event::None
        }
        Message::SubjectSelected(option) => {
            state.filter.subject = option.filter;
            Event::None
        }
        Message::DownloadPressed(title) => Event::DownloadRequested { title },
        Message::WatchPressed(title) => Event::WatchRequested { title },
    }
}

// =============================================================================
// Pick-list option
// =============================================================================

/// Subject entry for the pick list, including the all-subjects sentinel.
#[derive(Debug, Clone)]
pub struct SubjectOption {
    filter: SubjectFilter,
    label: String,
}

impl SubjectOption {
    fn all_subjects(i18n: &I18n) -> Self {
        Self {
            filter: SubjectFilter::All,
            label: i18n.tr("student-subject-all"),
        }
    }

    fn only(subject: String) -> Self {
        Self {
            label: subject.clone(),
            filter: SubjectFilter::Only(subject),
        }
    }

    /// Options for the current year: the sentinel followed by the year's
    /// subjects in first-occurrence order.
    fn options(i18n: &I18n, state: &State) -> Vec<Self> {
        let mut options = vec![Self::all_subjects(i18n)];
        options.extend(
            available_subjects(&state.catalog, state.filter.year)
                .into_iter()
                .map(Self::only),
        );
        options
    }

    fn selected(i18n: &I18n, state: &State) -> Self {
        match &state.filter.subject {
            SubjectFilter::All => Self::all_subjects(i18n),
            SubjectFilter::Only(subject) => Self::only(subject.clone()),
        }
    }
}

impl PartialEq for SubjectOption {
    fn eq(&self, other: &Self) -> bool {
        self.filter == other.filter
    }
}

impl fmt::Display for SubjectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render the student screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the student dashboard.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(year_selector(&ctx))
        .push(search_panel(&ctx))
        .push(results_panel(&ctx));

    scrollable(content).width(Length::Fill).into()
}

fn year_selector<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let selected = ctx.state.filter.year;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("student-year-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr("student-year-subtitle"))
                .size(typography::BODY_SM)
                .style(secondary_text),
        );

    let mut grid = Row::new().spacing(spacing::SM);
    for year in Year::ALL {
        let style = if year == selected {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        grid = grid.push(
            button(
                Text::new(i18n.tr(&format!("year-label-{year}")))
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::YEAR_BUTTON_HEIGHT))
            .on_press(Message::YearSelected(year))
            .style(style),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(grid),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn search_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let search_placeholder = i18n.tr("student-search-placeholder");
    let search_input = text_input(&search_placeholder, &state.filter.search)
        .on_input(Message::SearchChanged)
        .padding(spacing::SM)
        .size(typography::BODY)
        .width(Length::Fill);

    let subject_picker = pick_list(
        SubjectOption::options(i18n, state),
        Some(SubjectOption::selected(i18n, state)),
        Message::SubjectSelected,
    )
    .placeholder(i18n.tr("student-subject-placeholder"))
    .padding(spacing::SM)
    .text_size(typography::BODY)
    .width(Length::Fixed(sizing::SUBJECT_PICKER_WIDTH));

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(search_input)
        .push(subject_picker);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("student-search-title")).size(typography::TITLE_SM))
            .push(controls),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn results_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let visible = state.visible();

    let title = i18n.tr_with_args(
        "student-results-title",
        &[("year", &state.filter.year.to_string())],
    );
    let count = i18n.tr_with_args(
        "student-results-count",
        &[("count", &visible.len().to_string())],
    );

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(count).size(typography::BODY_SM).style(secondary_text));

    let mut list = Column::new().spacing(spacing::SM).push(header);

    if visible.is_empty() {
        let empty_key = if state.filter.is_narrowed() {
            "student-results-empty-filtered"
        } else {
            "student-results-empty"
        };
        list = list.push(
            Container::new(
                Text::new(i18n.tr(empty_key))
                    .size(typography::BODY)
                    .style(secondary_text),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
        );
    } else {
        for material in visible {
            list = list.push(material_card(i18n, material));
        }
    }

    Container::new(list)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn material_card<'a>(i18n: &I18n, material: &'a StudyMaterial) -> Element<'a, Message> {
    let (badge_key, accent) = match material.kind() {
        MaterialKind::Pdf => ("admin-kind-pdf", palette::PDF_ACCENT),
        MaterialKind::Video => ("admin-kind-video", palette::VIDEO_ACCENT),
    };
    let badge = Container::new(Text::new(i18n.tr(badge_key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(accent));

    let uploaded = i18n.tr_with_args("student-uploaded-on", &[("date", material.display_date())]);

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(material.title.as_str()).size(typography::BODY))
        .push(
            Text::new(material.subject.as_str())
                .size(typography::BODY_SM)
                .style(secondary_text),
        )
        .push(
            Text::new(uploaded)
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    let (action_key, action_message) = match material.kind() {
        MaterialKind::Pdf => (
            "student-download-button",
            Message::DownloadPressed(material.title.clone()),
        ),
        MaterialKind::Video => (
            "student-watch-button",
            Message::WatchPressed(material.title.clone()),
        ),
    };
    let action_button = button(Text::new(i18n.tr(action_key)).size(typography::BODY))
        .on_press(action_message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(badge)
            .push(details)
            .push(Space::new().width(Length::Fill))
            .push(action_button),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
