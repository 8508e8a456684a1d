// SPDX-License-Identifier: MPL-2.0
//! Admin dashboard: upload form and recent-uploads list.
//!
//! The form collects a title, subject, curriculum year and either a PDF file
//! or a video link, depending on the selected material type. Submission runs
//! a simulated upload that the parent resolves after a fixed delay; the
//! minted record is appended to the session-local recent list. Records
//! created here are never merged into the student catalog.

use crate::domain::{MaterialKind, MaterialSource, StudyMaterial, Year};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{
        button, pick_list, scrollable, text, text_input, Column, Container, Row, Space, Text,
    },
    Element, Length, Theme,
};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// State
// =============================================================================

/// Upload form state plus the session-local recent list.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub title: String,
    pub subject: String,
    pub year: Option<Year>,
    pub kind: FormKind,
    /// PDF picked through the file dialog; only meaningful for PDF kind.
    pub selected_file: Option<PathBuf>,
    /// Video link text; only meaningful for video kind.
    pub video_url: String,
    /// True while the simulated upload is in flight; locks the form.
    pub uploading: bool,
    /// Records uploaded this session, in insertion order.
    pub uploads: Vec<StudyMaterial>,
}

/// Material type toggle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Pdf,
    Video,
}

impl State {
    /// All required fields present and no upload in flight.
    ///
    /// The source requirement follows the selected kind: a picked file for
    /// PDF, a non-empty link for video.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.uploading || self.title.is_empty() || self.subject.is_empty() {
            return false;
        }
        if self.year.is_none() {
            return false;
        }
        match self.kind {
            FormKind::Pdf => self.selected_file.is_some(),
            FormKind::Video => !self.video_url.is_empty(),
        }
    }

    /// Builds the source for the draft from the active kind.
    ///
    /// The PDF variant carries a placeholder reference; the picked file is
    /// never read or copied anywhere.
    fn draft_source(&self) -> Option<MaterialSource> {
        match self.kind {
            FormKind::Pdf => self
                .selected_file
                .as_ref()
                .map(|path| MaterialSource::PdfFile(path.display().to_string())),
            FormKind::Video => {
                (!self.video_url.is_empty())
                    .then(|| MaterialSource::VideoLink(self.video_url.clone()))
            }
        }
    }

    /// Records a finished upload and resets the form for the next one.
    pub fn finish_upload(&mut self, material: StudyMaterial) {
        self.uploads.push(material);
        self.title.clear();
        self.subject.clear();
        self.year = None;
        self.kind = FormKind::Pdf;
        self.selected_file = None;
        self.video_url.clear();
        self.uploading = false;
    }
}

/// Validated form contents handed to the parent for the simulated upload.
#[derive(Debug, Clone)]
pub struct UploadDraft {
    pub title: String,
    pub subject: String,
    pub year: Year,
    pub source: MaterialSource,
}

// =============================================================================
// Messages and events
// =============================================================================

/// Messages emitted by the admin screen.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    SubjectChanged(String),
    YearSelected(YearOption),
    KindSelected(FormKind),
    BrowsePressed,
    /// Result of the file dialog; `None` means the user cancelled.
    FileSelected(Option<PathBuf>),
    VideoUrlChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the PDF file dialog.
    PickFileRequested,
    /// Start the simulated upload of a validated draft.
    UploadRequested(UploadDraft),
}

/// Process an admin message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TitleChanged(title) => {
            state.title = title;
            Event::None
        }
        Message::SubjectChanged(subject) => {
            state.subject = subject;
            Event::None
        }
        Message::YearSelected(option) => {
            state.year = Some(option.year);
            Event::None
        }
        Message::KindSelected(kind) => {
            if !state.uploading {
                state.kind = kind;
            }
            Event::None
        }
        Message::BrowsePressed => {
            if state.uploading {
                Event::None
            } else {
                Event::PickFileRequested
            }
        }
        Message::FileSelected(path) => {
            if let Some(path) = path {
                state.selected_file = Some(path);
            }
            Event::None
        }
        Message::VideoUrlChanged(url) => {
            state.video_url = url;
            Event::None
        }
        Message::SubmitPressed => {
            if !state.can_submit() {
                return Event::None;
            }
            let Some(source) = state.draft_source() else {
                return Event::None;
            };
            let Some(year) = state.year else {
                return Event::None;
            };
            state.uploading = true;
            Event::UploadRequested(UploadDraft {
                title: state.title.clone(),
                subject: state.subject.clone(),
                year,
                source,
            })
        }
    }
}

// =============================================================================
// Pick-list option
// =============================================================================

/// Year entry for the pick list, labeled through i18n.
#[derive(Debug, Clone)]
pub struct YearOption {
    pub year: Year,
    label: String,
}

impl YearOption {
    fn all(i18n: &I18n) -> Vec<Self> {
        Year::ALL
            .iter()
            .map(|&year| Self {
                year,
                label: i18n.tr(&format!("year-label-{year}")),
            })
            .collect()
    }
}

impl PartialEq for YearOption {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
    }
}

impl fmt::Display for YearOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render the admin screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the admin dashboard.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(upload_form(&ctx))
        .push(recent_uploads(&ctx));

    scrollable(content).width(Length::Fill).into()
}

fn upload_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("admin-upload-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr("admin-upload-subtitle"))
                .size(typography::BODY_SM)
                .style(secondary_text),
        );

    let title_placeholder = i18n.tr("admin-field-title-placeholder");
    let title_input = text_input(&title_placeholder, &state.title)
        .on_input(Message::TitleChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let subject_placeholder = i18n.tr("admin-field-subject-placeholder");
    let subject_input = text_input(&subject_placeholder, &state.subject)
        .on_input(Message::SubjectChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let year_options = YearOption::all(i18n);
    let selected_year = state.year.map(|year| YearOption {
        year,
        label: i18n.tr(&format!("year-label-{year}")),
    });
    let year_picker = pick_list(year_options, selected_year, Message::YearSelected)
        .placeholder(i18n.tr("admin-field-year-placeholder"))
        .padding(spacing::SM)
        .text_size(typography::BODY)
        .width(Length::Fill);

    let kind_toggle = Row::new()
        .spacing(spacing::XS)
        .push(kind_tab(i18n, state, FormKind::Pdf, "admin-kind-pdf"))
        .push(kind_tab(i18n, state, FormKind::Video, "admin-kind-video"));

    let source_field: Element<'_, Message> = match state.kind {
        FormKind::Pdf => {
            let file_label = state
                .selected_file
                .as_ref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| i18n.tr("admin-no-file-selected"));

            let browse_button = button(Text::new(i18n.tr("admin-browse-button")).size(typography::BODY))
                .on_press(Message::BrowsePressed)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::unselected);

            labeled(
                i18n.tr("admin-field-file"),
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(browse_button)
                    .push(
                        Text::new(file_label)
                            .size(typography::BODY_SM)
                            .style(secondary_text),
                    )
                    .into(),
            )
        }
        FormKind::Video => {
            let url_placeholder = i18n.tr("admin-field-video-url-placeholder");
            labeled(
                i18n.tr("admin-field-video-url"),
                text_input(&url_placeholder, &state.video_url)
                    .on_input(Message::VideoUrlChanged)
                    .padding(spacing::SM)
                    .size(typography::BODY)
                    .into(),
            )
        }
    };

    let submit_label = if state.uploading {
        i18n.tr("admin-submitting")
    } else {
        i18n.tr("admin-submit")
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
        .push(header)
        .push(labeled(i18n.tr("admin-field-title"), title_input.into()))
        .push(labeled(i18n.tr("admin-field-subject"), subject_input.into()))
        .push(labeled(i18n.tr("admin-field-year"), year_picker.into()))
        .push(labeled(i18n.tr("admin-field-kind"), kind_toggle.into()))
        .push(source_field)
        .push(submit_button);

    Container::new(form)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn kind_tab<'a>(
    i18n: &I18n,
    state: &State,
    kind: FormKind,
    label_key: &str,
) -> Element<'a, Message> {
    let style = if state.kind == kind {
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
    .on_press(Message::KindSelected(kind))
    .style(style)
    .into()
}

fn recent_uploads<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("admin-recent-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr("admin-recent-subtitle"))
                .size(typography::BODY_SM)
                .style(secondary_text),
        );

    let mut list = Column::new().spacing(spacing::SM).push(header);

    if state.uploads.is_empty() {
        list = list.push(
            Text::new(i18n.tr("admin-recent-empty"))
                .size(typography::BODY)
                .style(secondary_text),
        );
    } else {
        for material in &state.uploads {
            list = list.push(upload_entry(i18n, material));
        }
    }

    Container::new(list)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn upload_entry<'a>(i18n: &I18n, material: &'a StudyMaterial) -> Element<'a, Message> {
    let meta = i18n.tr_with_args(
        "admin-recent-meta",
        &[
            ("subject", material.subject.as_str()),
            ("year", &material.year.to_string()),
        ],
    );

    let (badge_key, accent) = match material.kind() {
        MaterialKind::Pdf => ("admin-kind-pdf", palette::PDF_ACCENT),
        MaterialKind::Video => ("admin-kind-video", palette::VIDEO_ACCENT),
    };
    let badge = Container::new(Text::new(i18n.tr(badge_key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(accent));

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(material.title.as_str()).size(typography::BODY))
        .push(Text::new(meta).size(typography::BODY_SM).style(secondary_text));

    Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(details)
        .push(Space::new().width(Length::Fill))
        .push(badge)
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

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
