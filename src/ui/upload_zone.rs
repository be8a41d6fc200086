// SPDX-License-Identifier: MPL-2.0
//! Drop target and file browser for the image and PDF panels.
//!
//! Both ways of choosing a file (dropping it on the window or picking it in
//! the dialog) end in [`State::select`], so the resulting state is the same
//! whichever the user used. A valid selection shows its name and enables the
//! submit button for good; a later rejected file keeps the previous choice.

use crate::domain::upload::{SelectedFile, UploadKind, UploadRejection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    /// Click on the zone or its "browse" link.
    Browse,
    /// The dialog closed; `None` when cancelled.
    Browsed(Option<PathBuf>),
    DragEntered,
    DragLeft,
    Dropped(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The parent should open a file dialog filtered to this kind.
    OpenDialog(UploadKind),
    Selected(SelectedFile),
    Rejected(UploadRejection),
}

#[derive(Debug, Clone)]
pub struct State {
    kind: UploadKind,
    selected: Option<SelectedFile>,
    drag_active: bool,
    /// Set once the first file of a multi-file drop has been taken.
    drop_consumed: bool,
}

impl State {
    #[must_use]
    pub fn new(kind: UploadKind) -> Self {
        Self {
            kind,
            selected: None,
            drag_active: false,
            drop_consumed: false,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Submit stays enabled once any valid file was chosen.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn update(&mut self, message: Message, max_bytes: u64) -> Event {
        match message {
            Message::Browse => Event::OpenDialog(self.kind),
            Message::Browsed(None) => Event::None,
            Message::Browsed(Some(path)) => self.select(&path, max_bytes),
            Message::DragEntered => {
                if !self.drag_active {
                    self.drag_active = true;
                    self.drop_consumed = false;
                }
                Event::None
            }
            Message::DragLeft => {
                self.drag_active = false;
                self.drop_consumed = false;
                Event::None
            }
            Message::Dropped(path) => {
                self.drag_active = false;
                // The window reports one event per dropped file; keep the first
                if self.drop_consumed {
                    tracing::debug!(path = %path.display(), "extra file of a multi-file drop ignored");
                    return Event::None;
                }
                self.drop_consumed = true;
                self.select(&path, max_bytes)
            }
        }
    }

    /// Validates `path` and, if accepted, makes it the current file.
    pub fn select(&mut self, path: &Path, max_bytes: u64) -> Event {
        let size_bytes = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => return self.reject(path, UploadRejection::NotAFile),
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot read file metadata: {err}");
                return self.reject(path, UploadRejection::NotAFile);
            }
        };

        match self.kind.check(path, size_bytes, max_bytes) {
            Ok(file) => {
                tracing::info!(kind = ?self.kind, file = %file.name, size_bytes, "file selected");
                self.selected = Some(file.clone());
                Event::Selected(file)
            }
            Err(rejection) => self.reject(path, rejection),
        }
    }

    fn reject(&self, path: &Path, rejection: UploadRejection) -> Event {
        tracing::info!(kind = ?self.kind, path = %path.display(), "file rejected: {rejection}");
        Event::Rejected(rejection)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let hint_key = match self.kind {
            UploadKind::Image => "upload-hint-image",
            UploadKind::Pdf => "upload-hint-pdf",
        };
        let glyph = match self.kind {
            UploadKind::Image => "🖼",
            UploadKind::Pdf => "📄",
        };

        let browse = button(Text::new(i18n.tr("upload-browse")).size(typography::BODY))
            .on_press(Message::Browse)
            .padding(0)
            .style(styles::button::link);

        let prompt = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("upload-drop-prompt")).size(typography::BODY))
            .push(browse);

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(glyph).size(sizing::ICON_XL))
            .push(prompt)
            .push(Text::new(i18n.tr(hint_key)).size(typography::CAPTION));

        if let Some(file) = &self.selected {
            content = content.push(
                Text::new(i18n.tr_with_args("upload-selected", &[("name", file.name.as_str())]))
                    .size(typography::BODY),
            );
        }

        let zone = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .style(styles::container::drop_zone(self.drag_active));

        mouse_area(zone).on_press(Message::Browse).into()
    }
}
