// SPDX-License-Identifier: MPL-2.0
//! PDF tab: upload zone and download link of the translated document.

use super::{download_button, submit_button};
use crate::domain::upload::{SelectedFile, UploadKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::dispatch::{Dispatcher, Flow};
use crate::ui::upload_zone;
use iced::widget::{Column, Text};
use iced::{alignment::Horizontal, Element};

#[derive(Debug, Clone)]
pub enum Message {
    Zone(upload_zone::Message),
    Translate,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Zone(upload_zone::Event),
    Translate(SelectedFile),
    Download(String),
}

#[derive(Debug, Clone)]
pub struct State {
    zone: upload_zone::State,
    dispatcher: Dispatcher,
    download_link: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            zone: upload_zone::State::new(UploadKind::Pdf),
            dispatcher: Dispatcher::new(Flow::Pdf),
            download_link: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn zone(&self) -> &upload_zone::State {
        &self.zone
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    #[must_use]
    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref()
    }

    pub fn show_result(&mut self, download_url: String) {
        self.download_link = Some(download_url);
    }

    pub fn update(&mut self, message: Message, max_bytes: u64) -> Event {
        match message {
            Message::Zone(message) => match self.zone.update(message, max_bytes) {
                upload_zone::Event::None => Event::None,
                event => Event::Zone(event),
            },
            Message::Translate => self
                .zone
                .selected()
                .cloned()
                .map_or(Event::None, Event::Translate),
            Message::Download => self
                .download_link
                .clone()
                .map_or(Event::None, Event::Download),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(self.zone.view(i18n).map(Message::Zone))
            .push(submit_button(
                i18n,
                "translate-pdf-button",
                self.zone.can_submit().then_some(Message::Translate),
            ));

        if self.download_link.is_some() {
            column = column.push(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(i18n.tr("result-pdf-title")).size(typography::TITLE_SM))
                    .push(download_button(i18n, Message::Download)),
            );
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_only_sets_download_link() {
        let mut panel = State::new();
        assert!(panel.download_link().is_none());
        panel.show_result("/api/download/doc_translated.pdf".to_string());
        assert_eq!(
            panel.download_link(),
            Some("/api/download/doc_translated.pdf")
        );
        assert_eq!(
            panel.update(Message::Download, u64::MAX),
            Event::Download("/api/download/doc_translated.pdf".to_string())
        );
    }

    #[test]
    fn submit_is_disabled_until_a_file_is_chosen() {
        let panel = State::new();
        assert!(!panel.zone().can_submit());
    }
}
