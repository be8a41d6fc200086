// SPDX-License-Identifier: MPL-2.0
//! Image tab: upload zone, translated preview and download link.

use super::{download_button, submit_button};
use crate::domain::upload::{SelectedFile, UploadKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dispatch::{Dispatcher, Flow};
use crate::ui::upload_zone;
use iced::widget::{image, Column, Container, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

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
    /// Save the translated image found at this URL.
    Download(String),
}

/// Preview bytes fetched from the result URL.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(image::Handle),
    Unavailable,
}

/// The latest translated image. Preview and download share one URL.
#[derive(Debug, Clone)]
pub struct ImageResult {
    pub preview_source: String,
    pub download_link: String,
    pub preview: Preview,
}

#[derive(Debug, Clone)]
pub struct State {
    zone: upload_zone::State,
    dispatcher: Dispatcher,
    result: Option<ImageResult>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            zone: upload_zone::State::new(UploadKind::Image),
            dispatcher: Dispatcher::new(Flow::Image),
            result: None,
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

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn result(&self) -> Option<&ImageResult> {
        self.result.as_ref()
    }

    /// Shows a translated image; its preview starts loading.
    pub fn show_result(&mut self, download_url: String) {
        self.result = Some(ImageResult {
            preview_source: download_url.clone(),
            download_link: download_url,
            preview: Preview::Loading,
        });
    }

    /// Stores fetched preview bytes, unless a newer result replaced the one
    /// they belong to.
    pub fn set_preview(&mut self, url: &str, preview: Preview) {
        match &mut self.result {
            Some(result) if result.preview_source == url => result.preview = preview,
            _ => tracing::debug!(url, "dropping preview of a replaced result"),
        }
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
                .result
                .as_ref()
                .map_or(Event::None, |result| Event::Download(result.download_link.clone())),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(self.zone.view(i18n).map(Message::Zone))
            .push(submit_button(
                i18n,
                "translate-image-button",
                self.zone.can_submit().then_some(Message::Translate),
            ));

        if let Some(result) = &self.result {
            let preview: Element<'a, Message> = match &result.preview {
                Preview::Loading => Text::new(i18n.tr("result-preview-loading"))
                    .size(typography::CAPTION)
                    .into(),
                Preview::Ready(handle) => image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                    .into(),
                Preview::Unavailable => Text::new(i18n.tr("result-preview-unavailable"))
                    .size(typography::CAPTION)
                    .into(),
            };

            column = column.push(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(i18n.tr("result-image-title")).size(typography::TITLE_SM))
                    .push(Container::new(preview).width(Length::Fill).center_x(Length::Fill))
                    .push(download_button(i18n, Message::Download)),
            );
        }

        column.into()
    }
}
