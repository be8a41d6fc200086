// SPDX-License-Identifier: MPL-2.0
//! Text tab: a free-form input and a read-only result.

use super::submit_button;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dispatch::{Dispatcher, Flow};
use iced::widget::{text_editor, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    SourceEdited(text_editor::Action),
    /// Selection and scrolling in the result; edits are dropped.
    ResultAction(text_editor::Action),
    Translate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Translate this text (already trimmed, never empty).
    Translate(String),
}

#[derive(Debug)]
pub struct State {
    source: text_editor::Content,
    result: text_editor::Content,
    dispatcher: Dispatcher,
}

impl Default for State {
    fn default() -> Self {
        Self {
            source: text_editor::Content::new(),
            result: text_editor::Content::new(),
            dispatcher: Dispatcher::new(Flow::Text),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    #[must_use]
    pub fn result_text(&self) -> String {
        self.result.text()
    }

    /// Replaces the input, as if the user had typed `text`.
    pub fn set_source(&mut self, text: &str) {
        self.source = text_editor::Content::with_text(text);
    }

    /// Replaces the result with a translation.
    pub fn show_result(&mut self, text: &str) {
        self.result = text_editor::Content::with_text(text);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SourceEdited(action) => {
                self.source.perform(action);
                Event::None
            }
            Message::ResultAction(action) => {
                if !action.is_edit() {
                    self.result.perform(action);
                }
                Event::None
            }
            Message::Translate => {
                let text = self.source.text();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Event::None
                } else {
                    Event::Translate(trimmed.to_string())
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(i18n.tr("text-source-label")).size(typography::CAPTION))
            .push(
                text_editor(&self.source)
                    .placeholder(i18n.tr("text-source-placeholder"))
                    .on_action(Message::SourceEdited)
                    .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT)),
            );

        let output = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(i18n.tr("text-result-label")).size(typography::CAPTION))
            .push(
                text_editor(&self.result)
                    .placeholder(i18n.tr("text-result-placeholder"))
                    .on_action(Message::ResultAction)
                    .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT)),
            );

        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Row::new().spacing(spacing::MD).push(input).push(output))
            .push(submit_button(
                i18n,
                "translate-text-button",
                Some(Message::Translate),
            ))
            .into()
    }
}
