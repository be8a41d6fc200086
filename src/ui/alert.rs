// SPDX-License-Identifier: MPL-2.0
//! Blocking failure alert.
//!
//! A failed translation opens a modal card over the whole window. The
//! backdrop swallows input until the user acknowledges it. Failures that
//! arrive while an alert is open wait their turn in a queue, so none is lost.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dispatch::Flow;
use crate::ui::styles;
use iced::widget::{button, center, opaque, Column, Container, Row, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::collections::VecDeque;

/// One alert: the flow's failure label followed by the error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    /// Builds the alert shown when `flow` fails with `error`.
    #[must_use]
    pub fn failure(flow: Flow, error: &Error, i18n: &I18n) -> Self {
        Self {
            message: format!("{}: {}", i18n.tr(flow.failure_key()), error),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Acknowledge,
}

#[derive(Debug, Default)]
pub struct State {
    queue: VecDeque<Alert>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        self.queue.push_back(alert);
    }

    /// The alert currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Acknowledge => {
                self.queue.pop_front();
            }
        }
    }

    /// Wraps `base` with the modal when an alert is pending.
    pub fn view<'a, M>(
        &'a self,
        base: Element<'a, M>,
        i18n: &'a I18n,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        let Some(alert) = self.current() else {
            return base;
        };

        let ok = button(Text::new(i18n.tr("alert-ok")).size(typography::BODY))
            .on_press(on_message(Message::Acknowledge))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        let card = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("alert-title")).size(typography::TITLE_SM))
            .push(Text::new(alert.message.as_str()).size(typography::BODY))
            .push(
                Row::new()
                    .push(Container::new(ok).width(Length::Fill).align_x(Horizontal::Right)),
            );

        let modal = Container::new(
            Container::new(card)
                .width(Length::Fixed(sizing::ALERT_WIDTH))
                .padding(spacing::LG)
                .style(styles::container::modal_card),
        );

        Stack::new()
            .push(base)
            .push(opaque(
                center(modal)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::modal_backdrop),
            ))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn failure_message_contains_server_error() {
        let alert = Alert::failure(Flow::Text, &Error::Api("X".to_string()), &english());
        assert_eq!(alert.message, "Translation failed: X");
    }

    #[test]
    fn each_flow_has_its_own_label() {
        let i18n = english();
        let error = Error::Api("boom".to_string());
        assert!(Alert::failure(Flow::Image, &error, &i18n)
            .message
            .starts_with("Image translation failed"));
        assert!(Alert::failure(Flow::Pdf, &error, &i18n)
            .message
            .starts_with("PDF translation failed"));
    }

    #[test]
    fn alerts_queue_until_acknowledged() {
        let mut state = State::new();
        state.push(Alert {
            message: "first".to_string(),
        });
        state.push(Alert {
            message: "second".to_string(),
        });

        assert_eq!(state.current().map(|a| a.message.as_str()), Some("first"));
        state.update(Message::Acknowledge);
        assert_eq!(state.current().map(|a| a.message.as_str()), Some("second"));
        state.update(Message::Acknowledge);
        assert!(state.current().is_none());
        // Acknowledging with nothing pending is harmless
        state.update(Message::Acknowledge);
        assert!(state.current().is_none());
    }
}
