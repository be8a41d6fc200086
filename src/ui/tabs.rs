// SPDX-License-Identifier: MPL-2.0
//! Tab strip switching between the text, image and PDF panels.
//!
//! Exactly one tab is active at any time; selecting a tab deactivates the
//! others. The mode is stored once, so no other state is representable.

use crate::domain::mode::Mode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select(Mode),
}

/// Emitted to the parent after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Switched(Mode),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    active: Mode,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Mode {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, mode: Mode) -> bool {
        self.active == mode
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(mode) if mode == self.active => Event::None,
            Message::Select(mode) => {
                tracing::debug!(tab = mode.tag(), "tab switched");
                self.active = mode;
                Event::Switched(mode)
            }
        }
    }

    pub fn view<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        Mode::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &mode| {
                row.push(
                    button(Text::new(i18n.tr(tab_label_key(mode))).size(typography::BODY_LG))
                        .on_press(Message::Select(mode))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::tab(self.is_active(mode))),
                )
            })
            .into()
    }
}

fn tab_label_key(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => "tab-text",
        Mode::Image => "tab-image",
        Mode::Pdf => "tab-pdf",
    }
}
