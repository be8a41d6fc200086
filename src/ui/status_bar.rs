// SPDX-License-Identifier: MPL-2.0
//! Busy indicator shown while a translation request is in flight.
//!
//! The bar holds a single message owned by the request that showed it.
//! Showing a new message transfers ownership; hiding only succeeds for the
//! current owner, so a slow request finishing late cannot hide the status
//! of a newer one.

use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::dispatch::RequestToken;
use iced::widget::{container, Container, Row, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct State {
    current: Option<(RequestToken, String)>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` on behalf of `token`, replacing whatever was shown.
    pub fn show(&mut self, token: RequestToken, message: impl Into<String>) {
        self.current = Some((token, message.into()));
    }

    /// Hides the bar if `token` still owns it. Returns whether it was hidden.
    pub fn hide(&mut self, token: RequestToken) -> bool {
        match &self.current {
            Some((owner, _)) if *owner == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, message)| message.as_str())
    }

    /// Renders the bar, or nothing when hidden.
    pub fn view<'a, M: 'a>(&'a self) -> Option<Element<'a, M>> {
        let message = self.message()?;

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new("⏳").size(typography::BODY))
            .push(Text::new(message).size(typography::BODY));

        Some(
            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(|theme: &Theme| {
                    let palette = theme.extended_palette();
                    container::Style {
                        background: Some(palette.primary.weak.color.into()),
                        text_color: Some(palette.primary.weak.text),
                        border: Border {
                            radius: radius::SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                })
                .into(),
        )
    }
}
