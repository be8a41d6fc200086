// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: header, language bar, tab strip, the active
//! panel, then the status bar. Toasts float bottom-right and the failure
//! alert covers everything while open.

use super::Message;
use crate::domain::mode::Mode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::panels::{image, pdf, text};
use crate::ui::{alert, language_bar, status_bar, styles, tabs};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tabs: &'a tabs::State,
    pub languages: &'a language_bar::State,
    pub text_panel: &'a text::State,
    pub image_panel: &'a image::State,
    pub pdf_panel: &'a pdf::State,
    pub status: &'a status_bar::State,
    pub alerts: &'a alert::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("app-subtitle")).size(typography::BODY_SM));

    let panel: Element<'_, Message> = match ctx.tabs.active() {
        Mode::Text => ctx.text_panel.view(i18n).map(Message::TextPanel),
        Mode::Image => ctx.image_panel.view(i18n).map(Message::ImagePanel),
        Mode::Pdf => ctx.pdf_panel.view(i18n).map(Message::PdfPanel),
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(ctx.languages.view(i18n).map(Message::Languages))
        .push(ctx.tabs.view(i18n).map(Message::Tabs))
        .push(
            Container::new(panel)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        );

    if let Some(status) = ctx.status.view() {
        content = content.push(status);
    }

    let page = Container::new(scrollable(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing::LG),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let with_toasts = Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill);

    ctx.alerts.view(with_toasts.into(), i18n, Message::Alert)
}
