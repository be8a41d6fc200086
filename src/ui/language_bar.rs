// SPDX-License-Identifier: MPL-2.0
//! Source/target language pick lists and the swap button.
//!
//! The catalog arrives asynchronously from the server. Until it does (or if
//! loading fails) both lists are empty and requests carry empty codes.

use crate::config::LanguagesConfig;
use crate::domain::language::{Language, LanguageCatalog, LanguageSelection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    SourceSelected(Language),
    TargetSelected(Language),
    Swap,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    catalog: LanguageCatalog,
    selection: LanguageSelection,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog and selects the configured defaults.
    pub fn load(&mut self, catalog: LanguageCatalog, defaults: &LanguagesConfig) {
        tracing::info!(
            source = catalog.source.len(),
            target = catalog.target.len(),
            "language catalog loaded"
        );
        self.selection = LanguageSelection::with_defaults(
            &catalog,
            &defaults.default_source,
            &defaults.default_target,
        );
        self.catalog = catalog;
    }

    #[must_use]
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> &LanguageSelection {
        &self.selection
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SourceSelected(language) => self.selection.source = Some(language),
            Message::TargetSelected(language) => self.selection.target = Some(language),
            Message::Swap => {
                if !self.selection.swap(&self.catalog) {
                    tracing::debug!("swap ignored while source is auto-detect");
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let source = labelled(
            i18n.tr("language-source"),
            pick_list(
                self.catalog.source.as_slice(),
                self.selection.source.as_ref(),
                Message::SourceSelected,
            )
            .placeholder(i18n.tr("language-placeholder"))
            .width(Length::Fill)
            .into(),
        );

        let target = labelled(
            i18n.tr("language-target"),
            pick_list(
                self.catalog.target.as_slice(),
                self.selection.target.as_ref(),
                Message::TargetSelected,
            )
            .placeholder(i18n.tr("language-placeholder"))
            .width(Length::Fill)
            .into(),
        );

        // The server cannot translate into "auto", so swapping is disabled
        let swap = button(Text::new("⇄").size(typography::TITLE_SM))
            .on_press_maybe((!self.selection.is_auto_detect()).then_some(Message::Swap))
            .width(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::ghost);

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Bottom)
            .push(source)
            .push(swap)
            .push(target)
            .into()
    }
}

fn labelled<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::CAPTION))
        .push(control)
        .into()
}
